//! One module per route.

mod campaign_details;
mod community;
mod creator_dashboard;
mod dashboard;
mod feature;
mod home;
mod landing;
mod login;
mod not_found;
mod poolfunding;
mod profile;
mod register;
mod wallet_connect;

pub use campaign_details::CampaignDetails;
pub use community::CommunityDetail;
pub use creator_dashboard::CreatorDashboard;
pub use dashboard::Dashboard;
pub use feature::{
    ArtsCreative, CollaborativeInvestments, GreenProjects, ProjectCrowdfunding,
    RealEstateInvestment, SocialWelfare, TransparentTenders,
};
pub use home::Home;
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use poolfunding::PoolFunding;
pub use profile::Profile;
pub use register::Register;
pub use wallet_connect::WalletConnect;

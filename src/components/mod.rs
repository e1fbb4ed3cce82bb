//! Page-level building blocks for ChainFund.

mod campaign_card;
mod community_card;
mod feature_card;
mod nav_header;
mod not_found_panel;

pub use campaign_card::CampaignTile;
pub use community_card::{DiscoverCommunityCard, JoinedCommunityCard};
pub use feature_card::FeatureCard;
pub use nav_header::{HeaderKind, NavHeader};
pub use not_found_panel::NotFoundPanel;

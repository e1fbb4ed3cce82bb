use chainfund_core::Destination;
use chainfund_ui::ToastStack;
use dioxus::prelude::*;

use crate::context::provide_app_context;
use crate::pages::{
    ArtsCreative, CampaignDetails, CollaborativeInvestments, CommunityDetail, CreatorDashboard,
    Dashboard, GreenProjects, Home, Landing, Login, NotFound, PoolFunding, Profile,
    ProjectCrowdfunding, RealEstateInvestment, Register, SocialWelfare, TransparentTenders,
    WalletConnect,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with Login / Register
/// - `/home` - Product overview and feature catalogue
/// - `/dashboard`, `/community/:id`, `/profile` - Community pools
/// - `/poolfunding/...` - Campaign listing, details and creation
/// - `/features/...` - Informational pages
///
/// There are no guards; every page is reachable directly.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/home")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/wallet-connect")]
    WalletConnect {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/community/:id")]
    CommunityDetail { id: String },
    #[route("/profile")]
    Profile {},
    #[route("/poolfunding")]
    PoolFunding {},
    #[route("/poolfunding/campaign/:id")]
    CampaignDetails { id: String },
    #[route("/poolfunding/create")]
    CreatorDashboard {},
    #[route("/features/project-crowdfunding")]
    ProjectCrowdfunding {},
    #[route("/features/collaborative-investments")]
    CollaborativeInvestments {},
    #[route("/features/real-estate-investment")]
    RealEstateInvestment {},
    #[route("/features/transparent-tenders")]
    TransparentTenders {},
    #[route("/features/social-welfare")]
    SocialWelfare {},
    #[route("/features/green-projects")]
    GreenProjects {},
    #[route("/features/arts-creative")]
    ArtsCreative {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Dashboard => Route::Dashboard {},
            Destination::WalletConnect => Route::WalletConnect {},
            Destination::Community(id) => Route::CommunityDetail { id: id.to_string() },
            Destination::Campaign(id) => Route::CampaignDetails { id: id.to_string() },
        }
    }
}

/// Root application component.
///
/// Provides global styles, the shared store and toaster, and routing.
#[component]
pub fn App() -> Element {
    let toaster = provide_app_context();

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastStack {
            toasts: toaster.entries(),
            on_dismiss: move |id| toaster.dismiss(id),
        }
    }
}

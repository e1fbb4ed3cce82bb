//! Informational feature pages.
//!
//! Seven product areas share one layout; only the copy differs.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavHeader;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Feature {
    ProjectCrowdfunding,
    CollaborativeInvestments,
    RealEstateInvestment,
    TransparentTenders,
    SocialWelfare,
    GreenProjects,
    ArtsCreative,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::ProjectCrowdfunding,
        Feature::CollaborativeInvestments,
        Feature::RealEstateInvestment,
        Feature::TransparentTenders,
        Feature::SocialWelfare,
        Feature::GreenProjects,
        Feature::ArtsCreative,
    ];

    /// Path segment under `/features/`
    pub fn slug(&self) -> &'static str {
        match self {
            Feature::ProjectCrowdfunding => "project-crowdfunding",
            Feature::CollaborativeInvestments => "collaborative-investments",
            Feature::RealEstateInvestment => "real-estate-investment",
            Feature::TransparentTenders => "transparent-tenders",
            Feature::SocialWelfare => "social-welfare",
            Feature::GreenProjects => "green-projects",
            Feature::ArtsCreative => "arts-creative",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Feature::ProjectCrowdfunding => "Project Crowdfunding",
            Feature::CollaborativeInvestments => "Collaborative Investments",
            Feature::RealEstateInvestment => "Real Estate Investment Pools",
            Feature::TransparentTenders => "Transparent Tenders & Bids",
            Feature::SocialWelfare => "Social Welfare & Community Development",
            Feature::GreenProjects => "Green & Sustainable Projects",
            Feature::ArtsCreative => "Arts & Creative Works",
        }
    }

    /// One-line pitch for the home page card
    pub fn summary(&self) -> &'static str {
        match self {
            Feature::ProjectCrowdfunding => "Support innovative projects with milestone-based fund release.",
            Feature::CollaborativeInvestments => "Invest together and share profits fairly through smart contracts.",
            Feature::RealEstateInvestment => "Co-own properties and earn rental or resale profits transparently.",
            Feature::TransparentTenders => "Fair bidding and milestone-based payments for government and corporate projects.",
            Feature::SocialWelfare => "Fund education, healthcare, and public infrastructure with transparency.",
            Feature::GreenProjects => "Support renewable energy, tree plantations, and climate-friendly initiatives.",
            Feature::ArtsCreative => "Help artists, writers, and filmmakers bring ideas to life transparently.",
        }
    }

    /// Longer copy on the feature's own page
    pub fn pitch(&self) -> &'static str {
        match self {
            Feature::ProjectCrowdfunding => "Back creators whose funds unlock only as each milestone is approved by backers.",
            Feature::CollaborativeInvestments => "Pool capital with people you trust and split returns by contribution, on rules everyone can read.",
            Feature::RealEstateInvestment => "Own a share of income property with a transparent ledger of rent, costs and payouts.",
            Feature::TransparentTenders => "Publish tenders, receive sealed bids and pay contractors per delivered milestone.",
            Feature::SocialWelfare => "Fund education, healthcare, and public infrastructure with transparency and community-driven decision making.",
            Feature::GreenProjects => "Direct pooled money to renewable energy and reforestation with verifiable impact reports.",
            Feature::ArtsCreative => "Let audiences fund albums, books and films, and follow every release of funds.",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Feature::ProjectCrowdfunding => "\u{1F4C8}",
            Feature::CollaborativeInvestments => "\u{1F465}",
            Feature::RealEstateInvestment => "\u{1F6E1}",
            Feature::TransparentTenders => "\u{2705}",
            Feature::SocialWelfare => "\u{2764}",
            Feature::GreenProjects => "\u{1F343}",
            Feature::ArtsCreative => "\u{1F3A8}",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Feature::ProjectCrowdfunding => Route::ProjectCrowdfunding {},
            Feature::CollaborativeInvestments => Route::CollaborativeInvestments {},
            Feature::RealEstateInvestment => Route::RealEstateInvestment {},
            Feature::TransparentTenders => Route::TransparentTenders {},
            Feature::SocialWelfare => Route::SocialWelfare {},
            Feature::GreenProjects => Route::GreenProjects {},
            Feature::ArtsCreative => Route::ArtsCreative {},
        }
    }

    /// Where the home page card leads. Crowdfunding is live, so its card
    /// opens the campaign listing.
    pub fn card_target(&self) -> Route {
        match self {
            Feature::ProjectCrowdfunding => Route::PoolFunding {},
            other => other.route(),
        }
    }
}

#[component]
fn FeaturePage(feature: Feature) -> Element {
    rsx! {
        div { class: "page",
            NavHeader {}
            main { class: "container narrow center stack-lg",
                Link { class: "btn btn-ghost", to: Route::Home {}, "\u{2190} Back to Home" }
                h1 { class: "display", "{feature.title()}" }
                p { class: "lead muted", "This module is under development" }
                div { class: "hero-panel",
                    p { class: "lead", "{feature.pitch()}" }
                }
                if feature == Feature::ProjectCrowdfunding {
                    Link { class: "btn btn-gradient btn-lg", to: Route::PoolFunding {}, "Browse Campaigns" }
                }
            }
        }
    }
}

#[component]
pub fn ProjectCrowdfunding() -> Element {
    rsx! { FeaturePage { feature: Feature::ProjectCrowdfunding } }
}

#[component]
pub fn CollaborativeInvestments() -> Element {
    rsx! { FeaturePage { feature: Feature::CollaborativeInvestments } }
}

#[component]
pub fn RealEstateInvestment() -> Element {
    rsx! { FeaturePage { feature: Feature::RealEstateInvestment } }
}

#[component]
pub fn TransparentTenders() -> Element {
    rsx! { FeaturePage { feature: Feature::TransparentTenders } }
}

#[component]
pub fn SocialWelfare() -> Element {
    rsx! { FeaturePage { feature: Feature::SocialWelfare } }
}

#[component]
pub fn GreenProjects() -> Element {
    rsx! { FeaturePage { feature: Feature::GreenProjects } }
}

#[component]
pub fn ArtsCreative() -> Element {
    rsx! { FeaturePage { feature: Feature::ArtsCreative } }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn slugs_match_routes() {
        for feature in Feature::ALL {
            let path = format!("/features/{}", feature.slug());
            assert_eq!(feature.route().to_string(), path);
            assert_eq!(Route::from_str(&path).ok(), Some(feature.route()));
        }
    }

    #[test]
    fn crowdfunding_card_opens_listing() {
        assert_eq!(Feature::ProjectCrowdfunding.card_target(), Route::PoolFunding {});
        assert_eq!(Feature::ArtsCreative.card_target(), Route::ArtsCreative {});
    }
}

//! Navigation Header Component
//!
//! Public pages show Login / Register; signed-in pages link to the
//! dashboard, campaigns and profile.

use dioxus::prelude::*;

use crate::app::Route;

/// Which set of links the header shows
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeaderKind {
    #[default]
    Public,
    App,
}

/// A link in the signed-in header
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavLocation {
    Dashboard,
    Campaigns,
    Profile,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [
        NavLocation::Dashboard,
        NavLocation::Campaigns,
        NavLocation::Profile,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Dashboard => "Communities",
            NavLocation::Campaigns => "Campaigns",
            NavLocation::Profile => "Profile",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLocation::Dashboard => Route::Dashboard {},
            NavLocation::Campaigns => Route::PoolFunding {},
            NavLocation::Profile => Route::Profile {},
        }
    }
}

/// Sticky top bar with the ChainFund wordmark
#[component]
pub fn NavHeader(#[props(default)] kind: HeaderKind) -> Element {
    let current = use_route::<Route>();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-inner",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand-icon", "\u{1F4B0}" }
                    span { class: "brand-name", "ChainFund" }
                }
                nav { class: "nav-links",
                    {match kind {
                        HeaderKind::Public => rsx! {
                            Link { class: "btn btn-ghost", to: Route::Login {}, "Login" }
                            Link { class: "btn btn-gradient", to: Route::Register {}, "Register" }
                        },
                        HeaderKind::App => rsx! {
                            for location in NavLocation::ALL {
                                Link {
                                    key: "{location.display_name()}",
                                    class: if location.route() == current { "nav-link active" } else { "nav-link" },
                                    to: location.route(),
                                    "{location.display_name()}"
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_locations_route() {
        assert_eq!(NavLocation::Campaigns.route(), Route::PoolFunding {});
        assert_eq!(NavLocation::Dashboard.display_name(), "Communities");
    }
}

//! Campaign listing with a category filter.

use chainfund_core::view::CampaignListState;
use chainfund_core::CampaignCategory;
use chainfund_ui::{Select, SelectOption};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CampaignTile, HeaderKind, NavHeader};
use crate::context::{use_config, use_store};

fn category_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("all", "All Categories"))
        .chain(
            CampaignCategory::ALL
                .into_iter()
                .map(|c| SelectOption::new(c.slug(), c.label())),
        )
        .collect()
}

#[component]
pub fn PoolFunding() -> Element {
    let store = use_store();
    let config = use_config();
    let mut state = use_signal(|| CampaignListState::load(&store.peek(), config.today()));

    let filter = state.read().filter.map(|c| c.slug()).unwrap_or("all");
    let cards: Vec<_> = state.read().visible().cloned().collect();

    rsx! {
        div { class: "page",
            NavHeader { kind: HeaderKind::App }
            main { class: "container stack-xl",
                div { class: "row-between wrap",
                    div { class: "stack-sm",
                        Link { class: "btn btn-ghost back-link", to: Route::Home {}, "\u{2190} Back to Homepage" }
                        h1 { class: "page-title gradient-text", "Poolfunding Campaigns" }
                        p { class: "muted", "Back projects whose funds are released milestone by milestone." }
                    }
                    div { class: "row",
                        div { class: "filter",
                            Select {
                                value: filter.to_string(),
                                options: category_options(),
                                onchange: move |slug: String| {
                                    state.write().set_filter(CampaignCategory::from_slug(&slug));
                                },
                            }
                        }
                        Link { class: "btn btn-gradient", to: Route::CreatorDashboard {}, "\u{2795} Start a Campaign" }
                    }
                }

                if cards.is_empty() {
                    div { class: "card empty-state",
                        p { class: "muted", "No campaigns match this category yet." }
                    }
                } else {
                    div { class: "grid three",
                        for card in cards.iter().cloned() {
                            CampaignTile { key: "{card.id}", card }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_start_with_all() {
        let options = category_options();
        assert_eq!(options.len(), CampaignCategory::ALL.len() + 1);
        assert_eq!(options[0].value, "all");
        assert_eq!(options[5].label, "Social Impact");
        assert_eq!(CampaignCategory::from_slug(&options[0].value), None);
    }
}

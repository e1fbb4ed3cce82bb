//! Community dashboard: joined pools, quick actions and discovery.

use chainfund_core::view::DashboardState;
use chainfund_core::CommunityId;
use chainfund_core::metrics::format_usd;
use chainfund_ui::{Button, ButtonVariant, Dialog, Input, StatTile, TextArea};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{DiscoverCommunityCard, HeaderKind, JoinedCommunityCard, NavHeader};
use crate::context::{settle, use_store, use_toaster};

#[component]
pub fn Dashboard() -> Element {
    let store = use_store();
    let toaster = use_toaster();
    let navigator = use_navigator();
    let mut state = use_signal(|| DashboardState::load(&store.peek()));

    let mut join = move |id: CommunityId| {
        let result = state.write().join_community(id, &store.peek(), &toaster);
        settle(navigator, toaster, result);
    };

    let joined = state.read().joined.clone();
    let contributed: u64 = joined.iter().map(|j| j.contribution).sum();
    let pooled: u64 = joined.iter().map(|j| j.card.total_pool).sum();
    let discover = state.read().discover.clone();
    let create_open = state.read().create_open;
    let proposal_open = state.read().proposal_open;

    rsx! {
        div { class: "page",
            NavHeader { kind: HeaderKind::App }
            main { class: "container stack-xl",
                div { class: "stack",
                    h1 { class: "page-title", "Welcome to ChainFund Communities" }
                    p { class: "lead muted",
                        "Manage your community pools, vote on projects, and track every contribution."
                    }
                }

                div { class: "grid three",
                    StatTile {
                        value: joined.len().to_string(),
                        label: "Communities Joined".to_string(),
                        icon: "\u{1F465}".to_string(),
                    }
                    StatTile {
                        value: format_usd(contributed),
                        label: "My Contributions".to_string(),
                        icon: "\u{1F4B0}".to_string(),
                    }
                    StatTile {
                        value: format_usd(pooled),
                        label: "Pooled Across My Communities".to_string(),
                        icon: "\u{1F4C8}".to_string(),
                    }
                }

                section { class: "stack",
                    div { class: "row-between",
                        h2 { class: "section-title", "My Communities" }
                        span { class: "badge badge-primary", "{joined.len()} Joined" }
                    }
                    if joined.is_empty() {
                        div { class: "card empty-state",
                            p { class: "muted", "You haven't joined any communities yet." }
                        }
                    } else {
                        div { class: "grid two",
                            for entry in joined.iter().cloned() {
                                JoinedCommunityCard { key: "{entry.card.id}", entry }
                            }
                        }
                    }
                }

                section { class: "stack",
                    h2 { class: "section-title", "Quick Actions" }
                    div { class: "grid three",
                        Button {
                            variant: ButtonVariant::Gradient,
                            class: "action-tile".to_string(),
                            onclick: move |_| state.write().open_create(),
                            "\u{2795} Create New Community"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "action-tile".to_string(),
                            onclick: move |_| state.write().open_proposal(),
                            "\u{1F4C4} Submit Project Proposal"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "action-tile".to_string(),
                            onclick: move |_| {
                                navigator.push(Route::Profile {});
                            },
                            "\u{1F464} View Profile"
                        }
                    }
                }

                section { class: "stack",
                    h2 { class: "section-title", "Discover New Communities to Join" }
                    if discover.is_empty() {
                        div { class: "card empty-state",
                            p { class: "muted", "You've joined every community. Why not create one?" }
                        }
                    } else {
                        div { class: "grid three",
                            for card in discover.iter().cloned() {
                                DiscoverCommunityCard {
                                    key: "{card.id}",
                                    on_join: {
                                        let id = card.id;
                                        move |_| join(id)
                                    },
                                    card,
                                }
                            }
                        }
                    }
                }
            }

            Dialog {
                open: create_open,
                title: "Create New Community".to_string(),
                description: "Start a pool and invite others to contribute.".to_string(),
                on_close: move |_| state.write().close_create(),
                div { class: "stack",
                    Input {
                        value: state.read().community_draft.name.clone(),
                        oninput: move |v| state.write().community_draft.name = v,
                        label: "Community Name".to_string(),
                        placeholder: "e.g. Green Energy Collective".to_string(),
                        required: true,
                    }
                    Input {
                        value: state.read().community_draft.category.clone(),
                        oninput: move |v| state.write().community_draft.category = v,
                        label: "Category".to_string(),
                        placeholder: "e.g. Environment".to_string(),
                        required: true,
                    }
                    TextArea {
                        value: state.read().community_draft.description.clone(),
                        oninput: move |v| state.write().community_draft.description = v,
                        label: "Description".to_string(),
                        placeholder: "What will this community fund?".to_string(),
                    }
                    Input {
                        value: state.read().community_draft.goal.clone(),
                        oninput: move |v| state.write().community_draft.goal = v,
                        label: "Goal Amount".to_string(),
                        hint: "optional".to_string(),
                        input_type: "number".to_string(),
                        placeholder: "50000".to_string(),
                    }
                    div { class: "row-end",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| state.write().close_create(),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Gradient,
                            onclick: move |_| {
                                let result = state.write().create_community(&store.peek(), &toaster);
                                settle(navigator, toaster, result);
                            },
                            "Create Community"
                        }
                    }
                }
            }

            Dialog {
                open: proposal_open,
                title: "Submit Project Proposal".to_string(),
                description: "Members vote on proposals before any funds are released.".to_string(),
                on_close: move |_| state.write().close_proposal(),
                div { class: "stack",
                    Input {
                        value: state.read().proposal_draft.title.clone(),
                        oninput: move |v| state.write().proposal_draft.title = v,
                        label: "Project Title".to_string(),
                        required: true,
                    }
                    TextArea {
                        value: state.read().proposal_draft.description.clone(),
                        oninput: move |v| state.write().proposal_draft.description = v,
                        label: "Description".to_string(),
                    }
                    Input {
                        value: state.read().proposal_draft.estimated_cost.clone(),
                        oninput: move |v| state.write().proposal_draft.estimated_cost = v,
                        label: "Estimated Cost".to_string(),
                        input_type: "number".to_string(),
                        placeholder: "10000".to_string(),
                        required: true,
                    }
                    div { class: "row-end",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| state.write().close_proposal(),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Gradient,
                            onclick: move |_| {
                                state.write().submit_proposal(&toaster);
                            },
                            "Submit Proposal"
                        }
                    }
                }
            }
        }
    }
}

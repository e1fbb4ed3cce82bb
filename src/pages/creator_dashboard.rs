//! Creator dashboard: campaign form, "Your Campaigns" and update posting.

use chainfund_core::metrics::{format_usd, progress_percent};
use chainfund_core::view::{CreatorDashboardState, MilestoneField};
use chainfund_core::{CampaignCategory, Notification, Notifier};
use chainfund_ui::{
    BadgeLabel, Button, ButtonSize, ButtonVariant, Card, Checkbox, CloseButton, Dialog, Input,
    ProgressBar, Select, SelectOption, StatusBadge, TextArea,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{HeaderKind, NavHeader};
use crate::context::{settle, use_config, use_store, use_toaster};

fn category_options() -> Vec<SelectOption> {
    CampaignCategory::ALL
        .into_iter()
        .map(|c| SelectOption::new(c.slug(), c.label()))
        .collect()
}

#[component]
pub fn CreatorDashboard() -> Element {
    let store = use_store();
    let config = use_config();
    let toaster = use_toaster();
    let navigator = use_navigator();
    let mut state = use_signal(|| CreatorDashboardState::load(&store.peek()));

    let snapshot = state.read().clone();
    let draft = &snapshot.draft;
    let update_open = snapshot.update.campaign_id.is_some();
    let update_title = snapshot
        .update
        .campaign_id
        .and_then(|id| snapshot.my_campaigns.iter().find(|c| c.id == id))
        .map(|c| c.title.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "page",
            NavHeader { kind: HeaderKind::App }
            main { class: "container stack-xl",
                div { class: "stack-sm",
                    Link { class: "btn btn-ghost back-link", to: Route::PoolFunding {}, "\u{2190} Back to Campaigns" }
                    h1 { class: "page-title gradient-text", "Creator Dashboard" }
                    p { class: "muted", "Create and manage your campaigns" }
                }

                div { class: "detail-grid",
                    Card { title: "Create New Campaign".to_string(),
                        div { class: "stack",
                            div { class: "form-grid",
                                Input {
                                    value: draft.title.clone(),
                                    oninput: move |v| state.write().draft.title = v,
                                    label: "Project Title".to_string(),
                                    placeholder: "Enter project title".to_string(),
                                    required: true,
                                }
                                Select {
                                    value: draft.category.map(|c| c.slug()).unwrap_or_default().to_string(),
                                    options: category_options(),
                                    onchange: move |slug: String| {
                                        state.write().draft.category = CampaignCategory::from_slug(&slug);
                                    },
                                    label: "Category".to_string(),
                                    placeholder: "Select category".to_string(),
                                }
                            }
                            TextArea {
                                value: draft.description.clone(),
                                oninput: move |v| state.write().draft.description = v,
                                label: "Description".to_string(),
                                placeholder: "Describe your project in detail...".to_string(),
                                rows: 5,
                            }
                            div { class: "form-grid",
                                Input {
                                    value: draft.goal.clone(),
                                    oninput: move |v| state.write().draft.goal = v,
                                    label: "Goal Amount (USD)".to_string(),
                                    input_type: "number".to_string(),
                                    placeholder: "0".to_string(),
                                    required: true,
                                }
                                Input {
                                    value: draft.deadline.clone(),
                                    oninput: move |v| state.write().draft.deadline = v,
                                    label: "Deadline".to_string(),
                                    input_type: "date".to_string(),
                                    required: true,
                                }
                            }
                            Input {
                                value: draft.image.clone().unwrap_or_default(),
                                oninput: move |v: String| {
                                    state.write().draft.image = Some(v).filter(|s| !s.trim().is_empty());
                                },
                                label: "Project Image".to_string(),
                                hint: "image URL".to_string(),
                                placeholder: "https://...".to_string(),
                            }

                            div { class: "stack-sm",
                                div { class: "row-between",
                                    span { class: "input-label", "Milestones" }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Small,
                                        onclick: move |_| state.write().add_milestone(),
                                        "\u{2795} Add Milestone"
                                    }
                                }
                                for (index, row) in draft.milestones.iter().enumerate() {
                                    div { key: "{index}", class: "milestone-draft",
                                        Input {
                                            value: row.name.clone(),
                                            oninput: move |v| state.write().set_milestone_field(index, MilestoneField::Name, v),
                                            placeholder: "Milestone name".to_string(),
                                            id: format!("milestone-name-{index}"),
                                        }
                                        Input {
                                            value: row.amount.clone(),
                                            oninput: move |v| state.write().set_milestone_field(index, MilestoneField::Amount, v),
                                            input_type: "number".to_string(),
                                            placeholder: "Amount".to_string(),
                                            id: format!("milestone-amount-{index}"),
                                        }
                                        Input {
                                            value: row.date.clone(),
                                            oninput: move |v| state.write().set_milestone_field(index, MilestoneField::Date, v),
                                            input_type: "date".to_string(),
                                            id: format!("milestone-date-{index}"),
                                        }
                                        CloseButton {
                                            onclick: move |_| {
                                                if let Err(e) = state.write().remove_milestone(index) {
                                                    toaster.notify(Notification::error("Cannot Remove Milestone", e.to_string()));
                                                }
                                            },
                                        }
                                    }
                                }
                            }

                            Checkbox {
                                checked: draft.confirmed,
                                onchange: move |checked| state.write().draft.confirmed = checked,
                                label: "I confirm I will use funds only for this project and provide regular updates to backers.".to_string(),
                                id: "fund-confirmation".to_string(),
                            }
                            Button {
                                variant: ButtonVariant::Gradient,
                                size: ButtonSize::Large,
                                full_width: true,
                                disabled: !snapshot.can_submit(),
                                onclick: move |_| {
                                    let result = state.write().submit(&store.peek(), &toaster, config.today());
                                    settle(navigator, toaster, result);
                                },
                                "Create Campaign"
                            }
                        }
                    }

                    Card { title: "Your Campaigns".to_string(),
                        div { class: "stack",
                            if snapshot.my_campaigns.is_empty() {
                                p { class: "muted", "Campaigns you start will show up here." }
                            }
                            for summary in snapshot.my_campaigns.iter() {
                                div { key: "{summary.id}", class: "list-row stack-sm",
                                    div { class: "row-between",
                                        Link {
                                            class: "strong link",
                                            to: Route::CampaignDetails { id: summary.id.to_string() },
                                            "{summary.title}"
                                        }
                                        StatusBadge { label: summary.status.badge_label(), tone: summary.status.badge_tone() }
                                    }
                                    ProgressBar { percent: progress_percent(summary.raised, summary.goal) }
                                    div { class: "row-between small",
                                        span { "{format_usd(summary.raised)} raised" }
                                        span { class: "muted", "of {format_usd(summary.goal)}" }
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Small,
                                        onclick: {
                                            let id = summary.id;
                                            move |_| state.write().open_update(id)
                                        },
                                        "\u{1F4DD} Submit Update"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Dialog {
                open: update_open,
                title: "Post Project Update".to_string(),
                description: update_title,
                on_close: move |_| state.write().close_update(),
                div { class: "stack",
                    TextArea {
                        value: snapshot.update.content.clone(),
                        oninput: move |v| state.write().update.content = v,
                        label: "Update Content".to_string(),
                        placeholder: "Share your progress with backers...".to_string(),
                        rows: 5,
                    }
                    Input {
                        value: snapshot.update.image.clone().unwrap_or_default(),
                        oninput: move |v: String| {
                            state.write().update.image = Some(v).filter(|s| !s.trim().is_empty());
                        },
                        label: "Optional Image".to_string(),
                        placeholder: "https://...".to_string(),
                    }
                    Button {
                        variant: ButtonVariant::Gradient,
                        full_width: true,
                        onclick: move |_| {
                            let result = state.write().post_update(&store.peek(), &toaster, config.today());
                            settle(navigator, toaster, result);
                        },
                        "Post Update"
                    }
                }
            }
        }
    }
}

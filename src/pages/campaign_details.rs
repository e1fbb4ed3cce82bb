//! Campaign details: story, milestones, updates, creator, voting and funding.

use chainfund_core::metrics::{format_usd, initials};
use chainfund_core::view::CampaignDetailState;
use chainfund_core::{CampaignId, VoteChoice};
use chainfund_ui::{
    Avatar, BadgeLabel, Button, ButtonSize, ButtonVariant, Card, Checkbox, Input, ProgressBar,
    StatusBadge, VerifiedBadge,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{HeaderKind, NavHeader, NotFoundPanel};
use crate::context::{settle, use_config, use_store, use_toaster};

#[component]
pub fn CampaignDetails(id: String) -> Element {
    let found = id.parse::<CampaignId>().ok();

    rsx! {
        div { class: "page",
            NavHeader { kind: HeaderKind::App }
            main { class: "container stack-xl",
                Link { class: "btn btn-ghost back-link", to: Route::PoolFunding {}, "\u{2190} Back to Campaigns" }
                if let Some(id) = found {
                    CampaignBody { key: "{id}", id }
                } else {
                    NotFoundPanel {
                        what: "Campaign".to_string(),
                        back_to: Route::PoolFunding {},
                        back_label: "Back to Campaigns".to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn CampaignBody(id: CampaignId) -> Element {
    let store = use_store();
    let config = use_config();
    let toaster = use_toaster();
    let navigator = use_navigator();
    let mut state = use_signal(|| match CampaignDetailState::load(&store.peek(), id) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(error = %e, campaign = %id, "failed to load campaign");
            None
        }
    });

    let Some(current) = state.read().clone() else {
        return rsx! {
            NotFoundPanel {
                what: "Campaign".to_string(),
                back_to: Route::PoolFunding {},
                back_label: "Back to Campaigns".to_string(),
            }
        };
    };

    let mut vote = move |choice: VoteChoice| {
        let mut guard = state.write();
        if let Some(s) = guard.as_mut() {
            let result = s.vote_milestone(choice, &toaster);
            settle(navigator, toaster, result);
        }
    };

    let campaign = &current.campaign;
    let progress = campaign.progress_percent();
    let countdown = current.countdown(config.today());
    let current_milestone = current.current_milestone();

    rsx! {
        div { class: "detail-grid",
            div { class: "stack-lg",
                if let Some(src) = &campaign.image_url {
                    img { class: "hero-image", src: "{src}", alt: "{campaign.title}" }
                }
                div { class: "row wrap",
                    h1 { class: "page-title", "{campaign.title}" }
                    if campaign.verified {
                        VerifiedBadge {}
                    }
                    StatusBadge { label: campaign.status.badge_label(), tone: campaign.status.badge_tone() }
                }

                div { class: "stat-grid three",
                    div {
                        p { class: "strong large primary", "{format_usd(campaign.raised)}" }
                        p { class: "muted small", "raised" }
                    }
                    div {
                        p { class: "strong large", "{format_usd(campaign.goal)}" }
                        p { class: "muted small", "goal" }
                    }
                    div {
                        p { class: "strong large", "{countdown}" }
                        p { class: "muted small", "{campaign.category.label()}" }
                    }
                }
                ProgressBar { percent: progress, caption: format!("{progress}% funded") }

                div { class: "prose",
                    for (index, paragraph) in campaign.paragraphs().enumerate() {
                        p { key: "{index}", "{paragraph}" }
                    }
                }

                Card { title: "Project Milestones".to_string(),
                    div { class: "stack",
                        for (index, milestone) in campaign.milestones.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: if Some(index) == current_milestone { "milestone-row current" } else { "milestone-row" },
                                div { class: "milestone-number", "{index + 1}" }
                                div { class: "grow",
                                    div { class: "row",
                                        h4 { class: "strong", "{milestone.name}" }
                                        StatusBadge {
                                            label: milestone.status.badge_label(),
                                            tone: milestone.status.badge_tone(),
                                        }
                                    }
                                    p { class: "muted small", "{milestone.description}" }
                                    if let Some(date) = milestone.target_date {
                                        p { class: "muted small", "Target: {date}" }
                                    }
                                }
                                span { class: "strong", "{format_usd(milestone.amount)}" }
                            }
                        }
                    }
                }

                Card { title: "Project Updates".to_string(),
                    div { class: "stack",
                        if campaign.updates.is_empty() {
                            p { class: "muted", "No updates yet." }
                        }
                        for (index, update) in campaign.updates.iter().enumerate() {
                            div { key: "{index}", class: "update-row",
                                div { class: "row-between",
                                    h4 { class: "strong", "{update.title}" }
                                    span { class: "muted small", "{update.date}" }
                                }
                                p { class: "muted", "{update.content}" }
                                if let Some(src) = &update.image_url {
                                    img { class: "update-image", src: "{src}", alt: "Update" }
                                }
                            }
                        }
                    }
                }
            }

            aside { class: "stack-lg",
                Card { title: "Project Creator".to_string(),
                    div { class: "row",
                        Avatar {
                            initials: initials(&campaign.creator.name),
                            image_url: campaign.creator.avatar_url.clone(),
                        }
                        div {
                            p { class: "strong",
                                "{campaign.creator.name}"
                                if campaign.creator.verified {
                                    span { class: "success", " \u{2713}" }
                                }
                            }
                            p { class: "muted small", "{campaign.creator.past_projects} successful projects" }
                        }
                    }
                    Button { variant: ButtonVariant::Outline, full_width: true, disabled: true, "View Past Projects" }
                }

                Card { title: "Milestone Voting".to_string(),
                    {match (current_milestone, current.milestone_ballot) {
                        (None, _) => rsx! {
                            p { class: "muted small", "All milestones have been approved." }
                        },
                        (Some(index), Some(choice)) => {
                            let name = campaign.milestones.get(index).map(|m| m.name.as_str()).unwrap_or_default();
                            rsx! {
                                p { class: "muted small",
                                    "You voted {choice.label()} on Milestone {index + 1} ({name})."
                                }
                            }
                        }
                        (Some(index), None) => rsx! {
                            p { class: "muted small",
                                "Backers voting in progress for Milestone {index + 1} approval"
                            }
                            div { class: "grid two",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Small,
                                    onclick: move |_| vote(VoteChoice::Yes),
                                    "\u{1F44D} Yes"
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Small,
                                    onclick: move |_| vote(VoteChoice::No),
                                    "\u{1F44E} No"
                                }
                            }
                        },
                    }}
                }

                Card { title: "Fund This Project".to_string(),
                    div { class: "stack",
                        Input {
                            value: current.fund_amount.clone(),
                            oninput: move |v| {
                                if let Some(s) = state.write().as_mut() {
                                    s.fund_amount = v;
                                }
                            },
                            label: "Amount (USD)".to_string(),
                            input_type: "number".to_string(),
                            placeholder: "0.00".to_string(),
                        }
                        Checkbox {
                            checked: current.agreed,
                            onchange: move |checked| {
                                if let Some(s) = state.write().as_mut() {
                                    s.agreed = checked;
                                }
                            },
                            label: "I understand this is a high-risk project and may fail. I accept this risk.".to_string(),
                            id: "risk-agreement".to_string(),
                        }
                        Button {
                            variant: ButtonVariant::Gradient,
                            full_width: true,
                            disabled: !current.can_fund(),
                            onclick: move |_| {
                                if let Some(s) = state.write().as_mut() {
                                    s.fund(&toaster);
                                }
                            },
                            "Fund Now"
                        }
                        p { class: "muted small center", "\u{1F512} Funds stay locked until backers approve each milestone." }
                    }
                }
            }
        }
    }
}

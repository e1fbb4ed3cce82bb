//! Community detail: pool stats, votes, exit controls, projects and members.

use chainfund_core::metrics::format_usd;
use chainfund_core::view::{CommunityState, EXIT_APPROVAL_PERCENT, EXIT_VOTING_DAYS};
use chainfund_core::{CommunityId, Vote, VoteChoice, VoteId};
use chainfund_ui::{
    Avatar, BadgeLabel, Button, ButtonSize, ButtonVariant, Card, Dialog, ProgressBar, StatusBadge,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{HeaderKind, NavHeader, NotFoundPanel};
use crate::context::{settle, use_config, use_store, use_toaster};

/// Parse a community id from its path segment
pub fn parse_community_id(raw: &str) -> Option<CommunityId> {
    raw.parse().ok()
}

#[component]
pub fn CommunityDetail(id: String) -> Element {
    rsx! {
        div { class: "page",
            NavHeader { kind: HeaderKind::App }
            main { class: "container stack-xl",
                Link { class: "btn btn-ghost back-link", to: Route::Dashboard {}, "\u{2190} Back to Dashboard" }
                if let Some(id) = parse_community_id(&id) {
                    CommunityBody { key: "{id}", id }
                } else {
                    NotFoundPanel {
                        what: "Community".to_string(),
                        back_to: Route::Dashboard {},
                        back_label: "Back to Dashboard".to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn CommunityBody(id: CommunityId) -> Element {
    let store = use_store();
    let config = use_config();
    let toaster = use_toaster();
    let navigator = use_navigator();
    let mut state = use_signal(|| match CommunityState::load(&store.peek(), id) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(error = %e, community = %id, "failed to load community");
            None
        }
    });

    let Some(current) = state.read().clone() else {
        return rsx! {
            NotFoundPanel {
                what: "Community".to_string(),
                back_to: Route::Dashboard {},
                back_label: "Back to Dashboard".to_string(),
            }
        };
    };

    let mut cast = move |vote: VoteId, choice: VoteChoice| {
        let mut guard = state.write();
        if let Some(s) = guard.as_mut() {
            let result = s.cast_vote(vote, choice, &toaster);
            settle(navigator, toaster, result);
        }
    };

    let community = &current.community;
    let contribution = current.membership.as_ref().map(|m| m.contribution).unwrap_or(0);
    let member = current.is_member();

    rsx! {
        Card {
            div { class: "community-head",
                Avatar { initials: community.logo.clone(), large: true }
                div { class: "stack-sm",
                    h1 { class: "page-title", "{community.name}" }
                    p { class: "muted", "{community.description}" }
                    div { class: "row",
                        StatusBadge {
                            label: community.status.badge_label(),
                            tone: community.status.badge_tone(),
                        }
                        if let Some(m) = &current.membership {
                            StatusBadge { label: m.role.badge_label(), tone: m.role.badge_tone() }
                        }
                    }
                }
            }
            div { class: "stat-grid four",
                div {
                    p { class: "muted small", "Total Pool" }
                    p { class: "strong large", "{format_usd(community.total_pool)}" }
                }
                div {
                    p { class: "muted small", "Members" }
                    p { class: "strong large", "\u{1F465} {community.member_count}" }
                }
                div {
                    p { class: "muted small", "Projects" }
                    p { class: "strong large", "{community.active_projects}" }
                }
                div {
                    p { class: "muted small", "My Contribution" }
                    p { class: "strong large primary", "{format_usd(contribution)}" }
                }
            }
        }

        if member {
            section { class: "grid three",
                Button {
                    variant: ButtonVariant::Gradient,
                    size: ButtonSize::Large,
                    onclick: move |_| {
                        if let Some(s) = state.write().as_mut() {
                            s.vote_open = true;
                        }
                    },
                    "\u{2705} Vote"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Large,
                    disabled: current.exit_requested,
                    onclick: move |_| {
                        if let Some(s) = state.write().as_mut() {
                            s.exit_open = true;
                        }
                    },
                    if current.exit_requested { "Exit Requested" } else { "\u{21A9} Request Exit" }
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    size: ButtonSize::Large,
                    onclick: move |_| {
                        if let Some(s) = state.write().as_mut() {
                            s.force_exit_open = true;
                        }
                    },
                    "\u{26A0} Force Exit"
                }
            }
        } else if current.left {
            div { class: "card notice",
                p { "You have left this community. Returning to your dashboard..." }
            }
        }

        section { class: "stack",
            h2 { class: "section-title", "Community Projects" }
            div { class: "stack",
                for project in community.projects.iter() {
                    Card { key: "{project.id}",
                        div { class: "row-between",
                            h3 { class: "card-title", "{project.title}" }
                            StatusBadge {
                                label: project.status.badge_label(),
                                tone: project.status.badge_tone(),
                            }
                        }
                        p { class: "muted", "{project.description}" }
                        div { class: "row-between small",
                            span { "Progress: {project.progress_percent()}%" }
                            span { "{format_usd(project.released)} / {format_usd(project.requested)}" }
                        }
                        ProgressBar { percent: project.progress_percent() }
                        p { class: "muted small",
                            strong { "Latest Update: " }
                            "{project.latest_update}"
                        }
                    }
                }
            }
        }

        section { class: "stack",
            h2 { class: "section-title", "Community Members" }
            div { class: "grid four",
                for (index, m) in community.roster.iter().enumerate() {
                    div { key: "{index}", class: "card member-card",
                        Avatar { initials: m.initials() }
                        div {
                            p { class: "strong", "{m.name}" }
                            StatusBadge { label: m.role.badge_label(), tone: m.role.badge_tone() }
                        }
                    }
                }
            }
        }

        Dialog {
            open: current.vote_open,
            title: "Active Votes".to_string(),
            description: "Cast your vote on community proposals".to_string(),
            on_close: move |_| {
                if let Some(s) = state.write().as_mut() {
                    s.vote_open = false;
                }
            },
            div { class: "stack",
                if community.votes.is_empty() {
                    p { class: "muted", "There are no open votes right now." }
                }
                for vote in community.votes.iter().cloned() {
                    VoteCard {
                        key: "{vote.id}",
                        ballot: current.ballot(vote.id),
                        on_vote: {
                            let id = vote.id;
                            move |choice| cast(id, choice)
                        },
                        vote,
                    }
                }
            }
        }

        Dialog {
            open: current.exit_open,
            title: "Request Exit from Community".to_string(),
            description: "Your request will be voted on by other members. If approved, you will exit and receive remaining funds according to rules.".to_string(),
            on_close: move |_| {
                if let Some(s) = state.write().as_mut() {
                    s.exit_open = false;
                }
            },
            div { class: "stack",
                div { class: "notice",
                    h4 { class: "strong", "Exit Terms:" }
                    ul { class: "small",
                        li { "Community voting period: {EXIT_VOTING_DAYS} days" }
                        li { "Requires {EXIT_APPROVAL_PERCENT}% approval to exit with funds" }
                        li { "Your contribution: {format_usd(contribution)}" }
                    }
                }
                Button {
                    full_width: true,
                    onclick: move |_| {
                        if let Some(s) = state.write().as_mut() {
                            s.request_exit(&toaster);
                        }
                    },
                    "Submit Exit Request"
                }
            }
        }

        Dialog {
            open: current.force_exit_open,
            title: "Force Exit - No Refund".to_string(),
            description: "You will be removed from the community with no refund. Are you sure?".to_string(),
            on_close: move |_| {
                if let Some(s) = state.write().as_mut() {
                    s.force_exit_open = false;
                }
            },
            div { class: "stack",
                div { class: "notice danger",
                    p { class: "small",
                        strong { "Warning: " }
                        "This action cannot be undone. You will lose your {format_usd(contribution)} contribution."
                    }
                }
                div { class: "row-end",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            if let Some(s) = state.write().as_mut() {
                                s.force_exit_open = false;
                            }
                        },
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| {
                            let mut guard = state.write();
                            if let Some(s) = guard.as_mut() {
                                let result = s.force_exit(&store.peek(), &toaster, config.redirect_delay());
                                settle(navigator, toaster, result);
                            }
                        },
                        "Confirm Force Exit"
                    }
                }
            }
        }
    }
}

/// One open question with its tally and ballot buttons
#[component]
fn VoteCard(vote: Vote, ballot: Option<VoteChoice>, on_vote: EventHandler<VoteChoice>) -> Element {
    let closes = vote.closes_on.format("%b %-d, %Y").to_string();

    rsx! {
        Card {
            h3 { class: "strong", "{vote.title}" }
            p { class: "muted small", "{vote.description}" }
            div { class: "row-between small",
                span { "Yes: {vote.yes}" }
                span { "No: {vote.no}" }
                span { "Closes {closes}" }
            }
            ProgressBar { percent: vote.approval_percent() }
            if let Some(choice) = ballot {
                p { class: "small primary strong", "You voted {choice.label()}" }
            } else {
                div { class: "grid two",
                    Button {
                        variant: ButtonVariant::Gradient,
                        onclick: move |_| on_vote.call(VoteChoice::Yes),
                        "\u{1F44D} Yes"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_vote.call(VoteChoice::No),
                        "\u{1F44E} No"
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
    fn community_ids_parse() {
        assert_eq!(parse_community_id("4"), Some(CommunityId(4)));
        assert_eq!(parse_community_id("four"), None);
        assert_eq!(parse_community_id("-1"), None);
    }
}

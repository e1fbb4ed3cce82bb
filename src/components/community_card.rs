//! Community cards on the dashboard

use chainfund_core::metrics::format_usd;
use chainfund_core::view::{CommunityCard, JoinedCommunity};
use chainfund_ui::{BadgeLabel, Button, ButtonVariant, Card, StatusBadge};
use dioxus::prelude::*;

use crate::app::Route;

/// A community the user belongs to; opens its detail page
#[component]
pub fn JoinedCommunityCard(entry: JoinedCommunity) -> Element {
    let navigator = use_navigator();
    let id = entry.card.id;

    rsx! {
        Card {
            onclick: move |_| {
                navigator.push(Route::CommunityDetail { id: id.to_string() });
            },
            div { class: "row-between",
                div {
                    h3 { class: "card-title", "{entry.card.name}" }
                    StatusBadge {
                        label: entry.card.status.badge_label(),
                        tone: entry.card.status.badge_tone(),
                    }
                }
                StatusBadge { label: entry.role.badge_label(), tone: entry.role.badge_tone() }
            }
            div { class: "stat-grid three",
                div {
                    p { class: "muted small", "My Contribution" }
                    p { class: "strong large", "{format_usd(entry.contribution)}" }
                }
                div {
                    p { class: "muted small", "Total Pool" }
                    p { class: "strong large", "{format_usd(entry.card.total_pool)}" }
                }
                div {
                    p { class: "muted small", "Members" }
                    p { class: "strong large", "\u{1F465} {entry.card.member_count}" }
                }
            }
        }
    }
}

/// A community the user can join
#[component]
pub fn DiscoverCommunityCard(card: CommunityCard, on_join: EventHandler<()>) -> Element {
    rsx! {
        Card {
            h3 { class: "card-title", "{card.name}" }
            p { class: "muted small", "{card.description}" }
            div { class: "stat-grid two",
                div {
                    p { class: "muted small", "Total Pool" }
                    p { class: "strong", "{format_usd(card.total_pool)}" }
                }
                div {
                    p { class: "muted small", "Members" }
                    p { class: "strong", "\u{1F465} {card.member_count}" }
                }
            }
            Button {
                variant: ButtonVariant::Gradient,
                full_width: true,
                onclick: move |_| on_join.call(()),
                "Join Community"
            }
        }
    }
}

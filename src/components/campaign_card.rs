//! Campaign tile on the listing page

use chainfund_core::metrics::format_usd;
use chainfund_core::view::CampaignCard;
use chainfund_ui::{Card, ProgressBar, VerifiedBadge};
use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn CampaignTile(card: CampaignCard) -> Element {
    let navigator = use_navigator();
    let id = card.id;

    rsx! {
        Card {
            class: "campaign-tile".to_string(),
            onclick: move |_| {
                navigator.push(Route::CampaignDetails { id: id.to_string() });
            },
            div { class: "tile-image",
                if let Some(src) = &card.image_url {
                    img { src: "{src}", alt: "{card.title}" }
                }
                if card.verified {
                    div { class: "tile-badge", VerifiedBadge {} }
                }
            }
            h3 { class: "tile-title", "{card.title}" }
            p { class: "muted small clamp-2", "{card.summary}" }
            ProgressBar { percent: card.progress }
            div { class: "row-between small",
                span { class: "strong", "{format_usd(card.raised)}" }
                span { class: "muted", "of {format_usd(card.goal)}" }
            }
            div { class: "row-between small",
                span { class: "primary strong", "{card.progress}% funded" }
                span { class: "muted", "{card.countdown}" }
            }
            div { class: "btn btn-outline btn-block", "View Campaign" }
        }
    }
}

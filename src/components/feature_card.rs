use dioxus::prelude::*;

use crate::app::Route;

/// Feature tile on the home page, links to its page
#[component]
pub fn FeatureCard(title: String, description: String, icon: String, to: Route) -> Element {
    rsx! {
        Link { class: "card card-clickable feature-card", to,
            div { class: "feature-icon", "{icon}" }
            h3 { class: "feature-title", "{title}" }
            p { class: "muted small", "{description}" }
        }
    }
}

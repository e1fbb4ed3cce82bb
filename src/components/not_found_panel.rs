use dioxus::prelude::*;

use crate::app::Route;

/// Shown in place of a page body when its id does not resolve
#[component]
pub fn NotFoundPanel(what: String, back_to: Route, back_label: String) -> Element {
    rsx! {
        div { class: "card not-found-panel",
            h2 { "{what} not found" }
            p { class: "muted", "It may have been removed, or the link is wrong." }
            Link { class: "btn btn-outline", to: back_to, "{back_label}" }
        }
    }
}

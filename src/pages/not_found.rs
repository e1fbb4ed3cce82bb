use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavHeader;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route");

    rsx! {
        div { class: "page",
            NavHeader {}
            main { class: "container narrow center stack-lg not-found",
                h1 { class: "display", "404" }
                p { class: "lead muted", "Oops! Page not found" }
                p { class: "mono small muted", "{path}" }
                Link { class: "btn btn-gradient", to: Route::Home {}, "Return to Home" }
            }
        }
    }
}

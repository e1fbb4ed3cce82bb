//! Modal dialog
//!
//! Clicking the overlay or the close button calls `on_close`; clicks inside
//! the panel do not reach the overlay.

use dioxus::prelude::*;

use super::CloseButton;

/// Centered modal panel over a dimmed overlay
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Dialog {
///         open: state.read().exit_open,
///         title: "Request Exit",
///         on_close: move |_| state.write().exit_open = false,
///         p { "Your exit request will be put to a community vote." }
///     }
/// }
/// ```
#[component]
pub fn Dialog(
    open: bool,
    title: String,
    #[props(default)] description: Option<String>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                tracing::trace!("dialog dismissed from overlay");
                on_close.call(());
            },

            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
                if let Some(description) = &description {
                    p { class: "modal-description", "{description}" }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

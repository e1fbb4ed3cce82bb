//! Toast stack for action notifications

use chainfund_core::{Notification, NotificationKind};
use dioxus::prelude::*;

/// A notification currently on screen
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ToastEntry {
    /// Unique while the app runs, used as the element key
    pub id: u64,
    pub notification: Notification,
}

/// CSS class for a toast of this kind
pub fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast toast-success",
        NotificationKind::Error => "toast toast-error",
    }
}

/// Bottom-right stack of toasts, newest last
#[component]
pub fn ToastStack(toasts: Vec<ToastEntry>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "toast-stack", "aria-live": "polite",
            for entry in toasts {
                div {
                    key: "{entry.id}",
                    class: toast_class(entry.notification.kind),
                    role: if entry.notification.is_error() { "alert" } else { "status" },
                    div { class: "toast-body",
                        div { class: "toast-title",
                            if entry.notification.is_error() {
                                "\u{26A0} "
                            } else {
                                "\u{2705} "
                            }
                            "{entry.notification.title}"
                        }
                        if !entry.notification.description.is_empty() {
                            div { class: "toast-description", "{entry.notification.description}" }
                        }
                    }
                    button {
                        class: "icon-btn toast-close",
                        "aria-label": "Dismiss",
                        onclick: move |_| on_dismiss.call(entry.id),
                        "\u{00D7}"
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
    fn toast_classes() {
        assert_eq!(toast_class(NotificationKind::Success), "toast toast-success");
        assert_eq!(toast_class(NotificationKind::Error), "toast toast-error");
    }
}

//! Card containers and stat tiles

use dioxus::prelude::*;

use super::class_list;

/// White rounded panel with an optional header
#[component]
pub fn Card(
    #[props(default)] title: Option<String>,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] onclick: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let full_class = class_list(
        if onclick.is_some() { "card card-clickable" } else { "card" },
        class.as_deref(),
    );

    rsx! {
        div {
            class: "{full_class}",
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            if title.is_some() || subtitle.is_some() {
                div { class: "card-header",
                    if let Some(title) = &title {
                        h3 { class: "card-title", "{title}" }
                    }
                    if let Some(subtitle) = &subtitle {
                        p { class: "card-subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}

/// Single figure with a caption, used in summary rows
#[component]
pub fn StatTile(value: String, label: String, #[props(default)] icon: Option<String>) -> Element {
    rsx! {
        div { class: "stat-tile",
            if let Some(icon) = icon {
                span { class: "stat-icon", "{icon}" }
            }
            div { class: "stat-value", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

/// Round avatar showing an image or initials
#[component]
pub fn Avatar(
    initials: String,
    #[props(default)] image_url: Option<String>,
    #[props(default = false)] large: bool,
) -> Element {
    let class = if large { "avatar avatar-lg" } else { "avatar" };

    rsx! {
        div { class,
            if let Some(src) = image_url {
                img { src: "{src}", alt: "{initials}" }
            } else {
                span { class: "avatar-initials", "{initials}" }
            }
        }
    }
}

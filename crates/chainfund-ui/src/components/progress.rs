//! Horizontal progress bar

use dioxus::prelude::*;

/// CSS width for a percentage, clamped to `0..=100`
pub fn bar_width(percent: u8) -> String {
    format!("{}%", percent.min(100))
}

/// Filled track showing `percent` of 100
///
/// ```rust,ignore
/// rsx! { ProgressBar { percent: campaign.progress_percent() } }
/// ```
#[component]
pub fn ProgressBar(
    percent: u8,
    /// Optional caption under the bar, e.g. "50% funded"
    #[props(default)]
    caption: Option<String>,
) -> Element {
    let width = bar_width(percent);

    rsx! {
        div { class: "progress",
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuenow": "{percent}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                div { class: "progress-fill", style: "width: {width}" }
            }
            if let Some(caption) = caption {
                span { class: "progress-caption", "{caption}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_clamped() {
        assert_eq!(bar_width(0), "0%");
        assert_eq!(bar_width(67), "67%");
        assert_eq!(bar_width(250), "100%");
    }
}

//! Small status pills

use chainfund_core::{CampaignStatus, CommunityStatus, MilestoneStatus, ProjectStatus, Role};
use dioxus::prelude::*;

/// Colour family of a badge
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Outline,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge badge-neutral",
            BadgeTone::Primary => "badge badge-primary",
            BadgeTone::Success => "badge badge-success",
            BadgeTone::Warning => "badge badge-warning",
            BadgeTone::Outline => "badge badge-outline",
        }
    }
}

/// Status enums that render as a badge
pub trait BadgeLabel {
    fn badge_label(&self) -> &'static str;
    fn badge_tone(&self) -> BadgeTone;
}

impl BadgeLabel for CampaignStatus {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_tone(&self) -> BadgeTone {
        match self {
            CampaignStatus::Active => BadgeTone::Primary,
            CampaignStatus::Completed => BadgeTone::Neutral,
        }
    }
}

impl BadgeLabel for CommunityStatus {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_tone(&self) -> BadgeTone {
        match self {
            CommunityStatus::Active => BadgeTone::Success,
            CommunityStatus::UnderVoting => BadgeTone::Warning,
        }
    }
}

impl BadgeLabel for MilestoneStatus {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_tone(&self) -> BadgeTone {
        match self {
            MilestoneStatus::Completed => BadgeTone::Success,
            MilestoneStatus::Locked => BadgeTone::Warning,
            MilestoneStatus::Pending => BadgeTone::Neutral,
        }
    }
}

impl BadgeLabel for ProjectStatus {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_tone(&self) -> BadgeTone {
        match self {
            ProjectStatus::Completed => BadgeTone::Success,
            ProjectStatus::InProgress => BadgeTone::Primary,
            ProjectStatus::Pending => BadgeTone::Neutral,
        }
    }
}

impl BadgeLabel for Role {
    fn badge_label(&self) -> &'static str {
        self.label()
    }

    fn badge_tone(&self) -> BadgeTone {
        BadgeTone::Outline
    }
}

#[component]
pub fn Badge(#[props(default)] tone: BadgeTone, children: Element) -> Element {
    rsx! {
        span { class: tone.class(), {children} }
    }
}

/// Badge for any status enum
#[component]
pub fn StatusBadge(label: &'static str, tone: BadgeTone) -> Element {
    rsx! {
        Badge { tone, "{label}" }
    }
}

/// "Verified" pill with a check mark
#[component]
pub fn VerifiedBadge() -> Element {
    rsx! {
        Badge { tone: BadgeTone::Success, "\u{2713} Verified" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tones() {
        assert_eq!(CommunityStatus::UnderVoting.badge_tone(), BadgeTone::Warning);
        assert_eq!(MilestoneStatus::Completed.badge_tone(), BadgeTone::Success);
        assert_eq!(ProjectStatus::InProgress.badge_label(), "In Progress");
        assert_eq!(Role::Admin.badge_tone(), BadgeTone::Outline);
    }

    #[test]
    fn tone_classes() {
        assert_eq!(BadgeTone::default().class(), "badge badge-neutral");
        assert_eq!(BadgeTone::Success.class(), "badge badge-success");
    }
}

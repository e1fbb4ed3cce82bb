use chainfund_core::metrics::{format_usd, initials};
use chainfund_core::view::{ProfileField, ProfileState};
use chainfund_core::UserProfile;
use chainfund_ui::{
    Avatar, BadgeLabel, BadgeTone, Button, ButtonVariant, Card, Input, StatusBadge, TextArea,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{HeaderKind, NavHeader, NotFoundPanel};
use crate::context::{settle, use_store, use_toaster};

const SINGLE_LINE: [(ProfileField, &str, &str); 4] = [
    (ProfileField::Name, "Name", "text"),
    (ProfileField::Email, "Email", "email"),
    (ProfileField::Phone, "Phone", "tel"),
    (ProfileField::Address, "Address", "text"),
];

fn field_value(profile: &UserProfile, field: ProfileField) -> String {
    match field {
        ProfileField::Name => profile.name.clone(),
        ProfileField::Email => profile.email.clone(),
        ProfileField::Phone => profile.phone.clone(),
        ProfileField::Address => profile.address.clone(),
        ProfileField::Bio => profile.bio.clone(),
    }
}

#[component]
pub fn Profile() -> Element {
    let store = use_store();
    let toaster = use_toaster();
    let navigator = use_navigator();
    let mut state = use_signal(|| ProfileState::load(&store.peek()));

    let Some(current) = state.read().clone() else {
        return rsx! {
            div { class: "page",
                NavHeader { kind: HeaderKind::App }
                main { class: "container narrow",
                    NotFoundPanel {
                        what: "Profile".to_string(),
                        back_to: Route::Dashboard {},
                        back_label: "Back to Dashboard".to_string(),
                    }
                }
            }
        };
    };

    let editing = current.editing;
    let total = current.total_contributions();
    let saved = &current.saved;

    rsx! {
        div { class: "page",
            NavHeader { kind: HeaderKind::App }
            main { class: "container narrow stack-xl",
                Link { class: "btn btn-ghost back-link", to: Route::Dashboard {}, "\u{2190} Back to Dashboard" }

                div { class: "card card-gradient profile-head",
                    Avatar { initials: initials(&saved.name), large: true }
                    div { class: "grow",
                        h1 { class: "page-title", "{saved.name}" }
                        p { class: "muted", "{saved.email}" }
                        p { class: "mono small", "\u{1F45B} {saved.short_wallet()}" }
                    }
                    div { class: "right",
                        p { class: "muted small", "Total Contributions" }
                        p { class: "strong large primary", "{format_usd(total)}" }
                    }
                }

                div { class: "grid two",
                    Card {
                        div { class: "row-between",
                            h2 { class: "card-title", "Profile Information" }
                            div { class: "row",
                                if editing {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| {
                                            if let Some(s) = state.write().as_mut() {
                                                s.cancel_editing();
                                            }
                                        },
                                        "Cancel"
                                    }
                                    Button {
                                        onclick: move |_| {
                                            let mut guard = state.write();
                                            if let Some(s) = guard.as_mut() {
                                                let result = s.save(&store.peek(), &toaster);
                                                settle(navigator, toaster, result);
                                            }
                                        },
                                        "Save Changes"
                                    }
                                } else {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| {
                                            if let Some(s) = state.write().as_mut() {
                                                s.start_editing();
                                            }
                                        },
                                        "Edit Profile"
                                    }
                                }
                            }
                        }
                        div { class: "form-grid",
                            for (field, label, input_type) in SINGLE_LINE {
                                Input {
                                    key: "{label}",
                                    value: field_value(&current.form, field),
                                    oninput: move |v| {
                                        if let Some(s) = state.write().as_mut() {
                                            s.set_field(field, v);
                                        }
                                    },
                                    label: label.to_string(),
                                    input_type: input_type.to_string(),
                                    disabled: !editing,
                                }
                            }
                        }
                        TextArea {
                            value: current.form.bio.clone(),
                            oninput: move |v| {
                                if let Some(s) = state.write().as_mut() {
                                    s.set_field(ProfileField::Bio, v);
                                }
                            },
                            label: "Bio".to_string(),
                            rows: 3,
                            disabled: !editing,
                        }
                        div { class: "form-field",
                            span { class: "input-label", "Wallet Address" }
                            div { class: "wallet-row",
                                span { class: "mono small", "{saved.wallet_address}" }
                                StatusBadge { label: "Connected", tone: BadgeTone::Success }
                            }
                        }
                    }

                    Card {
                        title: "\u{1F465} Communities Joined".to_string(),
                        subtitle: "Your participation across ChainFund communities".to_string(),
                        div { class: "stack",
                            if current.communities.is_empty() {
                                p { class: "muted", "You haven't joined any communities yet." }
                            }
                            for (index, community) in current.communities.iter().enumerate() {
                                div { key: "{index}", class: "row-between list-row",
                                    div {
                                        h3 { class: "strong", "{community.name}" }
                                        StatusBadge {
                                            label: community.role.badge_label(),
                                            tone: community.role.badge_tone(),
                                        }
                                    }
                                    div { class: "right",
                                        p { class: "muted small", "Contributed" }
                                        p { class: "strong", "{format_usd(community.contribution)}" }
                                    }
                                }
                            }
                            div { class: "row-between total-row",
                                span { class: "strong", "Total Contributions" }
                                span { class: "strong large primary", "{format_usd(total)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

use chainfund_core::view::LoginForm;
use chainfund_ui::{Button, ButtonSize, ButtonVariant, Input};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavHeader;
use crate::context::{follow, use_toaster};

#[component]
pub fn Login() -> Element {
    let mut form = use_signal(LoginForm::default);
    let toaster = use_toaster();
    let navigator = use_navigator();

    let on_submit = move |_| {
        let outcome = form.write().submit(&toaster);
        follow(navigator, outcome);
    };

    rsx! {
        div { class: "page auth-page",
            NavHeader {}
            main { class: "auth-center",
                div { class: "card auth-card",
                    div { class: "center stack",
                        h1 { class: "page-title gradient-text", "Welcome Back" }
                        p { class: "muted", "Sign in to your ChainFund account" }
                    }

                    div { class: "stack",
                        Input {
                            value: form.read().name.clone(),
                            oninput: move |v| form.write().name = v,
                            label: "Name".to_string(),
                            placeholder: "Enter your name".to_string(),
                            required: true,
                        }
                        Input {
                            value: form.read().email.clone(),
                            oninput: move |v| form.write().email = v,
                            label: "Email".to_string(),
                            input_type: "email".to_string(),
                            placeholder: "Enter your email".to_string(),
                            required: true,
                        }
                        Input {
                            value: form.read().password.clone(),
                            oninput: move |v| form.write().password = v,
                            label: "Password".to_string(),
                            input_type: "password".to_string(),
                            placeholder: "Enter your password".to_string(),
                            required: true,
                        }
                    }

                    div { class: "stack",
                        Button {
                            variant: ButtonVariant::Gradient,
                            size: ButtonSize::Large,
                            full_width: true,
                            onclick: on_submit,
                            "Login"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            full_width: true,
                            onclick: move |_| {
                                form.read().forgot_password(&toaster);
                            },
                            "Forgot Password?"
                        }
                    }

                    p { class: "center muted small",
                        "Don't have an account? "
                        Link { class: "link", to: Route::Register {}, "Register here" }
                    }
                }
            }
        }
    }
}

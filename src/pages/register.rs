use chainfund_core::view::{OtpChannel, RegisterForm};
use chainfund_ui::{Button, ButtonSize, ButtonVariant, Input};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::NavHeader;
use crate::context::{follow, use_toaster};

#[component]
pub fn Register() -> Element {
    let mut form = use_signal(RegisterForm::default);
    let toaster = use_toaster();
    let navigator = use_navigator();

    rsx! {
        div { class: "page auth-page",
            NavHeader {}
            main { class: "auth-center",
                div { class: "card auth-card wide",
                    div { class: "center stack",
                        h1 { class: "page-title gradient-text", "Create Account" }
                        p { class: "muted", "Join ChainFund and start pooling transparently" }
                    }

                    div { class: "form-grid",
                        Input {
                            value: form.read().name.clone(),
                            oninput: move |v| form.write().name = v,
                            label: "Name".to_string(),
                            placeholder: "Enter your full name".to_string(),
                            required: true,
                        }
                        div { class: "with-action",
                            Input {
                                value: form.read().phone.clone(),
                                oninput: move |v| form.write().phone = v,
                                label: "Phone Number".to_string(),
                                input_type: "tel".to_string(),
                                placeholder: "Enter phone number".to_string(),
                                required: true,
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Small,
                                onclick: move |_| {
                                    form.read().send_otp(OtpChannel::Mobile, &toaster);
                                },
                                "Send OTP"
                            }
                        }
                        div { class: "with-action",
                            Input {
                                value: form.read().email.clone(),
                                oninput: move |v| form.write().email = v,
                                label: "Email".to_string(),
                                input_type: "email".to_string(),
                                placeholder: "Enter your email".to_string(),
                                required: true,
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Small,
                                onclick: move |_| {
                                    form.read().send_otp(OtpChannel::Email, &toaster);
                                },
                                "Send OTP"
                            }
                        }
                        Input {
                            value: form.read().address.clone(),
                            oninput: move |v| form.write().address = v,
                            label: "Address".to_string(),
                            placeholder: "Enter your address".to_string(),
                            required: true,
                        }
                        Input {
                            value: form.read().password.clone(),
                            oninput: move |v| form.write().password = v,
                            label: "Password".to_string(),
                            input_type: "password".to_string(),
                            placeholder: "Create a password".to_string(),
                            required: true,
                        }
                        Input {
                            value: form.read().retype_password.clone(),
                            oninput: move |v| form.write().retype_password = v,
                            label: "Retype Password".to_string(),
                            input_type: "password".to_string(),
                            placeholder: "Retype your password".to_string(),
                            required: true,
                        }
                    }

                    Button {
                        variant: ButtonVariant::Gradient,
                        size: ButtonSize::Large,
                        full_width: true,
                        onclick: move |_| {
                            let outcome = form.write().submit(&toaster);
                            follow(navigator, outcome);
                        },
                        "Register"
                    }

                    p { class: "center muted small",
                        "Already have an account? "
                        Link { class: "link", to: Route::Login {}, "Login here" }
                    }
                }
            }
        }
    }
}

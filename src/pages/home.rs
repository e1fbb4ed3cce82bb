//! Home page - hero, about, feature catalogue and how it works.

use dioxus::prelude::*;

use super::feature::Feature;
use crate::app::Route;
use crate::components::{FeatureCard, NavHeader};

const STEPS: [(&str, &str, &str); 4] = [
    ("\u{1F465}", "Pool Funds", "Pool funds with contributors or investors"),
    ("\u{1F6E1}", "Smart Contracts", "Smart contracts lock and release funds milestone-by-milestone"),
    ("\u{2705}", "Community Voting", "Voting or approvals decide fund usage"),
    ("\u{1F4C8}", "Full Transparency", "All transactions are public, verifiable, and tamper-proof"),
];

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page",
            NavHeader {}

            section { class: "hero",
                div { class: "container hero-grid",
                    div { class: "stack-lg",
                        h1 { class: "display gradient-text", "ChainFund" }
                        div { class: "lead muted stack",
                            p { "A blockchain-powered platform for transparent pooled fund management." }
                            p { "Collaborate, fund, and invest securely with 100% traceability." }
                        }
                        button {
                            class: "btn btn-gradient btn-lg",
                            onclick: move |_| {
                                navigator.push(Route::Register {});
                            },
                            "Get Started"
                        }
                    }
                    div { class: "hero-art", "aria-hidden": "true",
                        div { class: "hero-art-card", "$45,000 pooled \u{00B7} 24 members" }
                        div { class: "hero-art-card offset", "Milestone 2 \u{00B7} vote open" }
                    }
                }
            }

            section { class: "band muted-bg",
                div { class: "container narrow center stack",
                    h2 { class: "section-title", "What is ChainFund?" }
                    p { class: "lead muted",
                        "ChainFund is a decentralized platform where people, investors, and organizations can pool money together "
                        "for multiple purposes, such as funding projects, investing collaboratively, or even managing public tenders. "
                        "Every transaction is recorded on blockchain, ensuring transparency, security, and community-driven control."
                    }
                }
            }

            section { class: "band",
                div { class: "container",
                    div { class: "center stack section-head",
                        h2 { class: "section-title", "Explore ChainFund" }
                        p { class: "lead muted", "Discover the many ways to collaborate and invest transparently" }
                    }
                    div { class: "grid three",
                        for feature in Feature::ALL {
                            FeatureCard {
                                key: "{feature.slug()}",
                                title: feature.title().to_string(),
                                description: feature.summary().to_string(),
                                icon: feature.icon().to_string(),
                                to: feature.card_target(),
                            }
                        }
                    }
                }
            }

            section { class: "band muted-bg",
                div { class: "container",
                    h2 { class: "section-title center section-head", "How ChainFund Works" }
                    div { class: "grid four",
                        for (icon, title, text) in STEPS {
                            div { key: "{title}", class: "center stack",
                                div { class: "step-icon", "{icon}" }
                                h3 { class: "strong", "{title}" }
                                p { class: "muted small", "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

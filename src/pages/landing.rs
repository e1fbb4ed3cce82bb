//! Landing page - brand splash with Login / Register.

use dioxus::prelude::*;

use crate::app::Route;

const NODES: usize = 20;
const PARTICLES: usize = 40;

/// Spread decorative elements over the page without a random source.
///
/// Returns `(left %, top %, delay s)` for element `i`.
pub fn scatter(i: usize, salt: u32) -> (u32, u32, u32) {
    let seed = (i as u32).wrapping_add(1).wrapping_mul(2_654_435_761) ^ salt;
    let left = seed % 100;
    let top = (seed / 100) % 100;
    let delay = (seed / 10_000) % 10;
    (left, top, delay)
}

#[component]
pub fn Landing() -> Element {
    rsx! {
        main { class: "landing",
            div { class: "chain-nodes",
                for i in 0..NODES {
                    {
                        let (left, top, delay) = scatter(i, 0x5eed);
                        rsx! {
                            div {
                                key: "node-{i}",
                                class: "chain-node",
                                style: "left: {left}%; top: {top}%; animation-delay: {delay}s",
                            }
                        }
                    }
                }
                for i in 0..PARTICLES {
                    {
                        let (left, top, delay) = scatter(i, 0xd21f7);
                        rsx! {
                            div {
                                key: "particle-{i}",
                                class: "particle",
                                style: "left: {left}%; top: {top}%; animation-delay: {delay}s",
                            }
                        }
                    }
                }
            }

            div { class: "landing-content",
                h1 { class: "landing-title", "ChainFund" }
                p { class: "landing-tagline",
                    "Blockchain-powered community pooling for transparent funding & investments."
                }
                div { class: "landing-actions",
                    Link { class: "btn btn-lg landing-login", to: Route::Login {}, "Login" }
                    Link { class: "btn btn-lg landing-register", to: Route::Register {}, "Register" }
                }
                Link { class: "landing-more", to: Route::Home {}, "Learn more about ChainFund \u{2192}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_stays_on_page() {
        for i in 0..PARTICLES {
            let (left, top, delay) = scatter(i, 0xd21f7);
            assert!(left < 100 && top < 100 && delay < 10);
        }
    }

    #[test]
    fn scatter_is_stable() {
        assert_eq!(scatter(3, 7), scatter(3, 7));
        assert_ne!(scatter(3, 7), scatter(4, 7));
    }
}

//! Wallet selection with a simulated handshake.

use chainfund_core::view::{handshake, WalletConnectState, WalletKind};
use dioxus::prelude::*;

use crate::components::NavHeader;
use crate::context::{follow, use_config, use_toaster};

fn wallet_icon(wallet: WalletKind) -> &'static str {
    match wallet {
        WalletKind::MetaMask => "\u{1F98A}",
        WalletKind::WalletConnect => "\u{1F517}",
        WalletKind::Coinbase => "\u{1F535}",
    }
}

#[component]
pub fn WalletConnect() -> Element {
    let mut state = use_signal(WalletConnectState::new);
    let config = use_config();
    let toaster = use_toaster();
    let navigator = use_navigator();

    let mut connect = move |wallet: WalletKind| {
        if !state.write().begin(wallet) {
            return;
        }
        spawn(async move {
            handshake(wallet, config.wallet_connect_delay()).await;
            let outcome = state.write().complete(&toaster, config.redirect_delay());
            follow(navigator, outcome);
        });
    };

    let connecting = state.read().connecting();
    let connected = state.read().connected();

    rsx! {
        div { class: "page auth-page",
            NavHeader {}
            main { class: "auth-center",
                div { class: "card auth-card",
                    div { class: "center stack",
                        div { class: "wallet-hero", "\u{1F45B}" }
                        h1 { class: "page-title gradient-text", "Connect Your Wallet" }
                        p { class: "muted", "Choose a wallet to link with your ChainFund account" }
                    }

                    div { class: "stack",
                        for wallet in WalletKind::ALL {
                            button {
                                key: "{wallet.label()}",
                                class: if connected == Some(wallet) { "wallet-option connected" } else { "wallet-option" },
                                r#type: "button",
                                disabled: connecting.is_some(),
                                onclick: move |_| connect(wallet),
                                span { class: "wallet-icon", "{wallet_icon(wallet)}" }
                                span { class: "strong", "{wallet.label()}" }
                                span { class: "muted small wallet-status",
                                    if connecting == Some(wallet) {
                                        "Connecting..."
                                    } else if connected == Some(wallet) {
                                        "\u{2713} Connected"
                                    }
                                }
                            }
                        }
                    }

                    p { class: "center muted small",
                        "By connecting a wallet you agree to ChainFund's terms of service."
                    }
                }
            }
        }
    }
}

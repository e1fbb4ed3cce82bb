//! Simulated wallet connection.
//!
//! Connecting runs in two timed steps: a handshake delay, then a success
//! notification followed by a delayed redirect to the dashboard. Only one
//! handshake may be in flight at a time.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::action::{ActionOutcome, Destination, Navigation};
use crate::notify::{Notification, Notifier};

/// Supported wallet providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletKind {
    MetaMask,
    WalletConnect,
    Coinbase,
}

impl WalletKind {
    pub const ALL: [WalletKind; 3] = [
        WalletKind::MetaMask,
        WalletKind::WalletConnect,
        WalletKind::Coinbase,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WalletKind::MetaMask => "MetaMask",
            WalletKind::WalletConnect => "WalletConnect",
            WalletKind::Coinbase => "Coinbase Wallet",
        }
    }
}

/// Wallet page state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnectState {
    connecting: Option<WalletKind>,
    connected: Option<WalletKind>,
}

impl WalletConnectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wallet whose handshake is in flight
    pub fn connecting(&self) -> Option<WalletKind> {
        self.connecting
    }

    pub fn connected(&self) -> Option<WalletKind> {
        self.connected
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting.is_some()
    }

    /// Start a handshake. Returns `false` if one is already running.
    pub fn begin(&mut self, wallet: WalletKind) -> bool {
        if let Some(current) = self.connecting {
            debug!(requested = ?wallet, ?current, "handshake already in flight");
            return false;
        }
        info!(?wallet, "wallet handshake started");
        self.connecting = Some(wallet);
        true
    }

    /// Finish the in-flight handshake and schedule the dashboard redirect.
    ///
    /// Does nothing when no handshake was started.
    pub fn complete(
        &mut self,
        notifier: &dyn Notifier,
        redirect_delay: Duration,
    ) -> ActionOutcome {
        let Some(wallet) = self.connecting.take() else {
            debug!("complete called with no handshake in flight");
            return ActionOutcome::Rejected;
        };

        info!(?wallet, "wallet connected");
        self.connected = Some(wallet);
        notifier.notify(Notification::success(
            "Wallet Connected Successfully!",
            format!("{} has been connected to your account.", wallet.label()),
        ));
        ActionOutcome::completed_then(Navigation::after(Destination::Dashboard, redirect_delay))
    }
}

/// Stand-in for the provider round trip: resolves after `delay`.
pub async fn handshake(wallet: WalletKind, delay: Duration) -> WalletKind {
    tokio::time::sleep(delay).await;
    wallet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLog;

    #[test]
    fn test_second_begin_is_refused() {
        let mut state = WalletConnectState::new();
        assert!(state.begin(WalletKind::MetaMask));
        assert!(!state.begin(WalletKind::Coinbase));
        assert_eq!(state.connecting(), Some(WalletKind::MetaMask));
    }

    #[test]
    fn test_complete_notifies_and_redirects() {
        let log = NotificationLog::new();
        let mut state = WalletConnectState::new();
        state.begin(WalletKind::Coinbase);

        let outcome = state.complete(&log, Duration::from_millis(1_500));
        assert_eq!(
            outcome.navigation(),
            Some(Navigation::after(
                Destination::Dashboard,
                Duration::from_millis(1_500)
            ))
        );
        assert!(!state.is_connecting());
        assert_eq!(state.connected(), Some(WalletKind::Coinbase));
        assert_eq!(
            log.last().unwrap().description,
            "Coinbase Wallet has been connected to your account."
        );

        // a new handshake may start once the first finished
        assert!(state.begin(WalletKind::MetaMask));
    }

    #[test]
    fn test_complete_without_begin() {
        let log = NotificationLog::new();
        let mut state = WalletConnectState::new();
        assert_eq!(
            state.complete(&log, Duration::ZERO),
            ActionOutcome::Rejected
        );
        assert!(log.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_handshake_waits_for_delay() {
        let delay = Duration::from_secs(2);
        let early = tokio::time::timeout(
            Duration::from_millis(1_999),
            handshake(WalletKind::MetaMask, delay),
        )
        .await;
        assert!(early.is_err());

        let start = tokio::time::Instant::now();
        let wallet = handshake(WalletKind::WalletConnect, delay).await;
        assert_eq!(wallet, WalletKind::WalletConnect);
        assert!(start.elapsed() >= delay);
    }
}

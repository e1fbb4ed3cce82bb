//! Runtime settings for the simulated flows.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default delay of the simulated wallet handshake
pub const WALLET_CONNECT_DELAY_MS: u64 = 2_000;
/// Default pause between "wallet connected" and the dashboard redirect
pub const REDIRECT_DELAY_MS: u64 = 1_500;
/// Default time a toast stays on screen
pub const TOAST_LIFETIME_MS: u64 = 4_000;

/// Timing and clock settings shared by every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub wallet_connect_delay_ms: u64,
    pub redirect_delay_ms: u64,
    pub toast_lifetime_ms: u64,
    /// Pinned "today" for day counts; `None` uses the local clock
    pub today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wallet_connect_delay_ms: WALLET_CONNECT_DELAY_MS,
            redirect_delay_ms: REDIRECT_DELAY_MS,
            toast_lifetime_ms: TOAST_LIFETIME_MS,
            today: None,
        }
    }
}

impl AppConfig {
    pub fn wallet_connect_delay(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }

    /// The date day counts are measured from
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

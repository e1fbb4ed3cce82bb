//! Outcome of a simulated user action.
//!
//! Every action follows the same shape: check required input, emit one
//! notification, optionally reset the form, optionally ask the caller to
//! navigate after a delay. The caller owns the router, so navigation is
//! returned as data rather than performed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::notify::{Notification, Notifier};
use crate::types::{CampaignId, CommunityId};

/// Where an action wants to send the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    Dashboard,
    WalletConnect,
    Community(CommunityId),
    Campaign(CampaignId),
}

/// A deferred route change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub to: Destination,
    /// Zero means navigate right away
    pub after: Duration,
}

impl Navigation {
    pub fn now(to: Destination) -> Self {
        Self {
            to,
            after: Duration::ZERO,
        }
    }

    pub fn after(to: Destination, delay: Duration) -> Self {
        Self { to, after: delay }
    }
}

/// What happened when an action ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action went through and a success notification was emitted
    Completed { navigate: Option<Navigation> },
    /// Input was rejected; an error notification was emitted, nothing changed
    Rejected,
}

impl ActionOutcome {
    pub fn completed() -> Self {
        ActionOutcome::Completed { navigate: None }
    }

    pub fn completed_then(navigation: Navigation) -> Self {
        ActionOutcome::Completed {
            navigate: Some(navigation),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed { .. })
    }

    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            ActionOutcome::Completed { navigate } => *navigate,
            ActionOutcome::Rejected => None,
        }
    }
}

/// Emit an error notification for rejected input and report the rejection.
pub(crate) fn reject(
    notifier: &dyn Notifier,
    title: &str,
    error: &ValidationError,
) -> ActionOutcome {
    tracing::debug!(%error, "action rejected");
    notifier.notify(Notification::error(title, error.to_string()));
    ActionOutcome::Rejected
}

/// Fail with `MissingField` on the first blank `(label, value)` pair.
pub(crate) fn require_filled(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((label, _)) => Err(ValidationError::MissingField(label)),
        None => Ok(()),
    }
}

/// Parse a positive whole-dollar amount. Cents are accepted and dropped.
pub(crate) fn parse_amount(label: &'static str, raw: &str) -> Result<u64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(label));
    }
    let whole = trimmed.split('.').next().unwrap_or_default();
    match whole.replace(',', "").parse::<u64>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(ValidationError::InvalidAmount(label)),
    }
}

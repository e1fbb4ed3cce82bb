//! Shared state provided to every page.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_app_context();
//!
//! // In pages
//! let store = use_store();
//! let toaster = use_toaster();
//! ```

use std::time::Duration;

use chainfund_core::{ActionOutcome, AppConfig, FundResult, Notification, Notifier, Store};
use chainfund_ui::ToastEntry;
use dioxus::prelude::*;

use crate::app::Route;

/// Toast surface backing the [`Notifier`] handed to page actions.
///
/// Each notification gets an id and is removed again once the configured
/// lifetime has passed or the user dismisses it.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    toasts: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
    lifetime: Duration,
}

impl Toaster {
    fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
            lifetime,
        }
    }

    /// Toasts currently on screen, oldest first
    pub fn entries(&self) -> Vec<ToastEntry> {
        self.toasts.read().clone()
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|entry| entry.id != id);
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id.wrapping_add(1));

        tracing::debug!(id, title = %notification.title, error = notification.is_error(), "toast");
        let mut toasts = self.toasts;
        toasts.write().push(ToastEntry { id, notification });

        // root scope, so the toast still expires after the page unmounts
        let toaster = *self;
        spawn_forever(async move {
            tokio::time::sleep(toaster.lifetime).await;
            toaster.dismiss(id);
        });
    }
}

/// Install the store, configuration and toaster. Call once from `App`.
pub fn provide_app_context() -> Toaster {
    let config = use_context_provider(crate::app_config);
    use_context_provider(|| Signal::new(Store::seeded()));
    use_context_provider(|| Toaster::new(config.toast_lifetime()))
}

/// Hook to access the shared repositories.
///
/// The signal itself never changes; read it with `peek()` in handlers.
pub fn use_store() -> Signal<Store> {
    use_context::<Signal<Store>>()
}

/// Hook to access timing and clock settings.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Hook to access the toast notifier.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// Carry out the navigation an action asked for, if any.
///
/// Delayed navigation runs in the calling page's scope and is dropped if the
/// user leaves the page first.
pub fn follow(navigator: Navigator, outcome: ActionOutcome) {
    let Some(navigation) = outcome.navigation() else {
        return;
    };
    let route = Route::from(navigation.to);
    if navigation.after.is_zero() {
        navigator.push(route);
        return;
    }
    spawn(async move {
        tokio::time::sleep(navigation.after).await;
        navigator.push(route);
    });
}

/// Follow a repository-backed action, surfacing failures as an error toast.
pub fn settle(navigator: Navigator, toaster: Toaster, result: FundResult<ActionOutcome>) {
    match result {
        Ok(outcome) => follow(navigator, outcome),
        Err(e) => {
            tracing::warn!(error = %e, "action failed");
            toaster.notify(Notification::error("Something went wrong", e.to_string()));
        }
    }
}

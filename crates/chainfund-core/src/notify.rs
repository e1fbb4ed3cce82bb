//! Notification dispatch.
//!
//! Actions never talk to the toast surface directly; they are handed a
//! [`Notifier`] and call it once per outcome. The desktop app backs it with a
//! toast stack, tests back it with a [`NotificationLog`].

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Visual treatment of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

/// A transient message confirming or rejecting an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Receives notifications emitted by actions.
///
/// Fire-and-forget: implementations must not block and the caller never
/// learns whether the message was shown.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Notifier that records everything it receives.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, oldest first
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.lock().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Number of success notifications received
    pub fn successes(&self) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|n| n.kind == NotificationKind::Success)
            .count()
    }

    /// Number of error notifications received
    pub fn errors(&self) -> usize {
        self.entries.lock().iter().filter(|n| n.is_error()).count()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        tracing::trace!(title = %notification.title, "notification recorded");
        self.entries.lock().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_log_records_in_order() {
        let log = NotificationLog::new();
        log.notify(Notification::success("One", "first"));
        log.notify(Notification::error("Two", "second"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.successes(), 1);
        assert_eq!(log.errors(), 1);
        assert_eq!(log.last().unwrap().title, "Two");
        assert_eq!(log.entries()[0].description, "first");
    }

    #[test]
    fn test_log_clones_share_entries() {
        let log = NotificationLog::new();
        let handle = log.clone();
        handle.notify(Notification::success("Shared", ""));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_closure_notifier() {
        let seen = RefCell::new(Vec::new());
        let notifier = |n: Notification| seen.borrow_mut().push(n.title);
        notifier.notify(Notification::success("Hello", ""));
        assert_eq!(seen.into_inner(), vec!["Hello".to_string()]);
    }
}

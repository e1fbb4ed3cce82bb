//! ChainFund Core Library
//!
//! Campaign, community and voting state for the ChainFund desktop app.
//!
//! ## Overview
//!
//! ChainFund lets people pool money into communities and back campaigns whose
//! funds are released milestone by milestone. This crate holds everything that
//! is not rendering: the records, the derived display numbers, the repositories
//! that own the data, and one view-state object per page.
//!
//! ## Core Principles
//!
//! - **Renderer-free**: nothing here depends on Dioxus, so every page rule is
//!   testable with plain `cargo test`
//! - **Injected side effects**: notifications go through a [`Notifier`] the
//!   caller supplies, data goes through a [`Repository`]
//! - **Simulated actions**: wallet, voting and funding never leave the process
//!
//! ## Quick Start
//!
//! ```ignore
//! use chainfund_core::{view::DashboardState, CommunityId, NotificationLog, Store};
//!
//! let store = Store::seeded();
//! let log = NotificationLog::new();
//!
//! let mut dashboard = DashboardState::load(&store);
//! dashboard.join_community(CommunityId(4), &store, &log)?;
//!
//! assert_eq!(dashboard.joined.len(), 4);
//! assert_eq!(log.last().unwrap().title, "Joined Successfully!");
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod metrics;
pub mod notify;
pub mod repository;
pub mod seed;
pub mod types;
pub mod view;

// Re-exports
pub use action::{ActionOutcome, Destination, Navigation};
pub use config::AppConfig;
pub use error::{FundError, FundResult, ValidationError};
pub use notify::{Notification, NotificationKind, NotificationLog, Notifier};
pub use repository::{InMemoryRepository, Record, RemoteRepository, Repository, Store};
pub use types::*;

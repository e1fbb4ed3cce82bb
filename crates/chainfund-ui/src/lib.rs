//! ChainFund UI Components
//!
//! Stateless Dioxus primitives shared by every ChainFund page. Each one is
//! driven entirely by its props; pages own the state.
//!
//! ## Look and feel
//!
//! - **Primary blue (#2563eb)**: calls to action, links, progress
//! - **Success green (#16a34a)**: verified badges, completed milestones
//! - **Destructive red (#dc2626)**: error toasts, force exit
//! - **Muted slate (#64748b)**: secondary text
//!
//! Class names line up with the stylesheet the desktop binary injects.

pub mod components;

pub use components::*;

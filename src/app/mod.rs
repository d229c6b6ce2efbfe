//! Application layer coordinating table state, events, and actions.
//!
//! This module sits between the caller's rendering code and the pure engines.
//! It owns the state categories, decides who owns each of them, memoizes the
//! row pipeline and turns interactions into proposed changes.
//!
//! # Architecture
//!
//! ```text
//! Interaction → Event → handle_event → bound handler → StateSlot::propose
//!                                                          │
//!                           on_change callback ← ──────────┤
//!                           Vec<Action> returned ← ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Change notifications returned by handlers
//! - `cache`: Memoized filter and sort stage
//! - [`callback`]: Shared change listeners
//! - [`handler`]: Event type and dispatch
//! - [`ownership`]: Controlled and uncontrolled state slots
//! - [`state`]: The [`DataTable`] orchestrator

pub mod actions;
mod cache;
pub mod callback;
pub mod handler;
pub mod ownership;
pub mod state;

pub use actions::Action;
pub use callback::{callback, Callback};
pub use handler::{handle_event, Event};
pub use ownership::{Ownership, StateSlot};
pub use state::{DataTable, TableOptions};

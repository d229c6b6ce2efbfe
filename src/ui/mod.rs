//! Render-facing output of the table.
//!
//! The crate draws nothing itself. Each pass produces a [`TableView`] that the
//! host renders with whatever toolkit it uses:
//!
//! ```text
//! DataTable::view → TableView → host renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types for one render pass

pub mod viewmodel;

pub use viewmodel::{ColumnHeader, SelectionSummary, TableView};

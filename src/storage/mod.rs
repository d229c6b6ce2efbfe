//! Storage layer for persisted column layouts.
//!
//! # Modules
//!
//! - `backend`: [`LayoutStore`] trait for layout persistence
//! - `json`: JSON file implementation with atomic writes
//! - `models`: Storage record types separate from engine state

pub mod backend;
pub mod json;
pub mod models;

pub use backend::LayoutStore;
pub use json::JsonLayoutStore;
pub use models::LayoutRecord;

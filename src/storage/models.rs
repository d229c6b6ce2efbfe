//! Storage record models for the layout store.
//!
//! Records wrap the in-memory [`LayoutState`] with storage-only fields so the
//! file format can evolve without touching the engine types.

use crate::engine::layout::LayoutState;
use serde::{Deserialize, Serialize};

/// A saved layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRecord {
    pub layout: LayoutState,

    /// Unix timestamp of the last save.
    pub saved_at: i64,
}

impl LayoutRecord {
    /// Wraps `layout`, stamped with the current time.
    pub fn new(layout: LayoutState) -> Self {
        Self {
            layout,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }
}

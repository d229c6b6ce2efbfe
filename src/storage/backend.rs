//! Layout persistence port.
//!
//! Callers that keep column layouts between sessions implement [`LayoutStore`]
//! or use the bundled [`JsonLayoutStore`](super::JsonLayoutStore). The table
//! itself never touches storage: load a layout before building a table and
//! save the value carried by [`Action::LayoutChanged`](crate::Action).

use crate::domain::error::Result;
use crate::engine::layout::LayoutState;

/// Abstraction over places column layouts are kept, keyed by a table name.
///
/// # Examples
///
/// ```no_run
/// use gridline::storage::{JsonLayoutStore, LayoutStore};
/// use std::path::PathBuf;
///
/// let store = JsonLayoutStore::new(PathBuf::from("/tmp/layouts.json"))?;
/// let saved = store.load("orders")?;
/// # Ok::<(), gridline::GridError>(())
/// ```
pub trait LayoutStore: Send {
    /// Returns the layout saved under `table`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&self, table: &str) -> Result<Option<LayoutState>>;

    /// Saves `layout` under `table`, replacing any previous layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn save(&mut self, table: &str, layout: &LayoutState) -> Result<()>;

    /// Removes the layout saved under `table`. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, table: &str) -> Result<bool>;

    /// Names of every table with a saved layout.
    fn tables(&self) -> Vec<String>;
}

//! Change notifications produced by table interactions.
//!
//! Every bound handler returns the [`Action`]s it emitted, one per state
//! category whose value it proposed to change. The same value is delivered to
//! the category's change callback, so callers may consume either.
//!
//! # Example
//!
//! ```rust
//! use gridline::{Action, PageState};
//!
//! let actions = vec![Action::PageChanged(PageState::new(2, 10))];
//! assert!(matches!(actions[0], Action::PageChanged(p) if p.page == 2));
//! ```

use crate::domain::{FilterState, SortDescriptor};
use crate::engine::layout::LayoutState;
use crate::engine::pagination::PageState;
use crate::engine::selection::Selection;

/// A proposed state change.
///
/// For an uncontrolled category the value has already been applied. For a
/// controlled category it is a request: nothing changes until the caller
/// syncs the value back.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// New sort descriptor, `None` when sorting was cleared.
    SortChanged(Option<SortDescriptor>),

    /// New filter state.
    FilterChanged(FilterState),

    /// New page or page size.
    PageChanged(PageState),

    /// New set of selected ids.
    SelectionChanged(Selection),

    /// New column widths or order.
    LayoutChanged(LayoutState),

    /// New column display order, emitted alongside `LayoutChanged` by reorders.
    ColumnsReordered(Vec<String>),
}

//! Pure engines over rows and table state.
//!
//! Each engine is a set of functions or a small value type with no knowledge
//! of ownership, callbacks or rendering. The orchestrator in [`crate::app`]
//! composes them as `filter → sort → paginate`, with selection and column
//! layout consulted alongside.
//!
//! # Modules
//!
//! - [`filter`]: Global search and advanced filters
//! - [`sort`]: Stable sorting by a descriptor
//! - [`pagination`]: Page slicing and paginator items
//! - [`selection`]: Row selection keyed by id
//! - [`layout`]: Column widths and order

pub mod filter;
pub mod layout;
pub mod pagination;
pub mod selection;
pub mod sort;

pub use filter::{filter_rows, FilterOptions, SearchMode};
pub use layout::{ColumnLayout, LayoutRules, LayoutState, ResizeSession};
pub use pagination::{paginate, PageItem, PageNav, PageSlice, PageState};
pub use selection::{SelectAllScope, Selection, TriState};
pub use sort::{compare_values, sort_rows};

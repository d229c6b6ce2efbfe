//! Domain layer for the gridline engine.
//!
//! This module contains the value types the engines operate on, independent of
//! any rendering layer or state ownership concerns.
//!
//! # Organization
//!
//! - [`column`]: Column definitions, accessors and comparator overrides
//! - [`error`]: Error types and result aliases
//! - [`filter`]: Global search and typed advanced filters
//! - [`row_id`]: Row identity and identity strategies
//! - [`sort`]: Sort direction and descriptor
//! - [`value`]: Cell values and date normalization

pub mod column;
pub mod error;
pub mod filter;
pub mod row_id;
pub mod sort;
pub mod value;

pub use column::{find_column, Accessor, ColumnDef, SortFn};
pub use error::{GridError, Result};
pub use filter::{AdvancedFilter, FilterKind, FilterOption, FilterState};
pub use row_id::{RowId, RowIdentity};
pub use sort::{SortDescriptor, SortDirection};
pub use value::CellValue;

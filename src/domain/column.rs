//! Column definitions.
//!
//! A [`ColumnDef`] tells the engine how to read one cell out of a row and how
//! the column behaves under sorting and resizing. Column ids are unique within
//! a table; accessors must be pure functions of the row.

use super::sort::SortDirection;
use super::value::CellValue;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Reads a cell value out of a row.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Comparator override: `(a, b, direction) -> Ordering`.
///
/// The result is always interpreted as ascending order and reversed by the
/// engine for descending sorts. `direction` is passed for comparators that
/// need it, e.g. to keep blanks last in both directions.
pub type SortFn<T> = Arc<dyn Fn(&T, &T, SortDirection) -> Ordering + Send + Sync>;

/// Definition of a single table column.
///
/// # Example
///
/// ```
/// use gridline::ColumnDef;
///
/// struct User { name: String, age: u32 }
///
/// let name = ColumnDef::new("name", |u: &User| u.name.as_str().into())
///     .header("Name")
///     .initial_width(180);
/// let age = ColumnDef::new("age", |u: &User| u.age.into()).resizable(false);
///
/// assert_eq!(name.id, "name");
/// assert!(!age.resizable);
/// ```
pub struct ColumnDef<T> {
    /// Unique column id.
    pub id: String,
    /// Header label. Defaults to the id.
    pub header: String,
    /// Whether header clicks may sort by this column.
    pub sortable: bool,
    /// Whether the column may be resized.
    pub resizable: bool,
    /// Width in pixels before any resize.
    pub initial_width: Option<u32>,
    /// Per-column width floor, raised to the table floor if lower.
    pub min_width: Option<u32>,
    accessor: Accessor<T>,
    custom_sort: Option<SortFn<T>>,
}

impl<T> ColumnDef<T> {
    /// Creates a sortable, resizable column with the given accessor.
    pub fn new<F>(id: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        let id = id.into();
        Self {
            header: id.clone(),
            id,
            sortable: true,
            resizable: true,
            initial_width: None,
            min_width: None,
            accessor: Arc::new(accessor),
            custom_sort: None,
        }
    }

    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    #[must_use]
    pub const fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    #[must_use]
    pub const fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    #[must_use]
    pub const fn initial_width(mut self, width: u32) -> Self {
        self.initial_width = Some(width);
        self
    }

    #[must_use]
    pub const fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Installs a comparator used instead of the default value comparison.
    #[must_use]
    pub fn custom_sort<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T, SortDirection) -> Ordering + Send + Sync + 'static,
    {
        self.custom_sort = Some(Arc::new(compare));
        self
    }

    /// Reads this column's value out of `row`.
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// The column's comparator override, if any.
    pub fn custom_sort_fn(&self) -> Option<&SortFn<T>> {
        self.custom_sort.as_ref()
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            resizable: self.resizable,
            initial_width: self.initial_width,
            min_width: self.min_width,
            accessor: Arc::clone(&self.accessor),
            custom_sort: self.custom_sort.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("resizable", &self.resizable)
            .field("initial_width", &self.initial_width)
            .field("min_width", &self.min_width)
            .field("custom_sort", &self.custom_sort.is_some())
            .finish_non_exhaustive()
    }
}

/// Finds a column by id.
pub fn find_column<'a, T>(columns: &'a [ColumnDef<T>], id: &str) -> Option<&'a ColumnDef<T>> {
    columns.iter().find(|column| column.id == id)
}

/// Asserts column ids are unique.
///
/// Only compiled into development builds; release builds take duplicate ids
/// as given and produce whatever output follows from them.
pub(crate) fn debug_assert_unique_ids<T>(columns: &[ColumnDef<T>]) {
    if cfg!(debug_assertions) {
        let mut seen = std::collections::HashSet::new();
        for column in columns {
            debug_assert!(
                seen.insert(column.id.as_str()),
                "duplicate column id: {}",
                column.id
            );
        }
    }
}

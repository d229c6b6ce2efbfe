//! View model types representing one render pass of a table.
//!
//! A [`TableView`] is computed by [`DataTable::view`](crate::DataTable::view)
//! and borrows the table's rows. It contains no logic beyond lookups, only
//! render-ready data: the rows of the current page, their ids, ordered column
//! headers with resolved widths, page navigation and a selection summary.
//!
//! # Example
//!
//! ```rust
//! use gridline::{ColumnDef, DataTable, RowIdentity, TableOptions};
//!
//! let columns = vec![ColumnDef::new("word", |w: &String| w.as_str().into())];
//! let words: Vec<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
//! let mut table = DataTable::new(
//!     columns,
//!     words,
//!     RowIdentity::from_fn(|w: &String, _| w.as_str().into()),
//!     TableOptions::default(),
//! );
//!
//! let view = table.view();
//! assert_eq!(view.filtered_count, 3);
//! assert_eq!(view.columns[0].header, "word");
//! ```

use crate::domain::{CellValue, ColumnDef, RowId, SortDirection};
use crate::engine::pagination::{PageItem, PageNav};
use crate::engine::selection::{Selection, TriState};

/// Render-ready output of one pass.
#[derive(Debug)]
pub struct TableView<'a, T> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a T>,
    /// Ids of `rows`, index for index.
    pub row_ids: Vec<RowId>,
    /// Headers in display order.
    pub columns: Vec<ColumnHeader>,
    /// Rows surviving the filters, across all pages.
    pub filtered_count: usize,
    /// Rows in the data set.
    pub total_count: usize,
    /// 1-based page being shown, already clamped.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Position of the first row of the page among the filtered rows.
    pub start_index: usize,
    /// Position past the last row of the page among the filtered rows.
    pub end_index: usize,
    /// Compact paginator buttons.
    pub page_items: Vec<PageItem>,
    pub nav: PageNav,
    pub selection: SelectionSummary,
    /// Current global search term.
    pub global_filter: String,
    pub(crate) column_defs: Vec<&'a ColumnDef<T>>,
    pub(crate) selected: &'a Selection,
}

impl<'a, T> TableView<'a, T> {
    /// Whether `id` is selected, on this page or not.
    #[must_use]
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.is_selected(id)
    }

    /// Page rows paired with their ids.
    pub fn rows_with_ids(&self) -> impl Iterator<Item = (&RowId, &'a T)> + '_ {
        self.row_ids.iter().zip(self.rows.iter().copied())
    }

    /// Cell values of `row` in column display order.
    pub fn cells(&self, row: &T) -> Vec<CellValue> {
        self.column_defs.iter().map(|c| c.value(row)).collect()
    }

    /// Whether the page has no rows to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Display information for one column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub id: String,
    pub header: String,
    /// Resolved width in pixels.
    pub width: u32,
    /// Sort indicator, present only on the sorted column.
    pub sort: Option<SortDirection>,
    /// Whether clicking the header sorts. False when sorting is disabled.
    pub sortable: bool,
    pub resizable: bool,
}

/// Selection state as seen from the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    /// Select-all checkbox state over the page rows.
    pub page_state: TriState,
    pub selected_on_page: usize,
    /// Selected ids overall, including rows filtered out or on other pages.
    pub total_selected: usize,
}

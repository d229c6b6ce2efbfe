//! Event handling for table interactions.
//!
//! [`handle_event`] is a single entry point that maps discrete user
//! interactions onto the table's bound handlers. Hosts that translate their
//! own input (clicks, key presses, pointer moves) into [`Event`]s can drive a
//! table through it and forward the returned [`Action`]s.
//!
//! # Event Types
//!
//! - **Sorting**: `SortHeaderClicked`, `SortSet`
//! - **Filtering**: `GlobalFilterChanged`, `FilterSet`, `AdvancedFiltersSet`, `FiltersReset`
//! - **Pagination**: `PageRequested`, `NextPage`, `PreviousPage`, `PageSizeChanged`
//! - **Selection**: `RowToggled`, `AllToggled`, `ScopeToggled`, `SelectionCleared`
//! - **Layout**: `ColumnResized`, `ResizeStarted`, `ResizeMoved`, `ResizeEnded`,
//!   `ColumnMoved`, `ColumnDropped`, `LayoutReset`
//!
//! # Example
//!
//! ```rust
//! use gridline::{handle_event, Action, ColumnDef, DataTable, Event, RowIdentity, TableOptions};
//!
//! let columns = vec![ColumnDef::new("n", |n: &u32| (*n).into())];
//! let mut table = DataTable::new(columns, vec![3, 1, 2], RowIdentity::index(), TableOptions::default());
//!
//! let (changed, actions) = handle_event(&mut table, &Event::SortHeaderClicked { column_id: "n".into() });
//! assert!(changed);
//! assert!(matches!(actions[0], Action::SortChanged(Some(_))));
//! ```

use crate::app::{Action, DataTable};
use crate::domain::{AdvancedFilter, RowId, SortDescriptor};

/// A discrete interaction with a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A column header was clicked.
    SortHeaderClicked { column_id: String },
    /// The sort was set programmatically.
    SortSet(Option<SortDescriptor>),

    /// The global search input changed.
    GlobalFilterChanged(String),
    /// One advanced filter was edited.
    FilterSet(AdvancedFilter),
    /// The advanced filter list was replaced.
    AdvancedFiltersSet(Vec<AdvancedFilter>),
    /// Every filter value was cleared.
    FiltersReset,

    /// A page button was pressed.
    PageRequested(usize),
    NextPage,
    PreviousPage,
    /// A different page size was picked.
    PageSizeChanged(usize),

    /// A row checkbox was clicked.
    RowToggled(RowId),
    /// A select-all checkbox over explicit ids was clicked.
    AllToggled(Vec<RowId>),
    /// The select-all checkbox for the configured scope was clicked.
    ScopeToggled,
    SelectionCleared,

    /// A column width was set directly, e.g. from a settings dialog.
    ColumnResized { column_id: String, width: u32 },
    /// A resize handle was grabbed.
    ResizeStarted { column_id: String, pointer_x: f64 },
    /// The pointer moved while a resize handle was held.
    ResizeMoved { pointer_x: f64 },
    /// The resize handle was released.
    ResizeEnded,
    /// A column moved from one display index to another.
    ColumnMoved { from: usize, to: usize },
    /// A header was dragged onto another header.
    ColumnDropped { source_id: String, target_id: String },
    LayoutReset,
}

/// Applies `event` to `table`.
///
/// # Returns
///
/// `(changed, actions)`: whether the table needs to be rendered again, and
/// the state changes that were proposed. For controlled categories an action
/// is a request the caller must sync back before it shows.
pub fn handle_event<T>(table: &mut DataTable<T>, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let actions = match event {
        Event::SortHeaderClicked { column_id } => table.click_sort_header(column_id),
        Event::SortSet(sort) => table.set_sort(sort.clone()),

        Event::GlobalFilterChanged(term) => table.set_global_filter(term.as_str()),
        Event::FilterSet(filter) => table.set_filter(filter.clone()),
        Event::AdvancedFiltersSet(filters) => table.set_advanced_filters(filters.clone()),
        Event::FiltersReset => table.reset_filters(),

        Event::PageRequested(page) => table.set_page(*page),
        Event::NextPage => table.next_page(),
        Event::PreviousPage => table.previous_page(),
        Event::PageSizeChanged(size) => table.set_page_size(*size),

        Event::RowToggled(id) => table.toggle_row(id.clone()),
        Event::AllToggled(ids) => table.toggle_all(ids),
        Event::ScopeToggled => table.toggle_all_in_scope(),
        Event::SelectionCleared => table.clear_selection(),

        Event::ColumnResized { column_id, width } => table.resize_column(column_id, *width),
        Event::ResizeStarted {
            column_id,
            pointer_x,
        } => {
            let started = table.begin_column_resize(column_id, *pointer_x);
            return (started, Vec::new());
        }
        Event::ResizeMoved { pointer_x } => table.drag_column_resize(*pointer_x),
        Event::ResizeEnded => {
            let ended = table.end_column_resize();
            return (ended, Vec::new());
        }
        Event::ColumnMoved { from, to } => table.reorder_columns(*from, *to),
        Event::ColumnDropped {
            source_id,
            target_id,
        } => table.reorder_columns_by_id(source_id, target_id),
        Event::LayoutReset => table.reset_layout(),
    };

    tracing::debug!(actions = actions.len(), "event handled");
    (!actions.is_empty(), actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Ownership, TableOptions};
    use crate::domain::{ColumnDef, FilterState, RowIdentity};
    use crate::engine::pagination::PageState;
    use crate::TableConfig;

    fn numbers(options: TableOptions<u32>) -> DataTable<u32> {
        let columns = vec![ColumnDef::new("n", |n: &u32| (*n).into())];
        DataTable::new(columns, (1..=25).collect(), RowIdentity::from_fn(|n: &u32, _| (*n).into()), options)
    }

    #[test]
    fn unchanged_state_reports_no_change() {
        let mut table = numbers(TableOptions::default());
        let (changed, actions) = handle_event(&mut table, &Event::PreviousPage);
        assert!(!changed);
        assert!(actions.is_empty());
    }

    #[test]
    fn paging_events() {
        let mut table = numbers(TableOptions::default());
        handle_event(&mut table, &Event::NextPage);
        handle_event(&mut table, &Event::NextPage);
        handle_event(&mut table, &Event::NextPage);
        assert_eq!(table.page_state().page, 3);

        let (_, actions) = handle_event(&mut table, &Event::PageSizeChanged(5));
        assert_eq!(actions, vec![Action::PageChanged(PageState::new(5, 5))]);
        let values: Vec<u32> = table.view().rows.iter().map(|n| **n).collect();
        assert_eq!(values, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn controlled_filter_waits_for_sync() {
        let options = TableOptions::new(TableConfig::default())
            .filter(Ownership::controlled(FilterState::default(), |_: &FilterState| {}));
        let mut table = numbers(options);

        let (changed, actions) = handle_event(&mut table, &Event::GlobalFilterChanged("2".into()));
        assert!(changed);
        assert_eq!(actions[0], Action::FilterChanged(FilterState::global("2")));
        assert_eq!(table.view().filtered_count, 25);

        table.sync_filter(FilterState::global("2"));
        // 2, 12, 20..=25
        assert_eq!(table.view().filtered_count, 8);
    }

    #[test]
    fn resize_events_track_session() {
        let mut table = numbers(TableOptions::default());
        let start = Event::ResizeStarted {
            column_id: "n".into(),
            pointer_x: 0.0,
        };
        assert!(handle_event(&mut table, &start).0);
        let (_, actions) = handle_event(&mut table, &Event::ResizeMoved { pointer_x: -500.0 });
        assert_eq!(actions.len(), 1);
        assert_eq!(table.view().columns[0].width, 40);
        assert!(handle_event(&mut table, &Event::ResizeEnded).0);
        assert!(!handle_event(&mut table, &Event::ResizeEnded).0);
    }
}

//! Table orchestration and view computation.
//!
//! [`DataTable`] composes the engines into one pipeline:
//!
//! ```text
//! data ─→ filter ─→ sort ─→ paginate ─→ TableView
//!           └──── memoized ────┘
//!
//! selection, column layout ─→ consulted while building the view
//! ```
//!
//! Each state category (filter, sort, pagination, selection, column layout)
//! sits in a [`StateSlot`] resolved once from its [`Ownership`]. Bound handlers
//! never write state directly: they compute the next value with the engines
//! and propose it to the slot, returning the [`Action`]s that describe what
//! was proposed.
//!
//! # Example
//!
//! ```rust
//! use gridline::{ColumnDef, DataTable, RowIdentity, TableConfig, TableOptions};
//!
//! struct Task { id: u32, title: &'static str, hours: u32 }
//!
//! let columns = vec![
//!     ColumnDef::new("title", |t: &Task| t.title.into()),
//!     ColumnDef::new("hours", |t: &Task| t.hours.into()),
//! ];
//! let tasks = vec![
//!     Task { id: 1, title: "write docs", hours: 3 },
//!     Task { id: 2, title: "fix parser", hours: 1 },
//!     Task { id: 3, title: "review", hours: 2 },
//! ];
//! let config = TableConfig { page_size: 2, ..TableConfig::default() };
//! let mut table = DataTable::new(
//!     columns,
//!     tasks,
//!     RowIdentity::from_fn(|t: &Task, _| t.id.into()),
//!     TableOptions::new(config),
//! );
//!
//! table.click_sort_header("hours");
//! let view = table.view();
//! let titles: Vec<_> = view.rows.iter().map(|t| t.title).collect();
//! assert_eq!(titles, vec!["fix parser", "review"]);
//! assert_eq!(view.total_pages, 2);
//! ```

use super::actions::Action;
use super::cache::{PipelineCache, PipelineInputs, PipelineKey};
use super::callback::Callback;
use super::ownership::{Ownership, StateSlot};
use crate::domain::column::debug_assert_unique_ids;
use crate::domain::{
    find_column, AdvancedFilter, ColumnDef, FilterState, RowId, RowIdentity, SortDescriptor,
    SortDirection, SortFn,
};
use crate::engine::layout::{ColumnLayout, LayoutRules, LayoutState, ResizeSession};
use crate::engine::pagination::{clamp_page, page_items, paginate, total_pages, PageNav, PageState};
use crate::engine::selection::{SelectAllScope, Selection};
use crate::ui::viewmodel::{ColumnHeader, SelectionSummary, TableView};
use crate::TableConfig;
use std::cmp::Ordering;
use std::sync::Arc;

/// Page buttons shown either side of the current page.
const PAGE_SIBLINGS: usize = 1;

/// Construction options for a [`DataTable`].
///
/// Every category defaults to uncontrolled, seeded from [`TableConfig`].
/// Pass an [`Ownership`] to control a category or to seed it differently.
/// The `on_*_change` listeners replace whatever listener the category's
/// ownership carries.
pub struct TableOptions<T> {
    pub config: TableConfig,
    sort: Option<Ownership<Option<SortDescriptor>>>,
    filter: Option<Ownership<FilterState>>,
    page: Option<Ownership<PageState>>,
    selection: Option<Ownership<Selection>>,
    layout: Option<Ownership<LayoutState>>,
    on_sort_change: Option<Callback<Option<SortDescriptor>>>,
    on_filter_change: Option<Callback<FilterState>>,
    on_page_change: Option<Callback<PageState>>,
    on_selection_change: Option<Callback<Selection>>,
    on_layout_change: Option<Callback<LayoutState>>,
    on_columns_reorder: Option<Callback<Vec<String>>>,
    sort_comparator: Option<SortFn<T>>,
    searchable_columns: Option<Vec<String>>,
    select_all_scope: SelectAllScope,
}

impl<T> Default for TableOptions<T> {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl<T> TableOptions<T> {
    #[must_use]
    pub const fn new(config: TableConfig) -> Self {
        Self {
            config,
            sort: None,
            filter: None,
            page: None,
            selection: None,
            layout: None,
            on_sort_change: None,
            on_filter_change: None,
            on_page_change: None,
            on_selection_change: None,
            on_layout_change: None,
            on_columns_reorder: None,
            sort_comparator: None,
            searchable_columns: None,
            select_all_scope: SelectAllScope::CurrentPage,
        }
    }

    #[must_use]
    pub fn sort(mut self, ownership: Ownership<Option<SortDescriptor>>) -> Self {
        self.sort = Some(ownership);
        self
    }

    #[must_use]
    pub fn filter(mut self, ownership: Ownership<FilterState>) -> Self {
        self.filter = Some(ownership);
        self
    }

    #[must_use]
    pub fn pagination(mut self, ownership: Ownership<PageState>) -> Self {
        self.page = Some(ownership);
        self
    }

    #[must_use]
    pub fn selection(mut self, ownership: Ownership<Selection>) -> Self {
        self.selection = Some(ownership);
        self
    }

    #[must_use]
    pub fn layout(mut self, ownership: Ownership<LayoutState>) -> Self {
        self.layout = Some(ownership);
        self
    }

    #[must_use]
    pub fn on_sort_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&Option<SortDescriptor>) + Send + Sync + 'static,
    {
        self.on_sort_change = Some(Callback::new(listener));
        self
    }

    #[must_use]
    pub fn on_filter_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&FilterState) + Send + Sync + 'static,
    {
        self.on_filter_change = Some(Callback::new(listener));
        self
    }

    #[must_use]
    pub fn on_page_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&PageState) + Send + Sync + 'static,
    {
        self.on_page_change = Some(Callback::new(listener));
        self
    }

    #[must_use]
    pub fn on_selection_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&Selection) + Send + Sync + 'static,
    {
        self.on_selection_change = Some(Callback::new(listener));
        self
    }

    #[must_use]
    pub fn on_layout_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&LayoutState) + Send + Sync + 'static,
    {
        self.on_layout_change = Some(Callback::new(listener));
        self
    }

    /// Listener for the new column id order after each reorder.
    #[must_use]
    pub fn on_columns_reorder<F>(mut self, listener: F) -> Self
    where
        F: Fn(&Vec<String>) + Send + Sync + 'static,
    {
        self.on_columns_reorder = Some(Callback::new(listener));
        self
    }

    /// Comparator used for every sort instead of the column's own.
    ///
    /// Read as ascending order, reversed for descending sorts.
    #[must_use]
    pub fn sort_comparator<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T, SortDirection) -> Ordering + Send + Sync + 'static,
    {
        self.sort_comparator = Some(Arc::new(compare));
        self
    }

    /// Restricts global search to the given column ids.
    #[must_use]
    pub fn searchable_columns<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable_columns = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Rows considered by [`DataTable::toggle_all_in_scope`].
    #[must_use]
    pub const fn select_all_scope(mut self, scope: SelectAllScope) -> Self {
        self.select_all_scope = scope;
        self
    }
}

fn resolve<V>(
    ownership: Option<Ownership<V>>,
    initial: impl FnOnce() -> V,
    listener: Option<Callback<V>>,
) -> Ownership<V> {
    let ownership = ownership.unwrap_or_else(|| Ownership::uncontrolled(initial()));
    match listener {
        Some(listener) => ownership.on_change(listener),
        None => ownership,
    }
}

/// An interactive table over rows of type `T`.
pub struct DataTable<T> {
    columns: Vec<ColumnDef<T>>,
    data: Vec<T>,
    revision: u64,
    identity: RowIdentity<T>,
    config: TableConfig,
    layout_rules: LayoutRules,
    sort: StateSlot<Option<SortDescriptor>>,
    filter: StateSlot<FilterState>,
    page: StateSlot<PageState>,
    selection: StateSlot<Selection>,
    layout: StateSlot<LayoutState>,
    on_columns_reorder: Option<Callback<Vec<String>>>,
    sort_comparator: Option<SortFn<T>>,
    searchable: Option<Vec<String>>,
    select_all_scope: SelectAllScope,
    cache: PipelineCache,
    resize: Option<ResizeSession>,
}

impl<T> DataTable<T> {
    /// Creates a table.
    ///
    /// Column ids must be unique; development builds assert it.
    pub fn new(
        columns: Vec<ColumnDef<T>>,
        data: Vec<T>,
        identity: RowIdentity<T>,
        options: TableOptions<T>,
    ) -> Self {
        debug_assert_unique_ids(&columns);
        let config = options.config;
        let layout_rules = LayoutRules::new(&columns, config.min_column_width);

        let sort = resolve(options.sort, || config.initial_sort.clone(), options.on_sort_change);
        let filter = resolve(
            options.filter,
            || FilterState::global(config.initial_global_filter.clone()),
            options.on_filter_change,
        );
        let page = resolve(
            options.page,
            || PageState::new(config.initial_page.max(1), config.page_size),
            options.on_page_change,
        );
        let selection = resolve(options.selection, Selection::new, options.on_selection_change);
        let layout = resolve(
            options.layout,
            || layout_rules.initial_state(),
            options.on_layout_change,
        );

        tracing::debug!(
            columns = columns.len(),
            rows = data.len(),
            sort_controlled = sort.is_controlled(),
            filter_controlled = filter.is_controlled(),
            page_controlled = page.is_controlled(),
            selection_controlled = selection.is_controlled(),
            layout_controlled = layout.is_controlled(),
            "table created"
        );

        Self {
            columns,
            data,
            revision: 0,
            identity,
            layout_rules,
            sort: StateSlot::new("sort", sort),
            filter: StateSlot::new("filter", filter),
            page: StateSlot::new("pagination", page),
            selection: StateSlot::new("selection", selection),
            layout: StateSlot::new("layout", layout),
            on_columns_reorder: options.on_columns_reorder,
            sort_comparator: options.sort_comparator,
            searchable: options.searchable_columns,
            select_all_scope: options.select_all_scope,
            cache: PipelineCache::default(),
            resize: None,
            config,
        }
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    #[must_use]
    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Replaces the data set. Selection is kept; see
    /// [`prune_selection`](Self::prune_selection).
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(revision = self.revision, rows = self.data.len(), "data replaced");
    }

    pub fn sort_state(&self) -> Option<&SortDescriptor> {
        self.sort.get().as_ref()
    }

    pub const fn filter_state(&self) -> &FilterState {
        self.filter.get()
    }

    pub const fn page_state(&self) -> &PageState {
        self.page.get()
    }

    pub const fn selection(&self) -> &Selection {
        self.selection.get()
    }

    pub const fn layout_state(&self) -> &LayoutState {
        self.layout.get()
    }

    #[must_use]
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selection.get().is_selected(id)
    }

    // Controlled values echoed back by the caller.

    pub fn sync_sort(&mut self, sort: Option<SortDescriptor>) {
        self.sort.sync(sort);
    }

    /// Accepts the caller's filter. A filter that differs from the current
    /// one resets the page when `reset_page_on_filter_change` is set.
    pub fn sync_filter(&mut self, filter: FilterState) -> Vec<Action> {
        let changed = self.filter.is_controlled() && *self.filter.get() != filter;
        self.filter.sync(filter);
        if changed {
            self.reset_page_after_filter()
        } else {
            Vec::new()
        }
    }

    pub fn sync_page(&mut self, page: PageState) {
        self.page.sync(page);
    }

    pub fn sync_selection(&mut self, selection: Selection) {
        self.selection.sync(selection);
    }

    pub fn sync_layout(&mut self, layout: LayoutState) {
        self.layout.sync(layout);
    }

    /// Runs one pass and returns what to render.
    ///
    /// A page past the last one is clamped; the clamped page is rendered and
    /// proposed as a page change.
    pub fn view(&mut self) -> TableView<'_, T> {
        let _span = tracing::debug_span!("view", revision = self.revision).entered();

        let filtered_count = self.refresh_pipeline();
        let page_size = self.effective_page_size();
        let total = total_pages(filtered_count, page_size);
        let state = *self.page.get();
        let current = clamp_page(state.page, total);
        if current != state.page {
            tracing::debug!(requested = state.page, clamped = current, total, "page out of range");
            self.page.propose(state.with_page(current));
        }

        self.build_view(current, page_size, total)
    }

    fn build_view(&self, current: usize, page_size: usize, total: usize) -> TableView<'_, T> {
        let slice = paginate(self.cache.indices(), current, page_size);
        let rows: Vec<&T> = slice.rows.iter().map(|&i| &self.data[i]).collect();
        let row_ids: Vec<RowId> = slice
            .rows
            .iter()
            .map(|&i| self.identity.id_of(&self.data[i], i))
            .collect();

        let selected = self.selection.get();
        let selected_on_page = selected.count_in(&row_ids);
        let summary = SelectionSummary {
            page_state: selected.tri_state(&row_ids),
            selected_on_page,
            total_selected: selected.len(),
        };

        let sort = self.effective_sort();
        let layout = ColumnLayout::with_state(&self.layout_rules, self.layout.get().clone());
        let widths = layout.resolved_widths();
        let column_defs: Vec<&ColumnDef<T>> = layout
            .ordered_ids()
            .into_iter()
            .filter_map(|id| find_column(&self.columns, id))
            .collect();
        let columns = column_defs
            .iter()
            .map(|column| ColumnHeader {
                id: column.id.clone(),
                header: column.header.clone(),
                width: widths.get(&column.id).copied().unwrap_or_default(),
                sort: sort
                    .as_ref()
                    .filter(|s| s.column_id == column.id)
                    .and_then(|s| s.direction),
                sortable: self.config.enable_sorting && column.sortable,
                resizable: column.resizable,
            })
            .collect();

        TableView {
            rows,
            row_ids,
            columns,
            filtered_count: self.cache.indices().len(),
            total_count: self.data.len(),
            page: current,
            page_size,
            total_pages: total,
            start_index: slice.start_index,
            end_index: slice.end_index,
            page_items: page_items(current, total, PAGE_SIBLINGS),
            nav: PageNav {
                current,
                total_pages: total,
            },
            selection: summary,
            global_filter: self.filter.get().global.clone(),
            column_defs,
            selected,
        }
    }

    fn effective_filter(&self) -> FilterState {
        let mut filter = self.filter.get().clone();
        if !self.config.enable_global_filter {
            filter.global.clear();
        }
        filter
    }

    fn effective_sort(&self) -> Option<SortDescriptor> {
        if self.config.enable_sorting {
            self.sort.get().clone()
        } else {
            None
        }
    }

    const fn effective_page_size(&self) -> usize {
        if self.config.enable_pagination {
            self.page.get().page_size
        } else {
            0
        }
    }

    /// Brings the memoized stage up to date and returns the filtered count.
    fn refresh_pipeline(&mut self) -> usize {
        let key = PipelineKey {
            revision: self.revision,
            filter: self.effective_filter(),
            sort: self.effective_sort(),
            mode: self.config.search_mode,
        };
        let inputs = PipelineInputs {
            data: &self.data,
            columns: &self.columns,
            searchable: self.searchable.as_deref(),
            comparator: self.sort_comparator.as_ref(),
        };
        self.cache.resolve(key, &inputs).len()
    }

    /// The page that the next pass would render.
    fn current_page(&mut self) -> (usize, usize) {
        let total = total_pages(self.refresh_pipeline(), self.effective_page_size());
        (clamp_page(self.page.get().page, total), total)
    }

    fn ids_of(&self, indices: &[usize]) -> Vec<RowId> {
        indices
            .iter()
            .map(|&i| self.identity.id_of(&self.data[i], i))
            .collect()
    }

    /// Ids of every row passing the filters, in display order.
    pub fn filtered_ids(&mut self) -> Vec<RowId> {
        self.refresh_pipeline();
        self.ids_of(self.cache.indices())
    }

    /// Ids of the rows on the page the next pass renders.
    pub fn page_ids(&mut self) -> Vec<RowId> {
        let (current, _) = self.current_page();
        let slice = paginate(self.cache.indices(), current, self.effective_page_size());
        self.ids_of(&slice.rows)
    }

    // Sorting

    /// Cycles the sort on `column_id`: `asc`, `desc`, unsorted.
    ///
    /// Ignored when sorting is disabled or the column is unknown or not
    /// sortable.
    pub fn click_sort_header(&mut self, column_id: &str) -> Vec<Action> {
        if !self.config.enable_sorting {
            tracing::debug!(column_id, "sorting disabled");
            return Vec::new();
        }
        match find_column(&self.columns, column_id) {
            Some(column) if column.sortable => {}
            Some(_) => {
                tracing::debug!(column_id, "column not sortable");
                return Vec::new();
            }
            None => {
                tracing::debug!(column_id, "sort on unknown column ignored");
                return Vec::new();
            }
        }
        let next = SortDescriptor::cycle(self.sort.get().as_ref(), column_id);
        self.propose_sort(Some(next))
    }

    /// Replaces the sort descriptor.
    pub fn set_sort(&mut self, sort: Option<SortDescriptor>) -> Vec<Action> {
        if !self.config.enable_sorting {
            tracing::debug!("sorting disabled");
            return Vec::new();
        }
        self.propose_sort(sort)
    }

    fn propose_sort(&mut self, next: Option<SortDescriptor>) -> Vec<Action> {
        if self.sort.propose(next.clone()) {
            vec![Action::SortChanged(next)]
        } else {
            Vec::new()
        }
    }

    // Filtering

    pub fn set_global_filter(&mut self, term: impl Into<String>) -> Vec<Action> {
        if !self.config.enable_global_filter {
            tracing::debug!("global filter disabled");
            return Vec::new();
        }
        let next = FilterState {
            global: term.into(),
            advanced: self.filter.get().advanced.clone(),
        };
        self.propose_filter(next)
    }

    /// Replaces the advanced filter list, keeping the global term.
    pub fn set_advanced_filters(&mut self, filters: Vec<AdvancedFilter>) -> Vec<Action> {
        let next = FilterState {
            global: self.filter.get().global.clone(),
            advanced: filters,
        };
        self.propose_filter(next)
    }

    /// Replaces the advanced filter with the same id, or appends it.
    pub fn set_filter(&mut self, filter: AdvancedFilter) -> Vec<Action> {
        let mut next = self.filter.get().clone();
        match next.advanced.iter_mut().find(|f| f.id == filter.id) {
            Some(existing) => *existing = filter,
            None => next.advanced.push(filter),
        }
        self.propose_filter(next)
    }

    /// Clears the global term and every filter value.
    pub fn reset_filters(&mut self) -> Vec<Action> {
        let mut next = self.filter.get().clone();
        next.reset();
        self.propose_filter(next)
    }

    fn propose_filter(&mut self, next: FilterState) -> Vec<Action> {
        if !self.filter.propose(next.clone()) {
            return Vec::new();
        }
        let mut actions = vec![Action::FilterChanged(next)];
        // a controlled filter has not changed until the caller syncs it
        if !self.filter.is_controlled() {
            actions.extend(self.reset_page_after_filter());
        }
        actions
    }

    fn reset_page_after_filter(&mut self) -> Vec<Action> {
        if !self.config.reset_page_on_filter_change {
            return Vec::new();
        }
        let first = self.page.get().with_page(1);
        self.propose_page(first)
    }

    // Pagination

    /// Moves to `page`, clamped to the pages that exist.
    pub fn set_page(&mut self, page: usize) -> Vec<Action> {
        if !self.config.enable_pagination {
            tracing::debug!(page, "pagination disabled");
            return Vec::new();
        }
        let (_, total) = self.current_page();
        let next = self.page.get().with_page(clamp_page(page, total));
        self.propose_page(next)
    }

    pub fn next_page(&mut self) -> Vec<Action> {
        let (current, _) = self.current_page();
        self.set_page(current.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Vec<Action> {
        let (current, _) = self.current_page();
        self.set_page(current.saturating_sub(1))
    }

    /// Changes the page size, keeping the first row of the page in view.
    ///
    /// Ignored when pagination is disabled.
    pub fn set_page_size(&mut self, page_size: usize) -> Vec<Action> {
        if !self.config.enable_pagination {
            tracing::debug!(page_size, "pagination disabled");
            return Vec::new();
        }
        let (current, _) = self.current_page();
        let next = self.page.get().with_page(current).resized(page_size);
        self.propose_page(next)
    }

    fn propose_page(&mut self, next: PageState) -> Vec<Action> {
        if self.page.propose(next) {
            vec![Action::PageChanged(next)]
        } else {
            Vec::new()
        }
    }

    // Selection

    pub fn toggle_row(&mut self, id: RowId) -> Vec<Action> {
        let mut next = self.selection.get().clone();
        next.toggle(id);
        self.propose_selection(next)
    }

    /// Selects every candidate, or deselects them all if all are selected.
    pub fn toggle_all(&mut self, candidates: &[RowId]) -> Vec<Action> {
        let mut next = self.selection.get().clone();
        next.toggle_all(candidates);
        self.propose_selection(next)
    }

    /// [`toggle_all`](Self::toggle_all) over the configured
    /// [`SelectAllScope`].
    pub fn toggle_all_in_scope(&mut self) -> Vec<Action> {
        let candidates = match self.select_all_scope {
            SelectAllScope::CurrentPage => self.page_ids(),
            SelectAllScope::FilteredRows => self.filtered_ids(),
        };
        self.toggle_all(&candidates)
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        self.propose_selection(Selection::new())
    }

    /// Drops selected ids that no row in the data set carries.
    pub fn prune_selection(&mut self) -> Vec<Action> {
        let all: Vec<usize> = (0..self.data.len()).collect();
        let present: std::collections::BTreeSet<RowId> = self.ids_of(&all).into_iter().collect();
        let mut next = self.selection.get().clone();
        next.retain(|id| present.contains(id));
        self.propose_selection(next)
    }

    fn propose_selection(&mut self, next: Selection) -> Vec<Action> {
        if self.selection.propose(next.clone()) {
            vec![Action::SelectionChanged(next)]
        } else {
            Vec::new()
        }
    }

    // Column layout

    pub fn resize_column(&mut self, column_id: &str, width: u32) -> Vec<Action> {
        self.update_layout(|layout| layout.set_width(column_id, width))
    }

    /// Starts dragging `column_id`'s resize handle at `pointer_x`.
    ///
    /// Returns false for unknown or fixed columns.
    pub fn begin_column_resize(&mut self, column_id: &str, pointer_x: f64) -> bool {
        let layout = ColumnLayout::with_state(&self.layout_rules, self.layout.get().clone());
        self.resize = layout.begin_resize(column_id, pointer_x);
        self.resize.is_some()
    }

    /// Applies a drag position to the active resize, if any.
    pub fn drag_column_resize(&mut self, pointer_x: f64) -> Vec<Action> {
        let Some(session) = self.resize.clone() else {
            tracing::debug!("drag without active resize");
            return Vec::new();
        };
        self.update_layout(|layout| layout.drag_to(&session, pointer_x))
    }

    /// Ends the active resize. Returns whether one was active.
    pub fn end_column_resize(&mut self) -> bool {
        self.resize.take().is_some()
    }

    /// Moves the column at display index `from` to `to`.
    pub fn reorder_columns(&mut self, from: usize, to: usize) -> Vec<Action> {
        if !self.config.enable_column_reorder {
            tracing::debug!(from, to, "column reorder disabled");
            return Vec::new();
        }
        let actions = self.update_layout(|layout| layout.reorder(from, to));
        self.announce_reorder(actions)
    }

    /// Moves column `source_id` onto the position of `target_id`.
    pub fn reorder_columns_by_id(&mut self, source_id: &str, target_id: &str) -> Vec<Action> {
        if !self.config.enable_column_reorder {
            tracing::debug!(source_id, target_id, "column reorder disabled");
            return Vec::new();
        }
        let actions = self.update_layout(|layout| layout.reorder_by_id(source_id, target_id));
        self.announce_reorder(actions)
    }

    /// Restores initial widths and definition order.
    pub fn reset_layout(&mut self) -> Vec<Action> {
        self.update_layout(|layout| {
            layout.reset();
            true
        })
    }

    fn update_layout<F>(&mut self, apply: F) -> Vec<Action>
    where
        F: FnOnce(&mut ColumnLayout<'_>) -> bool,
    {
        let mut layout = ColumnLayout::with_state(&self.layout_rules, self.layout.get().clone());
        if !apply(&mut layout) {
            return Vec::new();
        }
        let next = layout.into_state();
        if self.layout.propose(next.clone()) {
            vec![Action::LayoutChanged(next)]
        } else {
            Vec::new()
        }
    }

    fn announce_reorder(&self, mut actions: Vec<Action>) -> Vec<Action> {
        let order = actions.iter().find_map(|action| match action {
            Action::LayoutChanged(state) => Some(state.order.clone()),
            _ => None,
        });
        if let Some(order) = order {
            if let Some(listener) = &self.on_columns_reorder {
                listener.call(&order);
            }
            actions.push(Action::ColumnsReordered(order));
        }
        actions
    }
}

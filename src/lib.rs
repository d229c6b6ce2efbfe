//! Gridline: an interactive tabular data engine.
//!
//! Gridline turns a collection of rows plus column definitions into a
//! render-ready, paginated view, and turns user interactions back into state
//! changes:
//! - Global search (substring or fuzzy) and typed advanced filters
//! - Stable single-column sorting with per-column comparator overrides
//! - 1-based pagination with page clamping and compact paginator items
//! - Row selection keyed by row identity, with tri-state select-all
//! - Column resizing and reordering
//! - Controlled or uncontrolled ownership for each of those state categories
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host application                                   │  ← Renders TableView
//! └─────────────────────────────────────────────────────┘
//!                        │ Event / bound handlers
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Orchestrator
//! │  - DataTable and state slots                        │
//! │  - Controlled / uncontrolled ownership              │
//! │  - Memoized filter + sort stage                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Engine Layer  │   │ UI Layer      │   │ Storage Layer │
//! │ (engine/)     │   │ (ui/)         │   │ (storage/)    │
//! │ - Filter      │   │ - TableView   │   │ - LayoutStore │
//! │ - Sort        │   │ - Headers     │   │ - JSON file   │
//! │ - Paginate    │   │ - Summaries   │   │               │
//! │ - Selection   │   │               │   │               │
//! │ - Layout      │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Columns, cell values, filters, sort, row ids     │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Orchestrator, ownership strategies, events and actions
//! - [`domain`]: Core value types (columns, cells, filters, sort, row ids, errors)
//! - [`engine`]: Pure filter, sort, pagination, selection and layout engines
//! - [`storage`]: Column layout persistence
//! - [`ui`]: View model produced by each pass
//! - [`observability`]: Tracing initialization
//!
//! # Configuration
//!
//! Tables are configured with [`TableConfig`], built in code, parsed from TOML
//! or read from a flat string map:
//!
//! ```toml
//! page_size = 25
//! enable_column_reorder = true
//! search_mode = "fuzzy"
//! trace_level = "gridline=debug"
//!
//! [initial_sort]
//! column_id = "created"
//! direction = "desc"
//! ```
//!
//! # Examples
//!
//! ## Uncontrolled table
//!
//! ```rust
//! use gridline::{ColumnDef, DataTable, RowIdentity, TableOptions};
//!
//! struct Person { id: u32, name: &'static str, age: u32 }
//!
//! let columns = vec![
//!     ColumnDef::new("name", |p: &Person| p.name.into()).header("Name"),
//!     ColumnDef::new("age", |p: &Person| p.age.into()).header("Age"),
//! ];
//! let people = vec![
//!     Person { id: 1, name: "Dana", age: 41 },
//!     Person { id: 2, name: "Ansel", age: 29 },
//! ];
//! let mut table = DataTable::new(
//!     columns,
//!     people,
//!     RowIdentity::from_fn(|p: &Person, _| p.id.into()),
//!     TableOptions::default(),
//! );
//!
//! table.click_sort_header("age");
//! table.set_global_filter("a");
//! let view = table.view();
//! assert_eq!(view.rows[0].name, "Ansel");
//! ```
//!
//! ## Controlled sort
//!
//! ```rust
//! use gridline::{Action, ColumnDef, DataTable, Ownership, RowIdentity, SortDescriptor, TableOptions};
//!
//! let columns = vec![ColumnDef::new("n", |n: &i64| (*n).into())];
//! let options = TableOptions::default()
//!     .sort(Ownership::controlled(None, |next: &Option<SortDescriptor>| {
//!         // forward `next` to wherever the sort really lives
//!         let _ = next;
//!     }));
//! let mut table = DataTable::new(columns, vec![2, 1], RowIdentity::index(), options);
//!
//! let actions = table.click_sort_header("n");
//! assert_eq!(actions, vec![Action::SortChanged(Some(SortDescriptor::asc("n")))]);
//! // nothing moves until the owner echoes the value back
//! assert_eq!(*table.view().rows[0], 2);
//! table.sync_sort(Some(SortDescriptor::asc("n")));
//! assert_eq!(*table.view().rows[0], 1);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod engine;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, Callback, DataTable, Event, Ownership, TableOptions};
pub use domain::{
    AdvancedFilter, CellValue, ColumnDef, FilterKind, FilterOption, FilterState, GridError,
    Result, RowId, RowIdentity, SortDescriptor, SortDirection,
};
pub use engine::{
    LayoutState, PageItem, PageState, SearchMode, SelectAllScope, Selection, TriState,
};
pub use ui::{ColumnHeader, SelectionSummary, TableView};

use engine::layout::DEFAULT_MIN_WIDTH;
use engine::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Table configuration.
///
/// Every field has a default, so a configuration file only needs the values
/// it changes.
///
/// # Example
///
/// ```rust
/// use gridline::{SearchMode, TableConfig};
///
/// let config = TableConfig::from_toml_str(r#"
///     page_size = 25
///     search_mode = "fuzzy"
/// "#)?;
/// assert_eq!(config.page_size, 25);
/// assert_eq!(config.search_mode, SearchMode::Fuzzy);
/// assert!(config.enable_sorting);
/// # Ok::<(), gridline::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Whether header clicks sort. Default: `true`
    pub enable_sorting: bool,

    /// Whether the global search term applies. Default: `true`
    pub enable_global_filter: bool,

    /// Whether rows are split into pages. Default: `true`
    pub enable_pagination: bool,

    /// Whether columns may be reordered. Default: `false`
    pub enable_column_reorder: bool,

    /// Rows per page. `0` shows every row on one page. Default: `10`
    pub page_size: usize,

    /// 1-based page shown first. Default: `1`
    pub initial_page: usize,

    /// Sort applied before any header click.
    pub initial_sort: Option<SortDescriptor>,

    /// Global search term applied before any input.
    pub initial_global_filter: String,

    /// Narrowest width a column can be resized to, in pixels. Values below 1
    /// act as 1. Default: `40`
    pub min_column_width: u32,

    /// How the global search term matches. Default: `"substring"`
    pub search_mode: SearchMode,

    /// Whether changing filters returns to page 1. Default: `true`
    pub reset_page_on_filter_change: bool,

    /// Level filter for [`observability::init_tracing`], in `EnvFilter`
    /// syntax. Default: `"info"`
    pub trace_level: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            enable_sorting: true,
            enable_global_filter: true,
            enable_pagination: true,
            enable_column_reorder: false,
            page_size: DEFAULT_PAGE_SIZE,
            initial_page: 1,
            initial_sort: None,
            initial_global_filter: String::new(),
            min_column_width: DEFAULT_MIN_WIDTH,
            search_mode: SearchMode::Substring,
            reset_page_on_filter_change: true,
            trace_level: "info".to_string(),
        }
    }
}

impl TableConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Toml`] for malformed TOML, unknown keys or values
    /// of the wrong type, and [`GridError::Config`] for values out of range.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading table config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Builds a configuration from a flat string map, such as host settings.
    ///
    /// Parsing is lenient: a missing or unparseable value keeps its default.
    ///
    /// # Parsing Rules
    ///
    /// - flags: `true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`
    /// - `page_size`, `initial_page`, `min_column_width`: unsigned integers
    /// - `initial_sort`: `column` or `column:asc` / `column:desc`
    /// - `search_mode`: `substring` or `fuzzy`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use gridline::{SortDescriptor, TableConfig};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "50".to_string());
    /// map.insert("initial_sort".to_string(), "created:desc".to_string());
    /// map.insert("enable_pagination".to_string(), "maybe".to_string());
    ///
    /// let config = TableConfig::from_map(&map);
    /// assert_eq!(config.page_size, 50);
    /// assert_eq!(config.initial_sort, Some(SortDescriptor::desc("created")));
    /// assert!(config.enable_pagination);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            map.get(key).map_or(default, |raw| {
                parse_flag(raw).unwrap_or_else(|| {
                    tracing::warn!(key, value = %raw, "invalid flag, using default");
                    default
                })
            })
        };
        let number = |key: &str, default: usize| {
            map.get(key).map_or(default, |raw| {
                raw.trim().parse().unwrap_or_else(|_| {
                    tracing::warn!(key, value = %raw, "invalid number, using default");
                    default
                })
            })
        };

        let min_column_width = map
            .get("min_column_width")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(defaults.min_column_width);
        let initial_sort = map.get("initial_sort").and_then(|raw| parse_sort(raw));
        let search_mode = map
            .get("search_mode")
            .and_then(|raw| SearchMode::parse(raw))
            .unwrap_or(defaults.search_mode);

        Self {
            enable_sorting: flag("enable_sorting", defaults.enable_sorting),
            enable_global_filter: flag("enable_global_filter", defaults.enable_global_filter),
            enable_pagination: flag("enable_pagination", defaults.enable_pagination),
            enable_column_reorder: flag("enable_column_reorder", defaults.enable_column_reorder),
            page_size: number("page_size", defaults.page_size),
            initial_page: number("initial_page", defaults.initial_page).max(1),
            initial_sort,
            initial_global_filter: map
                .get("initial_global_filter")
                .cloned()
                .unwrap_or_default(),
            min_column_width,
            search_mode,
            reset_page_on_filter_change: flag(
                "reset_page_on_filter_change",
                defaults.reset_page_on_filter_change,
            ),
            trace_level: map
                .get("trace_level")
                .cloned()
                .unwrap_or(defaults.trace_level),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.initial_page == 0 {
            return Err(GridError::Config("initial_page is 1-based and must be at least 1".into()));
        }
        if let Some(sort) = &self.initial_sort {
            if sort.column_id.trim().is_empty() {
                return Err(GridError::Config("initial_sort.column_id must not be empty".into()));
            }
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn parse_sort(raw: &str) -> Option<SortDescriptor> {
    let (column, direction) = match raw.split_once(':') {
        Some((column, direction)) => (column.trim(), SortDirection::parse(direction)?),
        None => (raw.trim(), SortDirection::Asc),
    };
    if column.is_empty() {
        return None;
    }
    Some(SortDescriptor {
        column_id: column.to_string(),
        direction: Some(direction),
    })
}

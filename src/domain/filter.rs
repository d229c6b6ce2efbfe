//! Filter state types.
//!
//! [`FilterState`] pairs the global search string with a list of typed
//! [`AdvancedFilter`]s. Each advanced filter is keyed by the id of the column
//! it constrains and carries a [`FilterKind`] whose variant decides both the
//! shape of its value and how it matches.
//!
//! Every [`FilterKind`] variant is handled by three exhaustive matches: the
//! filter engine's matcher, [`FilterKind::is_active`] and [`FilterKind::reset`].
//! Adding a variant fails to compile until all three handle it.
//!
//! # Serialized form
//!
//! ```json
//! { "id": "joined", "label": "Joined", "type": "date-range",
//!   "start": "2024-01-01", "end": "" }
//! ```

use serde::{Deserialize, Serialize};

/// A selectable option offered by `select` and `multi-select` filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Type-specific filter payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FilterKind {
    /// Case-insensitive substring match.
    Text {
        #[serde(default)]
        value: String,
    },
    /// Exact match against the displayed cell value.
    Select {
        #[serde(default)]
        value: String,
        #[serde(default)]
        options: Vec<FilterOption>,
    },
    /// Cell value must equal one of `values`.
    MultiSelect {
        #[serde(default)]
        values: Vec<String>,
        #[serde(default)]
        options: Vec<FilterOption>,
    },
    /// Same calendar day.
    Date {
        #[serde(default)]
        value: String,
    },
    /// Inclusive day range; an empty bound is open.
    DateRange {
        #[serde(default)]
        start: String,
        #[serde(default)]
        end: String,
    },
}

impl FilterKind {
    /// Whether this filter currently constrains rows.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Text { value } | Self::Select { value, .. } | Self::Date { value } => {
                !value.trim().is_empty()
            }
            Self::MultiSelect { values, .. } => !values.is_empty(),
            Self::DateRange { start, end } => {
                !start.trim().is_empty() || !end.trim().is_empty()
            }
        }
    }

    /// Clears the value, keeping the variant and its options.
    pub fn reset(&mut self) {
        match self {
            Self::Text { value } | Self::Select { value, .. } | Self::Date { value } => {
                value.clear();
            }
            Self::MultiSelect { values, .. } => values.clear(),
            Self::DateRange { start, end } => {
                start.clear();
                end.clear();
            }
        }
    }

    /// Tag name as used in the serialized form.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Select { .. } => "select",
            Self::MultiSelect { .. } => "multi-select",
            Self::Date { .. } => "date",
            Self::DateRange { .. } => "date-range",
        }
    }
}

/// A typed filter bound to one column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdvancedFilter {
    /// Id of the column this filter constrains.
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub kind: FilterKind,
}

impl AdvancedFilter {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    pub fn text(id: impl Into<String>, value: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(id.clone(), id, FilterKind::Text { value: value.into() })
    }

    pub fn select(id: impl Into<String>, value: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            id.clone(),
            id,
            FilterKind::Select {
                value: value.into(),
                options: Vec::new(),
            },
        )
    }

    pub fn multi_select<I, S>(id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        Self::new(
            id.clone(),
            id,
            FilterKind::MultiSelect {
                values: values.into_iter().map(Into::into).collect(),
                options: Vec::new(),
            },
        )
    }

    pub fn date(id: impl Into<String>, value: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(id.clone(), id, FilterKind::Date { value: value.into() })
    }

    pub fn date_range(
        id: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self::new(
            id.clone(),
            id,
            FilterKind::DateRange {
                start: start.into(),
                end: end.into(),
            },
        )
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.kind.is_active()
    }
}

/// Global search plus advanced filters: the filter state category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub global: String,
    #[serde(default)]
    pub advanced: Vec<AdvancedFilter>,
}

impl FilterState {
    /// Filter state holding only a global search term.
    pub fn global(term: impl Into<String>) -> Self {
        Self {
            global: term.into(),
            advanced: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: AdvancedFilter) -> Self {
        self.advanced.push(filter);
        self
    }

    /// Advanced filters that currently constrain rows.
    pub fn active_filters(&self) -> impl Iterator<Item = &AdvancedFilter> {
        self.advanced.iter().filter(|f| f.is_active())
    }

    /// Whether any part of this state constrains rows.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.global.trim().is_empty() || self.advanced.iter().any(AdvancedFilter::is_active)
    }

    /// Clears the search and every filter value, keeping the filter list.
    pub fn reset(&mut self) {
        self.global.clear();
        for filter in &mut self.advanced {
            filter.kind.reset();
        }
    }
}

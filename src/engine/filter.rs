//! Filter engine.
//!
//! Applies the global search and every active advanced filter to a row
//! collection, keeping row order. A row survives when it matches the global
//! search AND every active advanced filter.
//!
//! # Global search
//!
//! In [`SearchMode::Substring`] (the default) a row matches when any searchable
//! column's displayed value contains the trimmed search term, ignoring case.
//! [`SearchMode::Fuzzy`] splits the term on whitespace and requires every token
//! to fuzzy-match some searchable column, using the Skim algorithm.
//!
//! # Advanced filters
//!
//! | type           | matches when                                          |
//! |----------------|-------------------------------------------------------|
//! | `text`         | displayed value contains the value, ignoring case     |
//! | `select`       | displayed value equals the value                      |
//! | `multi-select` | displayed value equals one of the values              |
//! | `date`         | cell falls on the same calendar day                   |
//! | `date-range`   | cell day lies within the inclusive bounds             |
//!
//! An empty `date-range` bound is open. A cell, or a non-empty bound, that does
//! not parse as a date never matches.

use crate::domain::value::parse_day;
use crate::domain::{find_column, ColumnDef, FilterKind, FilterState};
use chrono::NaiveDate;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// How the global search term is matched against cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Whitespace-separated tokens, each fuzzy-matched.
    Fuzzy,
}

impl SearchMode {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "substring" => Some(Self::Substring),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

/// Options that shape global search.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions<'a> {
    pub mode: SearchMode,
    /// Column ids searched by the global term. `None` searches every column.
    pub searchable: Option<&'a [String]>,
}

/// Filters `rows` by `state`, preserving their order.
///
/// Accepts anything that borrows as a row: owned rows, references, or wrapper
/// handles.
///
/// # Example
///
/// ```
/// use gridline::engine::filter::{filter_rows, FilterOptions};
/// use gridline::{ColumnDef, FilterState};
///
/// let columns = vec![ColumnDef::new("name", |n: &&str| (*n).into())];
/// let names = ["Bob", "ann", "Cid"];
/// let kept = filter_rows(names.iter(), &FilterState::global("AN"), &columns, &FilterOptions::default());
/// assert_eq!(kept, vec![&"ann"]);
/// ```
pub fn filter_rows<T, R, I>(
    rows: I,
    state: &FilterState,
    columns: &[ColumnDef<T>],
    options: &FilterOptions<'_>,
) -> Vec<R>
where
    R: Borrow<T>,
    I: IntoIterator<Item = R>,
{
    let global = GlobalSearch::new(&state.global, columns, options);
    let matchers: Vec<ColumnMatcher<'_, T>> = state
        .active_filters()
        .filter_map(|filter| {
            let Some(column) = find_column(columns, &filter.id) else {
                tracing::debug!(filter_id = %filter.id, "filter names no column, ignoring");
                return None;
            };
            Some(ColumnMatcher::compile(column, &filter.kind))
        })
        .collect();

    if global.is_none() && matchers.is_empty() {
        return rows.into_iter().collect();
    }

    rows.into_iter()
        .filter(|row| {
            let row: &T = row.borrow();
            global.as_ref().map_or(true, |g| g.matches(row))
                && matchers.iter().all(|m| m.matches(row))
        })
        .collect()
}

/// Prepared global search over the searchable columns.
struct GlobalSearch<'c, T> {
    columns: Vec<&'c ColumnDef<T>>,
    kind: GlobalKind,
}

enum GlobalKind {
    Substring(String),
    Fuzzy {
        tokens: Vec<String>,
        matcher: SkimMatcherV2,
    },
}

impl<'c, T> GlobalSearch<'c, T> {
    fn new(term: &str, columns: &'c [ColumnDef<T>], options: &FilterOptions<'_>) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        let columns = columns
            .iter()
            .filter(|c| options.searchable.map_or(true, |ids| ids.iter().any(|id| *id == c.id)))
            .collect();

        let needle = term.to_lowercase();
        let kind = match options.mode {
            SearchMode::Substring => GlobalKind::Substring(needle),
            SearchMode::Fuzzy => GlobalKind::Fuzzy {
                tokens: needle.split_whitespace().map(String::from).collect(),
                matcher: SkimMatcherV2::default(),
            },
        };
        Some(Self { columns, kind })
    }

    fn matches(&self, row: &T) -> bool {
        match &self.kind {
            GlobalKind::Substring(needle) => self
                .columns
                .iter()
                .any(|c| c.value(row).to_string().to_lowercase().contains(needle.as_str())),
            GlobalKind::Fuzzy { tokens, matcher } => {
                let cells: Vec<String> = self
                    .columns
                    .iter()
                    .map(|c| c.value(row).to_string().to_lowercase())
                    .collect();
                tokens.iter().all(|token| {
                    cells
                        .iter()
                        .any(|cell| matcher.fuzzy_match(cell, token).is_some())
                })
            }
        }
    }
}

/// Bound of a date range: open, or a parsed day. `Some(None)` is a bound
/// that failed to parse and rejects every row.
type DayBound = Option<Option<NaiveDate>>;

/// An active advanced filter resolved against its column.
struct ColumnMatcher<'c, T> {
    column: &'c ColumnDef<T>,
    rule: Rule<'c>,
}

enum Rule<'f> {
    Contains(String),
    Equals(&'f str),
    OneOf(&'f [String]),
    SameDay(Option<NaiveDate>),
    Between { start: DayBound, end: DayBound },
}

impl<'c, T> ColumnMatcher<'c, T> {
    fn compile(column: &'c ColumnDef<T>, kind: &'c FilterKind) -> Self {
        let rule = match kind {
            FilterKind::Text { value } => Rule::Contains(value.trim().to_lowercase()),
            FilterKind::Select { value, .. } => Rule::Equals(value),
            FilterKind::MultiSelect { values, .. } => Rule::OneOf(values),
            FilterKind::Date { value } => Rule::SameDay(parse_day(value)),
            FilterKind::DateRange { start, end } => Rule::Between {
                start: day_bound(start),
                end: day_bound(end),
            },
        };
        Self { column, rule }
    }

    fn matches(&self, row: &T) -> bool {
        let cell = self.column.value(row);
        match &self.rule {
            Rule::Contains(needle) => cell.to_string().to_lowercase().contains(needle.as_str()),
            Rule::Equals(expected) => cell.to_string() == *expected,
            Rule::OneOf(values) => {
                let shown = cell.to_string();
                values.iter().any(|v| *v == shown)
            }
            Rule::SameDay(day) => day.is_some() && cell.as_day() == *day,
            Rule::Between { start, end } => {
                let Some(day) = cell.as_day() else {
                    return false;
                };
                let after_start = match start {
                    None => true,
                    Some(bound) => bound.is_some_and(|s| day >= s),
                };
                let before_end = match end {
                    None => true,
                    Some(bound) => bound.is_some_and(|e| day <= e),
                };
                after_start && before_end
            }
        }
    }
}

fn day_bound(raw: &str) -> DayBound {
    if raw.trim().is_empty() {
        None
    } else {
        Some(parse_day(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdvancedFilter, CellValue};

    struct Person {
        name: &'static str,
        role: &'static str,
        joined: &'static str,
    }

    fn columns() -> Vec<ColumnDef<Person>> {
        vec![
            ColumnDef::new("name", |p: &Person| p.name.into()),
            ColumnDef::new("role", |p: &Person| p.role.into()),
            ColumnDef::new("joined", |p: &Person| {
                parse_day(p.joined).map_or(CellValue::Null, CellValue::Date)
            }),
        ]
    }

    fn people() -> Vec<Person> {
        vec![
            Person { name: "Alice", role: "admin", joined: "2024-01-05" },
            Person { name: "Bob", role: "viewer", joined: "2024-02-10" },
            Person { name: "Carla", role: "editor", joined: "2024-03-15" },
            Person { name: "Dan", role: "viewer", joined: "not a date" },
        ]
    }

    fn names(state: &FilterState) -> Vec<&'static str> {
        let people = people();
        filter_rows(people.iter(), state, &columns(), &FilterOptions::default())
            .into_iter()
            .map(|p| p.name)
            .collect()
    }

    #[test]
    fn blank_search_keeps_everything() {
        assert_eq!(names(&FilterState::global("   ")).len(), 4);
    }

    #[test]
    fn global_search_spans_columns() {
        assert_eq!(names(&FilterState::global(" VIEW ")), vec!["Bob", "Dan"]);
        assert_eq!(names(&FilterState::global("2024-03")), vec!["Carla"]);
    }

    #[test]
    fn searchable_subset_restricts_global_search() {
        let people = people();
        let searchable = vec!["name".to_string()];
        let options = FilterOptions {
            searchable: Some(&searchable),
            ..FilterOptions::default()
        };
        let kept = filter_rows(people.iter(), &FilterState::global("admin"), &columns(), &options);
        assert!(kept.is_empty());
    }

    #[test]
    fn fuzzy_mode_matches_subsequences() {
        let people = people();
        let options = FilterOptions {
            mode: SearchMode::Fuzzy,
            searchable: None,
        };
        let kept: Vec<_> = filter_rows(people.iter(), &FilterState::global("crl edtr"), &columns(), &options)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(kept, vec!["Carla"]);
    }

    #[test]
    fn advanced_filters_combine_with_and() {
        let state = FilterState::default()
            .with_filter(AdvancedFilter::multi_select("role", ["viewer", "editor"]))
            .with_filter(AdvancedFilter::text("name", "a"));
        assert_eq!(names(&state), vec!["Carla", "Dan"]);
    }

    #[test]
    fn select_is_exact() {
        let state = FilterState::default().with_filter(AdvancedFilter::select("role", "view"));
        assert!(names(&state).is_empty());
        let state = FilterState::default().with_filter(AdvancedFilter::select("role", "viewer"));
        assert_eq!(names(&state), vec!["Bob", "Dan"]);
    }

    #[test]
    fn inactive_filters_impose_nothing() {
        let state = FilterState::default()
            .with_filter(AdvancedFilter::text("name", " "))
            .with_filter(AdvancedFilter::date_range("joined", "", ""));
        assert_eq!(names(&state).len(), 4);
    }

    #[test]
    fn date_filters_compare_calendar_days() {
        let state = FilterState::default().with_filter(AdvancedFilter::date("joined", "2024-02-10T18:00:00"));
        assert_eq!(names(&state), vec!["Bob"]);

        let state = FilterState::default()
            .with_filter(AdvancedFilter::date_range("joined", "2024-01-05", "2024-02-10"));
        assert_eq!(names(&state), vec!["Alice", "Bob"]);

        let state = FilterState::default().with_filter(AdvancedFilter::date_range("joined", "2024-02-01", ""));
        assert_eq!(names(&state), vec!["Bob", "Carla"]);

        let state = FilterState::default().with_filter(AdvancedFilter::date_range("joined", "someday", ""));
        assert!(names(&state).is_empty());
    }

    #[test]
    fn filter_on_unknown_column_is_ignored() {
        let state = FilterState::default().with_filter(AdvancedFilter::text("missing", "zzz"));
        assert_eq!(names(&state).len(), 4);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let people = people();
        let state = FilterState::global("a").with_filter(AdvancedFilter::select("role", "viewer"));
        let once = filter_rows(people.iter(), &state, &columns(), &FilterOptions::default());
        let twice = filter_rows(once.iter().copied(), &state, &columns(), &FilterOptions::default());
        assert_eq!(
            once.iter().map(|p| p.name).collect::<Vec<_>>(),
            twice.iter().map(|p| p.name).collect::<Vec<_>>()
        );
    }
}

//! Column layout engine.
//!
//! Tracks column pixel widths and display order. Both live in a
//! [`LayoutState`] keyed by column id, so they never depend on row data and
//! reordering never disturbs stored widths.
//!
//! Static per-column facts (resizable flag, width floor, initial width) are
//! captured once in [`LayoutRules`]; [`ColumnLayout`] applies operations to a
//! state under those rules.

use crate::domain::ColumnDef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Width floor used when none is configured.
pub const DEFAULT_MIN_WIDTH: u32 = 40;

/// Width reported for a column with neither a stored nor an initial width.
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;

/// Column widths and order: the layout state category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Widths set by resizing, keyed by column id.
    #[serde(default)]
    pub widths: BTreeMap<String, u32>,
    /// Display order of column ids. Columns missing here are appended in
    /// definition order.
    #[serde(default)]
    pub order: Vec<String>,
}

#[derive(Debug, Clone)]
struct ColumnRule {
    resizable: bool,
    floor: u32,
    initial_width: Option<u32>,
}

/// Per-column layout constraints derived from column definitions.
#[derive(Debug, Clone)]
pub struct LayoutRules {
    ids: Vec<String>,
    rules: HashMap<String, ColumnRule>,
}

impl LayoutRules {
    /// Captures constraints for `columns` under a table-wide `min_width`.
    ///
    /// The floor is never below 1px; a column's own `min_width` can only raise
    /// it.
    pub fn new<T>(columns: &[ColumnDef<T>], min_width: u32) -> Self {
        let table_floor = min_width.max(1);
        let rules = columns
            .iter()
            .map(|c| {
                let rule = ColumnRule {
                    resizable: c.resizable,
                    floor: c.min_width.unwrap_or(0).max(table_floor),
                    initial_width: c.initial_width,
                };
                (c.id.clone(), rule)
            })
            .collect();
        Self {
            ids: columns.iter().map(|c| c.id.clone()).collect(),
            rules,
        }
    }

    /// A fresh state with definition order and no stored widths.
    #[must_use]
    pub fn initial_state(&self) -> LayoutState {
        LayoutState {
            widths: BTreeMap::new(),
            order: self.ids.clone(),
        }
    }

    #[must_use]
    pub fn contains(&self, column_id: &str) -> bool {
        self.rules.contains_key(column_id)
    }

    #[must_use]
    pub fn is_resizable(&self, column_id: &str) -> bool {
        self.rules.get(column_id).is_some_and(|r| r.resizable)
    }
}

/// An in-progress drag on a column's resize handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub column_id: String,
    origin_x: f64,
    start_width: u32,
}

impl ResizeSession {
    /// Width the column would have with the pointer at `pointer_x`, before
    /// clamping.
    #[must_use]
    pub fn width_at(&self, pointer_x: f64) -> u32 {
        let width = (f64::from(self.start_width) + pointer_x - self.origin_x).round();
        if width <= 0.0 {
            0
        } else if width >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let width = width as u32;
            width
        }
    }
}

/// Layout operations over a [`LayoutState`].
///
/// # Example
///
/// ```
/// use gridline::engine::layout::{ColumnLayout, LayoutRules};
/// use gridline::ColumnDef;
///
/// let columns = vec![
///     ColumnDef::new("name", |s: &String| s.as_str().into()).initial_width(120),
///     ColumnDef::new("len", |s: &String| s.len().to_string().into()).resizable(false),
/// ];
/// let rules = LayoutRules::new(&columns, 40);
/// let mut layout = ColumnLayout::new(&rules);
///
/// assert!(layout.set_width("name", 10));
/// assert_eq!(layout.width("name"), Some(40));
/// assert!(!layout.set_width("len", 300));
/// assert!(layout.reorder(1, 0));
/// assert_eq!(layout.ordered_ids(), vec!["len", "name"]);
/// ```
#[derive(Debug, Clone)]
pub struct ColumnLayout<'r> {
    rules: &'r LayoutRules,
    state: LayoutState,
}

impl<'r> ColumnLayout<'r> {
    #[must_use]
    pub fn new(rules: &'r LayoutRules) -> Self {
        Self {
            state: rules.initial_state(),
            rules,
        }
    }

    #[must_use]
    pub const fn with_state(rules: &'r LayoutRules, state: LayoutState) -> Self {
        Self { rules, state }
    }

    #[must_use]
    pub const fn state(&self) -> &LayoutState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> LayoutState {
        self.state
    }

    /// Sets a column's width, clamped to its floor.
    ///
    /// Returns whether the stored width changed. Unknown and non-resizable
    /// columns are left alone.
    pub fn set_width(&mut self, column_id: &str, width: u32) -> bool {
        let Some(rule) = self.rules.rules.get(column_id) else {
            tracing::debug!(column_id, "resize of unknown column ignored");
            return false;
        };
        if !rule.resizable {
            tracing::debug!(column_id, "resize of fixed column ignored");
            return false;
        }
        let width = width.max(rule.floor);
        if self.state.widths.get(column_id) == Some(&width) {
            return false;
        }
        self.state.widths.insert(column_id.to_string(), width);
        true
    }

    /// Stored width, else the column's initial width.
    #[must_use]
    pub fn width(&self, column_id: &str) -> Option<u32> {
        self.state
            .widths
            .get(column_id)
            .copied()
            .or_else(|| self.rules.rules.get(column_id).and_then(|r| r.initial_width))
    }

    /// Width of every known column, falling back to
    /// [`DEFAULT_COLUMN_WIDTH`] and never below the column's floor.
    #[must_use]
    pub fn resolved_widths(&self) -> BTreeMap<String, u32> {
        self.rules
            .rules
            .iter()
            .map(|(id, rule)| {
                let width = self.width(id).unwrap_or(DEFAULT_COLUMN_WIDTH).max(rule.floor);
                (id.clone(), width)
            })
            .collect()
    }

    /// Display order: known ids from the state first, then any column the
    /// state does not mention, in definition order.
    #[must_use]
    pub fn ordered_ids(&self) -> Vec<&str> {
        let mut ordered: Vec<&str> = Vec::with_capacity(self.rules.ids.len());
        for id in &self.state.order {
            if self.rules.contains(id) && !ordered.contains(&id.as_str()) {
                ordered.push(id);
            }
        }
        for id in &self.rules.ids {
            if !ordered.contains(&id.as_str()) {
                ordered.push(id);
            }
        }
        ordered
    }

    /// Moves the column at display index `from` to index `to`.
    ///
    /// Returns false, changing nothing, when either index is out of range or
    /// they are equal.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let mut order: Vec<String> = self.ordered_ids().into_iter().map(String::from).collect();
        if from >= order.len() || to >= order.len() || from == to {
            tracing::debug!(from, to, len = order.len(), "reorder ignored");
            return false;
        }
        let moved = order.remove(from);
        order.insert(to, moved);
        self.state.order = order;
        true
    }

    /// Moves column `source_id` to the display position of `target_id`, as a
    /// drag-and-drop onto a header does.
    pub fn reorder_by_id(&mut self, source_id: &str, target_id: &str) -> bool {
        let ordered = self.ordered_ids();
        let from = ordered.iter().position(|id| *id == source_id);
        let to = ordered.iter().position(|id| *id == target_id);
        match (from, to) {
            (Some(from), Some(to)) => self.reorder(from, to),
            _ => {
                tracing::debug!(source_id, target_id, "reorder of unknown column ignored");
                false
            }
        }
    }

    /// Starts a drag on `column_id`'s resize handle. `None` for unknown or
    /// fixed columns.
    #[must_use]
    pub fn begin_resize(&self, column_id: &str, pointer_x: f64) -> Option<ResizeSession> {
        if !self.rules.is_resizable(column_id) {
            return None;
        }
        let start_width = self
            .resolved_widths()
            .get(column_id)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH);
        Some(ResizeSession {
            column_id: column_id.to_string(),
            origin_x: pointer_x,
            start_width,
        })
    }

    /// Applies a drag position to the session's column.
    pub fn drag_to(&mut self, session: &ResizeSession, pointer_x: f64) -> bool {
        self.set_width(&session.column_id, session.width_at(pointer_x))
    }

    /// Forgets stored widths and restores definition order.
    pub fn reset(&mut self) {
        self.state = self.rules.initial_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDef<u32>> {
        vec![
            ColumnDef::new("a", |v: &u32| (*v).into()).initial_width(100),
            ColumnDef::new("b", |v: &u32| (*v).into()).min_width(80),
            ColumnDef::new("c", |v: &u32| (*v).into()).resizable(false),
        ]
    }

    #[test]
    fn widths_clamp_to_floors() {
        let rules = LayoutRules::new(&columns(), 40);
        let mut layout = ColumnLayout::new(&rules);
        assert!(layout.set_width("a", 0));
        assert_eq!(layout.width("a"), Some(40));
        assert!(layout.set_width("b", 50));
        assert_eq!(layout.width("b"), Some(80));
        assert!(!layout.set_width("b", 60), "same clamped width is no change");
    }

    #[test]
    fn zero_floor_is_raised_to_one() {
        let rules = LayoutRules::new(&columns(), 0);
        let mut layout = ColumnLayout::new(&rules);
        layout.set_width("a", 0);
        assert_eq!(layout.width("a"), Some(1));
    }

    #[test]
    fn fixed_and_unknown_columns_reject_resize() {
        let rules = LayoutRules::new(&columns(), 40);
        let mut layout = ColumnLayout::new(&rules);
        assert!(!layout.set_width("c", 300));
        assert!(!layout.set_width("zz", 300));
        assert_eq!(layout.width("c"), None);
        assert!(layout.begin_resize("c", 0.0).is_none());
    }

    #[test]
    fn resolved_widths_fill_defaults() {
        let rules = LayoutRules::new(&columns(), 40);
        let layout = ColumnLayout::new(&rules);
        let widths = layout.resolved_widths();
        assert_eq!(widths["a"], 100);
        assert_eq!(widths["b"], DEFAULT_COLUMN_WIDTH);
        assert_eq!(widths["c"], DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn reorder_keeps_widths_keyed_by_id() {
        let rules = LayoutRules::new(&columns(), 40);
        let mut layout = ColumnLayout::new(&rules);
        layout.set_width("b", 222);
        assert!(layout.reorder(1, 0));
        assert_eq!(layout.ordered_ids(), vec!["b", "a", "c"]);
        assert_eq!(layout.width("b"), Some(222));

        assert!(layout.reorder_by_id("a", "c"));
        assert_eq!(layout.ordered_ids(), vec!["b", "c", "a"]);
        assert!(!layout.reorder(0, 3));
        assert!(!layout.reorder(2, 2));
        assert!(!layout.reorder_by_id("a", "missing"));
    }

    #[test]
    fn incomplete_order_is_normalized() {
        let rules = LayoutRules::new(&columns(), 40);
        let state = LayoutState {
            widths: BTreeMap::new(),
            order: vec!["c".into(), "ghost".into(), "c".into()],
        };
        let layout = ColumnLayout::with_state(&rules, state);
        assert_eq!(layout.ordered_ids(), vec!["c", "a", "b"]);
    }

    #[test]
    fn drag_session_applies_pointer_delta() {
        let rules = LayoutRules::new(&columns(), 40);
        let mut layout = ColumnLayout::new(&rules);
        let session = layout.begin_resize("a", 500.0).unwrap();
        assert!(layout.drag_to(&session, 530.4));
        assert_eq!(layout.width("a"), Some(130));
        assert!(layout.drag_to(&session, 0.0));
        assert_eq!(layout.width("a"), Some(40));
    }

    #[test]
    fn reset_restores_definition() {
        let rules = LayoutRules::new(&columns(), 40);
        let mut layout = ColumnLayout::new(&rules);
        layout.set_width("a", 300);
        layout.reorder(0, 2);
        layout.reset();
        assert_eq!(layout.state(), &rules.initial_state());
    }
}

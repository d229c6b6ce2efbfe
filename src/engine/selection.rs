//! Selection engine.
//!
//! Tracks selected rows by [`RowId`], independent of which rows are currently
//! filtered in, where they sort, or which page shows them. "Select all"
//! always works over an explicit candidate id list chosen by the caller: the
//! ids on the current page, every filtered row, or anything else.
//!
//! The tri-state of a select-all checkbox is derived from set membership on
//! every call and never stored.

use crate::domain::RowId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Display state of a select-all checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    None,
    Some,
    All,
}

/// Which rows a bound select-all handler considers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectAllScope {
    /// Rows on the page being rendered.
    #[default]
    CurrentPage,
    /// Every row that passes the filters, across all pages.
    FilteredRows,
}

/// The set of selected row ids: the selection state category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<RowId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.ids.contains(id)
    }

    pub fn select(&mut self, id: RowId) {
        self.ids.insert(id);
    }

    pub fn deselect(&mut self, id: &RowId) {
        self.ids.remove(id);
    }

    /// Flips one row.
    pub fn toggle(&mut self, id: RowId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Deselects every candidate if all are selected, otherwise selects every
    /// candidate. Ids outside `candidates` are left alone.
    ///
    /// # Example
    ///
    /// ```
    /// use gridline::{RowId, Selection};
    ///
    /// let page: Vec<RowId> = ["a", "b", "c"].into_iter().map(RowId::from).collect();
    /// let mut selection: Selection = ["a", "z"].into_iter().map(RowId::from).collect();
    ///
    /// selection.toggle_all(&page);
    /// assert!(selection.all_selected(&page));
    /// selection.toggle_all(&page);
    /// assert!(selection.is_selected(&RowId::from("z")));
    /// assert_eq!(selection.len(), 1);
    /// ```
    pub fn toggle_all(&mut self, candidates: &[RowId]) {
        if self.all_selected(candidates) {
            for id in candidates {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(candidates.iter().cloned());
        }
    }

    /// True when `candidates` is non-empty and every candidate is selected.
    #[must_use]
    pub fn all_selected(&self, candidates: &[RowId]) -> bool {
        !candidates.is_empty() && candidates.iter().all(|id| self.ids.contains(id))
    }

    /// True when at least one, but not every, candidate is selected.
    #[must_use]
    pub fn some_selected(&self, candidates: &[RowId]) -> bool {
        let selected = self.count_in(candidates);
        selected > 0 && selected < candidates.len()
    }

    #[must_use]
    pub fn tri_state(&self, candidates: &[RowId]) -> TriState {
        match self.count_in(candidates) {
            0 => TriState::None,
            n if n == candidates.len() => TriState::All,
            _ => TriState::Some,
        }
    }

    /// Number of candidates currently selected.
    #[must_use]
    pub fn count_in(&self, candidates: &[RowId]) -> usize {
        candidates.iter().filter(|id| self.ids.contains(*id)).count()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Keeps only ids accepted by `keep`, e.g. to drop rows that left the data.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&RowId) -> bool,
    {
        self.ids.retain(keep);
    }

    /// Selected ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &RowId> {
        self.ids.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<RowId> {
        self.ids.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<RowId> for Selection {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<RowId> for Selection {
    fn extend<I: IntoIterator<Item = RowId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<RowId> {
        raw.iter().copied().map(RowId::from).collect()
    }

    #[test]
    fn tri_state_follows_membership() {
        let candidates = ids(&["a", "b", "c"]);
        let mut selection = Selection::new();
        assert_eq!(selection.tri_state(&candidates), TriState::None);

        selection.select("a".into());
        selection.select("b".into());
        assert!(selection.some_selected(&candidates));
        assert!(!selection.all_selected(&candidates));
        assert_eq!(selection.tri_state(&candidates), TriState::Some);

        selection.toggle_all(&candidates);
        assert!(selection.all_selected(&candidates));
        assert!(!selection.some_selected(&candidates));

        selection.toggle_all(&candidates);
        assert!(selection.is_empty());
    }

    #[test]
    fn empty_candidates_are_never_all_selected() {
        let mut selection = Selection::new();
        selection.select("a".into());
        assert!(!selection.all_selected(&[]));
        assert!(!selection.some_selected(&[]));
        assert_eq!(selection.tri_state(&[]), TriState::None);

        selection.toggle_all(&[]);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_and_deselect() {
        let mut selection = Selection::new();
        selection.toggle("r1".into());
        assert!(selection.is_selected(&"r1".into()));
        selection.toggle("r1".into());
        assert!(!selection.is_selected(&"r1".into()));

        selection.select("r2".into());
        selection.deselect(&"r2".into());
        selection.deselect(&"never".into());
        assert!(selection.is_empty());
    }

    #[test]
    fn retain_prunes_ids() {
        let mut selection: Selection = ids(&["a", "b", "c"]).into_iter().collect();
        selection.retain(|id| id.as_str() != "b");
        assert_eq!(selection.to_vec(), ids(&["a", "c"]));
    }

    #[test]
    fn serializes_as_sorted_list() {
        let selection: Selection = ids(&["b", "a"]).into_iter().collect();
        assert_eq!(serde_json::to_string(&selection).unwrap(), r#"["a","b"]"#);
    }
}

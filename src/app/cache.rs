//! Memoized filter and sort stage.
//!
//! The pipeline output is stored as indices into the data set so a cached
//! result never borrows rows. It is recomputed only when the data revision,
//! the effective filter state, the effective sort descriptor or the search
//! mode changes.

use crate::domain::{ColumnDef, FilterState, SortDescriptor, SortFn};
use crate::engine::filter::{filter_rows, FilterOptions, SearchMode};
use crate::engine::sort::sort_rows;
use std::borrow::Borrow;

/// A row together with its position in the data set.
#[derive(Debug, Clone, Copy)]
struct IndexedRow<'a, T> {
    index: usize,
    row: &'a T,
}

impl<T> Borrow<T> for IndexedRow<'_, T> {
    fn borrow(&self) -> &T {
        self.row
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PipelineKey {
    pub revision: u64,
    pub filter: FilterState,
    pub sort: Option<SortDescriptor>,
    pub mode: SearchMode,
}

/// Inputs of one pipeline run beyond the cache key.
pub(crate) struct PipelineInputs<'a, T> {
    pub data: &'a [T],
    pub columns: &'a [ColumnDef<T>],
    pub searchable: Option<&'a [String]>,
    pub comparator: Option<&'a SortFn<T>>,
}

#[derive(Debug, Default)]
pub(crate) struct PipelineCache {
    key: Option<PipelineKey>,
    indices: Vec<usize>,
}

impl PipelineCache {
    /// Filtered and sorted data indices for `key`, recomputed on a miss.
    pub fn resolve<T>(&mut self, key: PipelineKey, inputs: &PipelineInputs<'_, T>) -> &[usize] {
        if self.key.as_ref() == Some(&key) {
            tracing::trace!(revision = key.revision, "pipeline cache hit");
            return &self.indices;
        }

        let _span = tracing::debug_span!("pipeline",
            revision = key.revision,
            row_count = inputs.data.len()
        )
        .entered();

        let rows = inputs
            .data
            .iter()
            .enumerate()
            .map(|(index, row)| IndexedRow { index, row });
        let options = FilterOptions {
            mode: key.mode,
            searchable: inputs.searchable,
        };
        let mut kept = filter_rows(rows, &key.filter, inputs.columns, &options);
        sort_rows(&mut kept, key.sort.as_ref(), inputs.columns, inputs.comparator);
        self.indices = kept.into_iter().map(|r| r.index).collect();

        tracing::debug!(kept = self.indices.len(), "pipeline recomputed");
        self.key = Some(key);
        &self.indices
    }

    /// Cached indices from the last run, without checking freshness.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

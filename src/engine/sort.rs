//! Sort engine.
//!
//! Orders rows by the active [`SortDescriptor`] using a stable sort, so rows
//! with equal keys keep the order the filter stage produced.
//!
//! # Comparator Resolution
//!
//! 1. A comparator supplied alongside the descriptor
//! 2. The column's [`custom_sort`](ColumnDef::custom_sort) override
//! 3. [`compare_values`] over the column's accessor output
//!
//! Whichever comparator wins is read as ascending order and reversed for
//! [`SortDirection::Desc`].

use crate::domain::{find_column, CellValue, ColumnDef, SortDescriptor, SortDirection, SortFn};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Default comparison of two cell values.
///
/// Numeric when both values have a numeric reading, otherwise a
/// case-insensitive comparison of their displayed text.
///
/// # Example
///
/// ```
/// use gridline::engine::sort::compare_values;
/// use gridline::CellValue;
/// use std::cmp::Ordering;
///
/// // "9" < "10" numerically even though it is larger as text
/// assert_eq!(compare_values(&"9".into(), &CellValue::Int(10)), Ordering::Less);
/// assert_eq!(compare_values(&"apple".into(), &"Banana".into()), Ordering::Less);
/// assert_eq!(compare_values(&"x".into(), &"X".into()), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    a.to_string()
        .to_lowercase()
        .cmp(&b.to_string().to_lowercase())
}

/// Sorts `rows` in place by `descriptor`.
///
/// A missing descriptor, a descriptor without direction, or a descriptor
/// naming an unknown column leaves the order unchanged.
pub fn sort_rows<T, R>(
    rows: &mut [R],
    descriptor: Option<&SortDescriptor>,
    columns: &[ColumnDef<T>],
    comparator: Option<&SortFn<T>>,
) where
    R: Borrow<T>,
{
    let Some(descriptor) = descriptor else {
        return;
    };
    let Some(direction) = descriptor.direction else {
        return;
    };

    let _span = tracing::debug_span!("sort_rows",
        column_id = %descriptor.column_id,
        direction = ?direction,
        row_count = rows.len()
    )
    .entered();

    let Some(column) = find_column(columns, &descriptor.column_id) else {
        tracing::debug!("sort column not found, keeping order");
        return;
    };

    let ordered = |ordering: Ordering| match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };

    if let Some(compare) = comparator.or_else(|| column.custom_sort_fn()) {
        rows.sort_by(|a, b| ordered(compare(a.borrow(), b.borrow(), direction)));
        return;
    }

    // Read each cell once rather than twice per comparison.
    let mut keyed: Vec<(CellValue, usize)> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (column.value(row.borrow()), i))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| ordered(compare_values(a, b)));
    let order: Vec<usize> = keyed.into_iter().map(|(_, i)| i).collect();
    apply_permutation(rows, order);
}

/// Rearranges `rows` so position `k` holds the element previously at
/// `order[k]`.
fn apply_permutation<R>(rows: &mut [R], mut order: Vec<usize>) {
    for start in 0..order.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            rows.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
        score: i64,
    }

    fn item(id: u32, label: &'static str, score: i64) -> Item {
        Item { id, label, score }
    }

    fn columns() -> Vec<ColumnDef<Item>> {
        vec![
            ColumnDef::new("label", |i: &Item| i.label.into()),
            ColumnDef::new("score", |i: &Item| i.score.into()),
            ColumnDef::new("len", |i: &Item| i.label.len().to_string().into())
                .custom_sort(|a: &Item, b: &Item, _| b.label.len().cmp(&a.label.len())),
        ]
    }

    fn ids(rows: &[&Item]) -> Vec<u32> {
        rows.iter().map(|i| i.id).collect()
    }

    fn sample() -> Vec<Item> {
        vec![
            item(1, "pear", 3),
            item(2, "Apple", 1),
            item(3, "fig", 3),
            item(4, "banana", 2),
            item(5, "apple", 3),
        ]
    }

    #[test]
    fn no_descriptor_or_direction_is_identity() {
        let data = sample();
        let mut rows: Vec<&Item> = data.iter().collect();
        sort_rows(&mut rows, None, &columns(), None);
        assert_eq!(ids(&rows), vec![1, 2, 3, 4, 5]);

        let unsorted = SortDescriptor {
            column_id: "score".into(),
            direction: None,
        };
        sort_rows(&mut rows, Some(&unsorted), &columns(), None);
        assert_eq!(ids(&rows), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let data = sample();
        let mut rows: Vec<&Item> = data.iter().collect();
        sort_rows(&mut rows, Some(&SortDescriptor::asc("score")), &columns(), None);
        assert_eq!(ids(&rows), vec![2, 4, 1, 3, 5]);

        let mut rows: Vec<&Item> = data.iter().collect();
        sort_rows(&mut rows, Some(&SortDescriptor::desc("score")), &columns(), None);
        assert_eq!(ids(&rows), vec![1, 3, 5, 4, 2]);
    }

    #[test]
    fn text_ignores_case() {
        let data = sample();
        let mut rows: Vec<&Item> = data.iter().collect();
        sort_rows(&mut rows, Some(&SortDescriptor::asc("label")), &columns(), None);
        assert_eq!(ids(&rows), vec![2, 5, 4, 3, 1]);
    }

    #[test]
    fn column_override_beats_default() {
        let data = sample();
        let mut rows: Vec<&Item> = data.iter().collect();
        sort_rows(&mut rows, Some(&SortDescriptor::asc("len")), &columns(), None);
        // longest label first, ties stable
        assert_eq!(ids(&rows), vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn descriptor_comparator_beats_column_override() {
        let data = sample();
        let by_id: SortFn<Item> = Arc::new(|a: &Item, b: &Item, _| b.id.cmp(&a.id));
        let mut rows: Vec<&Item> = data.iter().collect();
        sort_rows(&mut rows, Some(&SortDescriptor::asc("len")), &columns(), Some(&by_id));
        assert_eq!(ids(&rows), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn unknown_column_keeps_order() {
        let data = sample();
        let mut rows: Vec<&Item> = data.iter().collect();
        sort_rows(&mut rows, Some(&SortDescriptor::asc("nope")), &columns(), None);
        assert_eq!(ids(&rows), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn mixed_numeric_and_text_falls_back_to_text() {
        assert_eq!(compare_values(&"10".into(), &"abc".into()), Ordering::Less);
        assert_eq!(compare_values(&CellValue::Null, &"a".into()), Ordering::Less);
        assert_eq!(compare_values(&CellValue::Float(2.5), &CellValue::Int(2)), Ordering::Greater);
    }

    #[test]
    fn permutation_handles_cycles() {
        let mut rows = vec!['a', 'b', 'c', 'd'];
        apply_permutation(&mut rows, vec![2, 0, 3, 1]);
        assert_eq!(rows, vec!['c', 'a', 'd', 'b']);
    }
}

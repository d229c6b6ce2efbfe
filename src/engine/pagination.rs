//! Pagination engine.
//!
//! Slices an ordered row collection into fixed-size, 1-based pages and derives
//! the navigation numbers a paginator needs.

use serde::{Deserialize, Serialize};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page and page size: the pagination state category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageState {
    /// 1-based page number.
    pub page: usize,
    /// Rows per page. `0` disables pagination.
    pub page_size: usize,
}

impl PageState {
    #[must_use]
    pub const fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Same state pointing at `page`.
    #[must_use]
    pub const fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Changes the page size, moving to the page that still shows the first
    /// row of the current page.
    ///
    /// # Example
    ///
    /// ```
    /// use gridline::PageState;
    ///
    /// // rows 20..30 are on page 3 at size 10, row 20 is on page 2 at size 15
    /// assert_eq!(PageState::new(3, 10).resized(15), PageState::new(2, 15));
    /// ```
    #[must_use]
    pub const fn resized(self, page_size: usize) -> Self {
        if page_size == 0 || self.page_size == 0 {
            return Self { page: 1, page_size };
        }
        let first_row = self.page.saturating_sub(1).saturating_mul(self.page_size);
        Self {
            page: first_row / page_size + 1,
            page_size,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of rows plus its position in the full collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<R> {
    pub rows: Vec<R>,
    pub total_pages: usize,
    /// Index of the first row on the page, inclusive.
    pub start_index: usize,
    /// Index past the last row on the page, exclusive.
    pub end_index: usize,
}

/// Number of pages needed for `count` rows.
///
/// Zero rows need zero pages. A page size of `0` puts everything on one page.
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if count == 0 {
        0
    } else if page_size == 0 {
        1
    } else {
        (count - 1) / page_size + 1
    }
}

/// Clamps `page` into `[1, max(total_pages, 1)]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Cuts page `page` out of `rows`.
///
/// Page `0` reads as page 1. A page past the end yields an empty slice; the
/// caller decides whether to correct it.
///
/// # Example
///
/// ```
/// use gridline::engine::pagination::paginate;
///
/// let page = paginate(&[4, 2, 1, 5, 3], 3, 2);
/// assert_eq!(page.rows, vec![3]);
/// assert_eq!((page.total_pages, page.start_index, page.end_index), (3, 4, 5));
/// ```
pub fn paginate<R: Clone>(rows: &[R], page: usize, page_size: usize) -> PageSlice<R> {
    let total = total_pages(rows.len(), page_size);
    if page_size == 0 {
        return PageSlice {
            rows: rows.to_vec(),
            total_pages: total,
            start_index: 0,
            end_index: rows.len(),
        };
    }

    let start_index = page
        .max(1)
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(rows.len());
    let end_index = start_index.saturating_add(page_size).min(rows.len());
    PageSlice {
        rows: rows[start_index..end_index].to_vec(),
        total_pages: total,
        start_index,
        end_index,
    }
}

/// An entry in a compact paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page buttons to show: first, last, `siblings` pages either side of
/// `current`, with an ellipsis wherever pages are skipped.
///
/// # Example
///
/// ```
/// use gridline::engine::pagination::{page_items, PageItem::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_items(6, 12, 1),
///     vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(12)]
/// );
/// ```
#[must_use]
pub fn page_items(current: usize, total_pages: usize, siblings: usize) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = clamp_page(current, total_pages);
    let low = current.saturating_sub(siblings).max(1);
    let high = current.saturating_add(siblings).min(total_pages);

    let mut items = Vec::with_capacity(high - low + 5);
    if low > 1 {
        items.push(PageItem::Page(1));
        push_gap(&mut items, 2, low);
    }
    items.extend((low..=high).map(PageItem::Page));
    if high < total_pages {
        push_gap(&mut items, high + 1, total_pages);
        items.push(PageItem::Page(total_pages));
    }
    items
}

/// Pushes whatever stands for the pages in `from..to`: nothing, the single
/// page, or an ellipsis.
fn push_gap(items: &mut Vec<PageItem>, from: usize, to: usize) {
    match to - from {
        0 => {}
        1 => items.push(PageItem::Page(from)),
        _ => items.push(PageItem::Ellipsis),
    }
}

/// Navigation numbers for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub current: usize,
    pub total_pages: usize,
}

impl PageNav {
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    #[must_use]
    pub const fn previous(&self) -> Option<usize> {
        if self.has_previous() {
            Some(self.current - 1)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn next(&self) -> Option<usize> {
        if self.has_next() {
            Some(self.current + 1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn pages_cover_rows_exactly_once() {
        let rows: Vec<u32> = (0..23).collect();
        let total = total_pages(rows.len(), 5);
        assert_eq!(total, 5);
        let joined: Vec<u32> = (1..=total).flat_map(|p| paginate(&rows, p, 5).rows).collect();
        assert_eq!(joined, rows);
    }

    #[test]
    fn zero_page_size_disables_pagination() {
        let page = paginate(&[1, 2, 3], 4, 0);
        assert_eq!(page.rows, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(total_pages(0, 0), 0);
    }

    #[test]
    fn out_of_range_pages() {
        let page = paginate(&[1, 2, 3], 9, 2);
        assert!(page.rows.is_empty());
        assert_eq!((page.start_index, page.end_index), (3, 3));
        assert_eq!(paginate(&[1, 2, 3], 0, 2).rows, vec![1, 2]);
        assert_eq!(clamp_page(9, 2), 2);
        assert_eq!(clamp_page(0, 0), 1);
    }

    #[test]
    fn resizing_a_huge_page_saturates() {
        let resized = PageState::new(usize::MAX / 2, 10).resized(20);
        assert_eq!(resized.page_size, 20);
        assert_eq!(resized.page, usize::MAX / 20 + 1);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let page = paginate::<u8>(&[], 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn page_items_without_gaps() {
        assert_eq!(page_items(1, 3, 1), vec![Page(1), Page(2), Page(3)]);
        // a single skipped page is shown instead of an ellipsis
        assert_eq!(page_items(4, 5, 1), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
        assert_eq!(page_items(1, 0, 1), Vec::new());
        assert_eq!(page_items(1, 9, 0), vec![Page(1), Ellipsis, Page(9)]);
    }

    #[test]
    fn navigation() {
        let nav = PageNav { current: 1, total_pages: 2 };
        assert_eq!((nav.previous(), nav.next()), (None, Some(2)));
        let nav = PageNav { current: 2, total_pages: 2 };
        assert_eq!((nav.previous(), nav.next()), (Some(1), None));
    }

    #[test]
    fn resizing_keeps_first_row_visible() {
        assert_eq!(PageState::new(1, 10).resized(25), PageState::new(1, 25));
        assert_eq!(PageState::new(5, 10).resized(20), PageState::new(3, 20));
        assert_eq!(PageState::new(5, 10).resized(0), PageState::new(1, 0));
    }
}

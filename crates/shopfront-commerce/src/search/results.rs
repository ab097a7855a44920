//! Listing pages and pagination.

use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items across all pages.
    pub total: usize,
    /// Total number of pages; zero when there is nothing to show.
    pub total_pages: usize,
}

impl Pagination {
    /// Create pagination info. `page` is clamped to at least 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            page: page.max(1),
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Whether there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// The pager is only drawn when there is more than one page.
    pub fn show_pager(&self) -> bool {
        self.total_pages > 1
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.offset() + 1).min(self.total)
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Slice one page out of the full result list.
    pub fn slice(all: Vec<T>, page: usize, per_page: usize) -> Self {
        let pagination = Pagination::new(page, per_page, all.len());
        let items = all
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page)
            .collect();
        Self { items, pagination }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination() {
        let p = Pagination::new(2, 12, 30);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.offset(), 12);
        assert_eq!(p.start_item(), 13);
        assert_eq!(p.end_item(), 24);
        assert!(p.has_next());
        assert!(p.has_prev());
        assert!(p.show_pager());
    }

    #[test]
    fn test_single_page_hides_pager() {
        let p = Pagination::new(1, 12, 12);
        assert_eq!(p.total_pages, 1);
        assert!(!p.show_pager());
        assert!(!p.has_next());

        let empty = Pagination::new(0, 12, 0);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.start_item(), 0);
    }

    #[test]
    fn test_slice() {
        let page = Page::slice((1..=30).collect::<Vec<_>>(), 3, 12);
        assert_eq!(page.items, (25..=30).collect::<Vec<_>>());
        assert_eq!(page.pagination.end_item(), 30);

        let past_end = Page::slice(vec![1, 2, 3], 4, 12);
        assert!(past_end.is_empty());
    }
}

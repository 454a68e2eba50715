//! Client-side filtering and pagination over the fetched snapshot.

use serde::{Deserialize, Serialize};

use crate::catalog::SearchItem;
use crate::search::filter::FilterState;

/// Pagination info for a filtered result set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed), exactly as requested.
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items after filtering.
    pub total: i64,
    /// Total number of pages, never below 1.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Compute pagination for a filtered total.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Slice offset into the filtered list.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Whether the requested page overshoots the filtered set. The caller is
    /// expected to clamp or reset; this type only reports it.
    pub fn is_overshoot(&self) -> bool {
        self.page > self.total_pages
    }

    /// Page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = (self.page - half as i64).max(1);
        let end = (start + max_visible as i64 - 1).min(self.total_pages);
        let start = (end - max_visible as i64 + 1).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, crate::search::filter::DEFAULT_PER_PAGE, 0)
    }
}

/// One rendered page of filtered results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchPage {
    /// The page slice.
    pub items: Vec<SearchItem>,
    /// Pagination over the filtered total.
    pub pagination: Pagination,
}

impl SearchPage {
    /// Check if the page slice is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Apply the active filters to the fetched snapshot and slice out one page.
///
/// Stages, in fixed order: the four facet set-membership filters (each skipped
/// when its selection is empty), the inclusive price range when enabled, then
/// the `[(page-1)*per_page, page*per_page)` slice. A page beyond the end comes
/// back empty rather than erroring — the controller is responsible for
/// clamping after a shrinking filter change.
pub fn filter_and_paginate(items: &[SearchItem], state: &FilterState) -> SearchPage {
    let filtered: Vec<&SearchItem> = items.iter().filter(|item| state.matches(item)).collect();

    let pagination = Pagination::new(state.page, state.per_page, filtered.len() as i64);

    let start = pagination.offset().max(0) as usize;
    let end = (start + state.per_page.max(0) as usize).min(filtered.len());
    let items = if start < filtered.len() {
        filtered[start..end].iter().map(|&item| item.clone()).collect()
    } else {
        Vec::new()
    };

    SearchPage { items, pagination }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filter::FacetDimension;

    fn snapshot(count: usize) -> Vec<SearchItem> {
        (0..count)
            .map(|i| {
                SearchItem::new(format!("id-{i}"), format!("Item {i}"))
                    .with_category(if i % 2 == 0 { "Consoles" } else { "Computers" })
                    .with_prices(100.0 + i as f64, 90.0 + i as f64)
            })
            .collect()
    }

    // === Pagination math ===

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_empty_total_has_one_page() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert!(!p.is_overshoot());
    }

    #[test]
    fn test_pagination_overshoot() {
        let p = Pagination::new(5, 10, 11);
        assert_eq!(p.total_pages, 2);
        assert!(p.is_overshoot());
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);
        let p = Pagination::new(1, 10, 30);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);
    }

    // === Filter + paginate ===

    #[test]
    fn test_identity_with_no_filters() {
        let items = snapshot(5);
        let state = FilterState::default();
        let page = filter_and_paginate(&items, &state);

        assert_eq!(page.items, items);
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_page_len_bounded_by_per_page() {
        let items = snapshot(50);
        let state = FilterState::default().with_pagination(1, 8);
        let page = filter_and_paginate(&items, &state);

        assert_eq!(page.len(), 8);
        assert!(page.items.iter().all(|i| items.contains(i)));
    }

    #[test]
    fn test_last_partial_page() {
        // 11 filtered items, page size 5, page 3 -> 3 pages, final page has 1.
        let items = snapshot(11);
        let state = FilterState::default().with_pagination(3, 5);
        let page = filter_and_paginate(&items, &state);

        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.len(), 1);
        assert_eq!(page.items[0].id, "id-10");
    }

    #[test]
    fn test_overshoot_returns_empty_slice() {
        let items = snapshot(11);
        let state = FilterState::default().with_pagination(9, 5);
        let page = filter_and_paginate(&items, &state);

        assert!(page.is_empty());
        assert_eq!(page.pagination.total, 11);
        assert!(page.pagination.is_overshoot());
    }

    #[test]
    fn test_facet_filter_is_idempotent() {
        let items = snapshot(20);
        let state = FilterState::default().with_category("Consoles");

        let once = filter_and_paginate(&items, &state);
        let twice = filter_and_paginate(&once.items, &state);
        assert_eq!(once.items, twice.items);
    }

    #[test]
    fn test_category_then_price_narrowing() {
        let items = vec![
            SearchItem::new("1", "a").with_category("Consoles").with_prices(100.0, 100.0),
            SearchItem::new("2", "b").with_category("Computers").with_prices(500.0, 500.0),
            SearchItem::new("3", "c").with_category("Consoles").with_prices(900.0, 900.0),
        ];

        let state = FilterState::default().with_category("Consoles");
        assert_eq!(filter_and_paginate(&items, &state).pagination.total, 2);

        let state = state.with_price_range(100.0, 100.0);
        let page = filter_and_paginate(&items, &state);
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.items[0].id, "1");
    }

    #[test]
    fn test_stage_order_is_and_semantics() {
        let items = snapshot(20);
        let mut state = FilterState::default().with_category("Consoles");
        state.toggle(FacetDimension::Condition, "New");

        // No item carries a condition, so the intersection is empty even
        // though the category filter alone matches half the set.
        let page = filter_and_paginate(&items, &state);
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.total_pages, 1);
    }
}

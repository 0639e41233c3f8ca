//! In-memory pagination for list pages.
//!
//! Pages are 1-based. Every operation clamps instead of failing: a page past
//! the end falls back to the last page, a page size outside the configured
//! bounds is pulled into range.

/// Allowed range for rows per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeBounds {
    pub min: usize,
    pub max: usize,
}

impl PageSizeBounds {
    pub fn new(min: usize, max: usize) -> Self {
        let min = min.max(1);
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn clamp(&self, rows_per_page: usize) -> usize {
        rows_per_page.clamp(self.min, self.max)
    }
}

impl Default for PageSizeBounds {
    fn default() -> Self {
        Self::new(5, 100)
    }
}

/// Number of pages needed for `total_rows`; never less than one.
pub fn total_pages_for(total_rows: usize, rows_per_page: usize) -> usize {
    let size = rows_per_page.max(1);
    total_rows.div_ceil(size).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub rows_per_page: usize,
    pub total_rows: usize,
    pub total_pages: usize,
}

impl PaginationState {
    pub fn new(rows_per_page: usize, bounds: PageSizeBounds) -> Self {
        Self {
            current_page: 1,
            rows_per_page: bounds.clamp(rows_per_page),
            total_rows: 0,
            total_pages: 1,
        }
    }

    /// Recomputes the page count for a new collection size and pulls the
    /// current page back into range.
    pub fn with_total_rows(mut self, total_rows: usize) -> Self {
        self.total_rows = total_rows;
        self.recalc();
        self
    }

    /// Stores the requested page as-is (at least 1). It is clamped against
    /// the real collection by [`paginate`] or [`Self::with_total_rows`], so a
    /// request made before the rows are known is not lost.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Applies a new page size and returns to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize, bounds: PageSizeBounds) {
        self.rows_per_page = bounds.clamp(rows_per_page);
        self.current_page = 1;
        self.recalc();
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Half-open index range of the current page within the collection.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.rows_per_page);
        let end = start.saturating_add(self.rows_per_page).min(self.total_rows);
        start.min(end)..end
    }

    fn recalc(&mut self) {
        self.rows_per_page = self.rows_per_page.max(1);
        self.total_pages = total_pages_for(self.total_rows, self.rows_per_page);
        self.current_page = self.current_page.clamp(1, self.total_pages);
    }
}

/// One rendered page plus the numbers the pagination controls show.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub rows_per_page: usize,
}

impl<T> Page<T> {
    pub fn state(&self) -> PaginationState {
        PaginationState {
            current_page: self.current_page,
            rows_per_page: self.rows_per_page,
            total_rows: self.total_rows,
            total_pages: self.total_pages,
        }
    }
}

/// Slices the page `state.current_page` out of `collection`.
///
/// `total_rows` is always taken from `collection`, so a filtered or
/// shrunken list immediately yields a valid page.
pub fn paginate<T: Clone>(collection: &[T], state: &PaginationState) -> Page<T> {
    let state = state.with_total_rows(collection.len());
    Page {
        items: collection[state.range()].to_vec(),
        current_page: state.current_page,
        total_pages: state.total_pages,
        total_rows: state.total_rows,
        rows_per_page: state.rows_per_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_total_pages_for() {
        assert_eq!(total_pages_for(0, 10), 1);
        assert_eq!(total_pages_for(10, 10), 1);
        assert_eq!(total_pages_for(11, 10), 2);
        assert_eq!(total_pages_for(23, 10), 3);
        assert_eq!(total_pages_for(5, 0), 5);
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let data = rows(23);
        let mut state = PaginationState::new(10, PageSizeBounds::default());
        state.go_to_page(5);

        let page = paginate(&data, &state);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.items, vec![21, 22, 23]);
    }

    #[test]
    fn test_pages_partition_collection() {
        let data = rows(47);
        for size in [1, 5, 7, 10, 47, 100] {
            let bounds = PageSizeBounds::new(1, 100);
            let mut state = PaginationState::new(size, bounds).with_total_rows(data.len());
            let mut seen = Vec::new();
            for p in 1..=state.total_pages {
                state.go_to_page(p);
                seen.extend(paginate(&data, &state).items);
            }
            assert_eq!(seen, data, "page size {size}");
        }
    }

    #[test]
    fn test_empty_collection_has_one_empty_page() {
        let data: Vec<usize> = Vec::new();
        let mut state = PaginationState::new(10, PageSizeBounds::default());
        state.go_to_page(4);
        let page = paginate(&data, &state);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let data = rows(12);
        let mut state = PaginationState::new(5, PageSizeBounds::default()).with_total_rows(12);
        state.go_to_page(0);
        assert_eq!(state.current_page, 1);
        assert_eq!(paginate(&data, &state).items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_requested_page_is_clamped_against_the_collection() {
        let mut state = PaginationState::new(10, PageSizeBounds::default());
        state.go_to_page(5);
        assert_eq!(state.current_page, 5);

        let clamped = state.with_total_rows(23);
        assert_eq!(clamped.current_page, 3);
        assert_eq!(clamped.range(), 20..23);
    }

    #[test]
    fn test_range_of_hand_built_state_does_not_underflow() {
        let state = PaginationState {
            current_page: 0,
            rows_per_page: 10,
            total_rows: 4,
            total_pages: 1,
        };
        assert_eq!(state.range(), 0..4);

        let past_end = PaginationState {
            current_page: usize::MAX,
            ..state
        };
        assert!(past_end.range().is_empty());
    }

    #[test]
    fn test_rows_per_page_change_on_last_page_reclamps() {
        let bounds = PageSizeBounds::new(5, 50);
        let mut state = PaginationState::new(5, bounds).with_total_rows(23);
        state.go_to_page(5);
        assert_eq!(state.current_page, 5);

        state.set_rows_per_page(20, bounds);
        assert_eq!(state.total_pages, 2);
        assert!(state.current_page >= 1 && state.current_page <= state.total_pages);
    }

    #[test]
    fn test_rows_per_page_is_clamped_to_bounds() {
        let bounds = PageSizeBounds::new(5, 50);
        let mut state = PaginationState::new(10, bounds).with_total_rows(200);
        state.set_rows_per_page(500, bounds);
        assert_eq!(state.rows_per_page, 50);
        state.set_rows_per_page(0, bounds);
        assert_eq!(state.rows_per_page, 5);
        assert_eq!(state.total_pages, 40);
    }

    #[test]
    fn test_shrinking_collection_falls_back_to_new_last_page() {
        let mut state = PaginationState::new(10, PageSizeBounds::default()).with_total_rows(30);
        state.go_to_page(3);
        let page = paginate(&rows(14), &state);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.items, vec![11, 12, 13, 14]);
    }

    #[test]
    fn test_previous_next_flags() {
        let mut state = PaginationState::new(10, PageSizeBounds::default()).with_total_rows(25);
        assert!(!state.has_previous());
        assert!(state.has_next());
        state.go_to_page(3);
        assert!(state.has_previous());
        assert!(!state.has_next());
    }

    #[test]
    fn test_bounds_normalise() {
        let bounds = PageSizeBounds::new(0, 0);
        assert_eq!(bounds, PageSizeBounds { min: 1, max: 1 });
    }
}

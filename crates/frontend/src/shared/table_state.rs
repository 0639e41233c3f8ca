//! List page state: filter → sort → paginate.
//!
//! [`TableView::compute`] is the pure pipeline; [`use_table`] wraps it in
//! signals so a page only has to feed it the fetched rows and wire the
//! header and pagination callbacks.
//!
//! ```rust,ignore
//! let table = use_table::<Product>(SortConfig::by("name", SortDirection::Ascending));
//! table.set_items(fetched);
//! // <For each=move || table.paginated_data.get() ... />
//! ```

use leptos::prelude::*;

use super::config::config;
use super::list_utils::{filter_list, sort_items, Searchable, SortConfig, SortDirection, Sortable};
use super::pagination::{paginate, Page, PageSizeBounds, PaginationState};

/// Result of one pass through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot<T> {
    /// Filtered and sorted rows, all pages.
    pub sorted: Vec<T>,
    pub page: Page<T>,
}

pub struct TableView;

impl TableView {
    pub fn compute<T>(
        items: &[T],
        search: &str,
        sort: &SortConfig,
        pagination: &PaginationState,
    ) -> TableSnapshot<T>
    where
        T: Searchable + Sortable + Clone,
    {
        let filtered = filter_list(items, search);
        let sorted = sort_items(&filtered, sort);
        let page = paginate(&sorted, pagination);
        TableSnapshot { sorted, page }
    }
}

/// Signals and handlers backing one list page.
pub struct TableController<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub search: RwSignal<String>,
    pub sort_config: RwSignal<SortConfig>,
    pub pagination: RwSignal<PaginationState>,
    pub bounds: PageSizeBounds,
    /// Filtered and sorted rows across all pages.
    pub sorted_data: Signal<Vec<T>>,
    /// Rows of the current page.
    pub paginated_data: Signal<Vec<T>>,
    pub current_page: Signal<usize>,
    pub total_pages: Signal<usize>,
    pub total_rows: Signal<usize>,
    pub rows_per_page: Signal<usize>,
}

impl<T: Send + Sync + 'static> Clone for TableController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TableController<T> {}

impl<T> TableController<T>
where
    T: Searchable + Sortable + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn set_items(&self, items: Vec<T>) {
        self.items.set(items);
    }

    /// Removes rows matching `pred` locally, e.g. after a successful delete.
    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) {
        self.items.update(|items| items.retain(|item| !pred(item)));
    }

    pub fn set_search(&self, query: String) {
        self.search.set(query);
        self.pagination.update(|p| p.go_to_page(1));
    }

    pub fn handle_sort(&self, key: &str) {
        self.sort_config.update(|c| c.handle_sort(key));
    }

    /// Tracked: re-renders the header when the sort changes.
    pub fn sort_direction(&self, key: &str) -> SortDirection {
        self.sort_config.with(|c| c.direction_for(key))
    }

    pub fn clear_sort(&self) {
        self.sort_config.update(|c| c.clear());
    }

    pub fn is_sorted(&self) -> bool {
        self.sort_config.with(|c| c.key().is_some())
    }

    pub fn handle_page_change(&self, page: usize) {
        let total_rows = self.total_rows.get_untracked();
        self.pagination.update(|p| {
            p.go_to_page(page);
            *p = p.with_total_rows(total_rows);
        });
    }

    pub fn handle_rows_per_page_change(&self, rows_per_page: usize) {
        let bounds = self.bounds;
        let total_rows = self.total_rows.get_untracked();
        self.pagination.update(|p| {
            *p = p.with_total_rows(total_rows);
            p.set_rows_per_page(rows_per_page, bounds);
        });
    }
}

/// Creates the table state with page size bounds and default rows per page
/// from [`config`].
pub fn use_table<T>(initial_sort: SortConfig) -> TableController<T>
where
    T: Searchable + Sortable + Clone + PartialEq + Send + Sync + 'static,
{
    let table = &config().table;
    use_table_with(initial_sort, table.bounds(), table.default_rows_per_page)
}

pub fn use_table_with<T>(
    initial_sort: SortConfig,
    bounds: PageSizeBounds,
    default_rows_per_page: usize,
) -> TableController<T>
where
    T: Searchable + Sortable + Clone + PartialEq + Send + Sync + 'static,
{
    let items: RwSignal<Vec<T>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let sort_config = RwSignal::new(initial_sort);
    let pagination = RwSignal::new(PaginationState::new(default_rows_per_page, bounds));

    // The stored page may point past the end after rows shrink; the snapshot
    // clamps it, and every handler re-clamps before writing.
    let snapshot = Memo::new(move |_| {
        items.with(|rows| {
            search.with(|q| {
                sort_config.with(|s| pagination.with(|p| TableView::compute(rows, q, s, p)))
            })
        })
    });

    TableController {
        items,
        search,
        sort_config,
        pagination,
        bounds,
        sorted_data: Signal::derive(move || snapshot.with(|s| s.sorted.clone())),
        paginated_data: Signal::derive(move || snapshot.with(|s| s.page.items.clone())),
        current_page: Signal::derive(move || snapshot.with(|s| s.page.current_page)),
        total_pages: Signal::derive(move || snapshot.with(|s| s.page.total_pages)),
        total_rows: Signal::derive(move || snapshot.with(|s| s.page.total_rows)),
        rows_per_page: Signal::derive(move || snapshot.with(|s| s.page.rows_per_page)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::contains_ci;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, PartialEq)]
    struct Row(Value);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0["name"].as_str().unwrap_or_default(), filter)
        }
    }

    impl Sortable for Row {
        fn sort_value(&self, key: &str) -> crate::shared::list_utils::SortValue {
            self.0.sort_value(key)
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row(json!({"name": format!("item {i:02}"), "rank": (n - i) as i64})))
            .collect()
    }

    #[test]
    fn test_pipeline_filters_sorts_then_pages() {
        let data = rows(23);
        let bounds = PageSizeBounds::new(5, 50);
        let mut state = PaginationState::new(10, bounds);
        state.go_to_page(5);

        let snap = TableView::compute(
            &data,
            "",
            &SortConfig::by("rank", SortDirection::Ascending),
            &state,
        );
        assert_eq!(snap.sorted.len(), 23);
        assert_eq!(snap.page.current_page, 3);
        assert_eq!(snap.page.total_pages, 3);
        // rank ascending means names descending; last page holds items 03..01
        let names: Vec<_> = snap.page.items.iter().map(|r| r.0["name"].clone()).collect();
        assert_eq!(names, vec![json!("item 03"), json!("item 02"), json!("item 01")]);
    }

    #[test]
    fn test_filter_shrinks_total_rows() {
        let data = rows(23);
        let state = PaginationState::new(10, PageSizeBounds::default());
        let snap = TableView::compute(&data, "item 1", &SortConfig::default(), &state);
        assert_eq!(snap.page.total_rows, 10);
        assert_eq!(snap.page.total_pages, 1);
    }

    #[test]
    fn test_deleting_last_page_rows_falls_back_to_new_last_page() {
        let owner = Owner::new();
        owner.set();

        let table = use_table_with::<Row>(SortConfig::default(), PageSizeBounds::new(5, 50), 10);
        table.set_items(rows(23));
        table.handle_page_change(3);
        assert_eq!(table.paginated_data.get_untracked().len(), 3);

        table.remove_where(|r| r.0["rank"].as_i64().unwrap_or_default() < 3);
        assert_eq!(table.total_rows.get_untracked(), 20);
        assert_eq!(table.total_pages.get_untracked(), 2);
        assert_eq!(table.current_page.get_untracked(), 2);
        let names: Vec<_> = table
            .paginated_data
            .get_untracked()
            .iter()
            .map(|r| r.0["name"].clone())
            .collect();
        assert_eq!(names.first(), Some(&json!("item 11")));
        assert_eq!(names.last(), Some(&json!("item 20")));
    }

    #[test]
    fn test_controller_handlers() {
        let owner = Owner::new();
        owner.set();

        let table = use_table_with::<Row>(SortConfig::default(), PageSizeBounds::new(5, 50), 10);
        table.set_items(rows(23));
        assert_eq!(table.total_rows.get_untracked(), 23);
        assert_eq!(table.total_pages.get_untracked(), 3);

        table.handle_page_change(9);
        assert_eq!(table.current_page.get_untracked(), 3);
        assert_eq!(table.paginated_data.get_untracked().len(), 3);

        table.handle_rows_per_page_change(500);
        assert_eq!(table.rows_per_page.get_untracked(), 50);
        assert_eq!(table.current_page.get_untracked(), 1);
        assert_eq!(table.total_pages.get_untracked(), 1);

        table.handle_sort("rank");
        table.handle_sort("rank");
        assert_eq!(
            table.sort_config.get_untracked().direction_for("rank"),
            SortDirection::Descending
        );
        table.handle_sort("rank");
        assert_eq!(table.sort_config.get_untracked(), SortConfig::default());

        table.handle_sort("name");
        assert!(table.is_sorted());
        table.clear_sort();
        assert!(!table.is_sorted());

        table.set_search("item 2".into());
        assert_eq!(table.total_rows.get_untracked(), 4);

        table.remove_where(|r| r.0["name"] == "item 20");
        assert_eq!(table.total_rows.get_untracked(), 3);
    }
}

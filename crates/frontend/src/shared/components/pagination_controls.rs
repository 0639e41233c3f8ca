use crate::shared::config::config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// `first-last of total` label for the current page, `0 of 0` when empty.
pub fn range_label(current_page: usize, rows_per_page: usize, total_rows: usize) -> String {
    if total_rows == 0 {
        return "0 of 0".to_string();
    }
    let start = (current_page.max(1) - 1) * rows_per_page + 1;
    let end = (start + rows_per_page - 1).min(total_rows);
    format!("{}-{} of {}", start, end, total_rows)
}

/// Page navigation and page size selector. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_rows: Signal<usize>,
    #[prop(into)] rows_per_page: Signal<usize>,
    on_page_change: Callback<usize>,
    on_rows_per_page_change: Callback<usize>,
    /// Defaults to `[table] page_size_options`.
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| config().table.page_size_options());
    let on_first = move || current_page.get() <= 1;
    let on_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=on_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=on_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "Page {} / {} ({})",
                    current_page.get(),
                    total_pages.get().max(1),
                    range_label(current_page.get(), rows_per_page.get(), total_rows.get()),
                )}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=on_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get())
                disabled=on_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                title="Rows per page"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse() {
                        on_rows_per_page_change.run(val);
                    }
                }
                prop:value=move || rows_per_page.get().to_string()
            >
                {page_size_opts.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || rows_per_page.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(1, 10, 23), "1-10 of 23");
        assert_eq!(range_label(3, 10, 23), "21-23 of 23");
        assert_eq!(range_label(1, 10, 0), "0 of 0");
    }
}

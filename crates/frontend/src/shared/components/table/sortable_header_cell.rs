//! Clickable table header cycling its column through the tri-state sort.
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_key="price"
//!     direction=Signal::derive(move || table.sort_direction("price"))
//!     on_sort=Callback::new(move |key: String| table.handle_sort(&key))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{sort_class, sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    /// Field name or dot path passed to `on_sort`.
    #[prop(into)]
    sort_key: String,
    /// Current direction of this column.
    #[prop(into)]
    direction: Signal<SortDirection>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
    /// `"left"` or `"right"` (numeric columns).
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };
    let aria_sort = move || match direction.get() {
        SortDirection::Ascending => "ascending",
        SortDirection::Descending => "descending",
        SortDirection::None => "none",
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width attr:aria-sort=aria_sort>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_key.clone())
            >
                {label}
                <span class=move || sort_class(direction.get())>
                    {move || sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

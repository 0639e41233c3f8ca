use leptos::prelude::*;
use thaw::*;

/// Title row of a list page: title, row count badge and action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Rows after filtering.
    #[prop(into)]
    count: Signal<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge>{move || count.get().to_string()}</Badge>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}

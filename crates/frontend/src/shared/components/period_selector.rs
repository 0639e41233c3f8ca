use leptos::prelude::*;

use crate::shared::date_utils::{current_period, format_period, shift_period};
use crate::shared::icons::icon;

/// Payroll period filter: previous/next month stepping, a jump to the
/// current month, and "all periods" (`None`).
#[component]
pub fn PeriodSelector(value: RwSignal<Option<String>>) -> impl IntoView {
    let step = move |months: i32| {
        let base = value.get_untracked().unwrap_or_else(current_period);
        if let Some(next) = shift_period(&base, months) {
            value.set(Some(next));
        }
    };

    view! {
        <div class="period-selector">
            <button class="period-selector__btn" title="Previous month" on:click=move |_| step(-1)>
                {icon("chevron-left")}
            </button>
            <span class="period-selector__label">
                {move || value.get().map(|p| format_period(&p)).unwrap_or_else(|| "All periods".to_string())}
            </span>
            <button class="period-selector__btn" title="Next month" on:click=move |_| step(1)>
                {icon("chevron-right")}
            </button>
            <button
                class="period-selector__btn period-selector__btn--text"
                title="Current month"
                on:click=move |_| value.set(Some(current_period()))
            >
                "This month"
            </button>
            <Show when=move || value.with(Option::is_some)>
                <button
                    class="period-selector__btn period-selector__btn--text"
                    title="Show all periods"
                    on:click=move |_| value.set(None)
                >
                    "All"
                </button>
            </Show>
        </div>
    }
}

use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Edit and delete buttons at the end of a row.
#[component]
pub fn RowActions(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <TableCell>
            <div class="table__row-actions">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_edit.run(())
                    attr:title="Edit"
                >
                    {icon("edit")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_delete.run(())
                    attr:title="Delete"
                >
                    {icon("trash")}
                </Button>
            </div>
        </TableCell>
    }
}

/// Two-state badge (published/draft, active/inactive).
#[component]
pub fn StatusBadge(
    active: bool,
    on_label: &'static str,
    off_label: &'static str,
) -> impl IntoView {
    let (class, label) = if active {
        ("badge badge--success", on_label)
    } else {
        ("badge badge--neutral", off_label)
    };
    view! { <span class=class>{label}</span> }
}

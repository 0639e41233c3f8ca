use leptos::prelude::*;

/// Summary row under a table body. `children` are the `<td>` cells.
///
/// ```rust,ignore
/// <TableTotalsRow>
///     <td colspan="4">{format!("Entries: {}", count)}</td>
///     <td class="table__cell--right">{format_money(total)}</td>
/// </TableTotalsRow>
/// ```
#[component]
pub fn TableTotalsRow(
    children: Children,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let row_class = if class.is_empty() {
        "table__totals-row".to_string()
    } else {
        format!("table__totals-row {}", class)
    };

    view! { <tr class=row_class>{children()}</tr> }
}

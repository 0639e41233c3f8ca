//! Right-aligned money cell.
//!
//! ```rust,ignore
//! <TableCellMoney value=entry.net_amount() bold=true />
//! <TableCellMoney value=product.price currency="$" />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    value: f64,
    /// Prefix such as `"$"`; empty by default.
    #[prop(optional)]
    currency: &'static str,
    /// Negative values in red.
    #[prop(optional, default = true)]
    color_by_sign: bool,
    #[prop(optional)] bold: bool,
) -> impl IntoView {
    let text = if currency.is_empty() {
        format_money(value)
    } else {
        format!("{}{}", currency, format_money(value))
    };

    let mut style = String::from("text-align: right; font-variant-numeric: tabular-nums;");
    if color_by_sign && value < 0.0 {
        style.push_str(" color: var(--color-error);");
    }
    if bold {
        style.push_str(" font-weight: 600;");
    }

    view! {
        <TableCell>
            <TableCellLayout>
                <span style=style>{text}</span>
            </TableCellLayout>
        </TableCell>
    }
}

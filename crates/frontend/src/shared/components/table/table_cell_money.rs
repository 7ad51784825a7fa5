//! Table cell for amounts
//!
//! ```text
//! <TableCellMoney value=amount />
//! <TableCellMoney value=remainder color_by_sign=true bold=true />
//! ```

use super::number_format::format_amount;
use leptos::prelude::*;
use thaw::*;

pub const CURRENCY: &str = "افغانی";

#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Appends the currency name
    #[prop(optional, default = false)]
    show_currency: bool,

    /// Positive values green, negative red
    #[prop(optional, default = false)]
    color_by_sign: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) if show_currency => format!("{} {}", format_amount(v), CURRENCY),
        Some(v) => format_amount(v),
        None => "—".to_string(),
    };

    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            match value.get() {
                Some(v) if v > 0.0 => styles.push("color: var(--color-success-700)"),
                Some(v) if v < 0.0 => styles.push("color: var(--color-error-700)"),
                _ => {}
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="table__cell--number">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}

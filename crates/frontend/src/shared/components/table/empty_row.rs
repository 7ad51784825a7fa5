use leptos::prelude::*;
use thaw::*;

/// Single row spanning the table, shown when a list has no records
#[component]
pub fn EmptyRow(colspan: u32) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell attr:colspan=colspan.to_string()>
                <div class="table__empty">"هیچ رکوردی یافت نشد"</div>
            </TableCell>
        </TableRow>
    }
}

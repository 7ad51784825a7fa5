use contracts::domain::a005_salary::aggregate::{Salary, SalaryDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_salary::api;
use crate::domain::a005_salary::ui::details::SalaryDetails;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{EmptyRow, TableCellMoney};
use crate::shared::icons::icon;

#[component]
pub fn SalaryListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Salary>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<SalaryDto>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_create_new = move || {
        editing.set(None);
        show_form.update(|open| *open = !*open);
    };

    let handle_edit = move |dto: SalaryDto| {
        editing.set(Some(dto));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(Salary::element_name()) {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        show_form.set(false);
        editing.set(None);
        fetch();
    });
    let on_cancel = Callback::new(move |_| {
        show_form.set(false);
        editing.set(None);
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title=Salary::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " ثبت معاش"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <SalaryDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"کارمند"</TableHeaderCell>
                        <TableHeaderCell>"سال"</TableHeaderCell>
                        <TableHeaderCell>"ماه"</TableHeaderCell>
                        <TableHeaderCell>"مقدار معاش"</TableHeaderCell>
                        <TableHeaderCell>"پرداخت شده"</TableHeaderCell>
                        <TableHeaderCell>"باقی مانده"</TableHeaderCell>
                        <TableHeaderCell>"توضیحات"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=8 /> }.into_any();
                        }
                        rows.into_iter().map(|salary| {
                            let id = salary.base.id.as_string();
                            let dto = salary.to_dto();
                            view! {
                                <TableRow>
                                    <TableCell>{salary.staff_name.clone().unwrap_or_else(|| "-".to_string())}</TableCell>
                                    <TableCell>{salary.year.clone()}</TableCell>
                                    <TableCell>{salary.month.display_name()}</TableCell>
                                    <TableCellMoney value=Some(salary.amount) />
                                    <TableCellMoney value=Some(salary.paid) />
                                    <TableCellMoney value=Some(salary.remainder) color_by_sign=true bold=true />
                                    <TableCell>{salary.description.clone()}</TableCell>
                                    <TableCell>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_edit(dto.clone())
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_delete(id.clone())
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

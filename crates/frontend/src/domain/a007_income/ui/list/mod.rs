use contracts::domain::a007_income::aggregate::{Income, IncomeDto, IncomeList};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_income::api;
use crate::domain::a007_income::ui::details::IncomeDetails;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_money, EmptyRow, TableCellMoney};
use crate::shared::icons::icon;

#[component]
pub fn IncomeListPage() -> impl IntoView {
    let (list, set_list) = signal(IncomeList::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<IncomeDto>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => {
                    set_list.set(v);
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

    let handle_edit = move |dto: IncomeDto| {
        editing.set(Some(dto));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(Income::element_name()) {
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

    let subtitle = Signal::derive(move || {
        Some(format!("مجموع عواید: {}", format_money(list.with(|l| l.total_amount))))
    });

    view! {
        <div class="page">
            <PageHeader title=Income::list_name() subtitle=subtitle>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " ثبت عاید"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <IncomeDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"منبع عاید"</TableHeaderCell>
                        <TableHeaderCell>"مبلغ"</TableHeaderCell>
                        <TableHeaderCell>"دریافت کننده"</TableHeaderCell>
                        <TableHeaderCell>"پرداخت کننده"</TableHeaderCell>
                        <TableHeaderCell>"سال"</TableHeaderCell>
                        <TableHeaderCell>"ماه"</TableHeaderCell>
                        <TableHeaderCell>"توضیحات"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = list.with(|l| l.items.clone());
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=8 /> }.into_any();
                        }
                        rows.into_iter().map(|item| {
                            let id = item.base.id.as_string();
                            let dto = item.to_dto();
                            view! {
                                <TableRow>
                                    <TableCell>{item.source.clone()}</TableCell>
                                    <TableCellMoney value=Some(item.amount) />
                                    <TableCell>{item.receiver.clone()}</TableCell>
                                    <TableCell>{item.consumer.clone().unwrap_or_default()}</TableCell>
                                    <TableCell>{item.year.clone()}</TableCell>
                                    <TableCell>{item.month.display_name()}</TableCell>
                                    <TableCell>{item.description.clone()}</TableCell>
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

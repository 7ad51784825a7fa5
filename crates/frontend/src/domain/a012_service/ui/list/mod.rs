use contracts::domain::a012_service::aggregate::{ServiceSheet, ServiceSheetView};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a012_service::api;
use crate::domain::a012_service::ui::details::ServiceSheetDetails;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::period_select::{floor_name, month_name};
use crate::shared::components::table::{EmptyRow, TableCellMoney};
use crate::shared::icons::icon;

#[component]
pub fn ServiceSheetListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ServiceSheetView>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<ServiceSheetView>);

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

    let handle_edit = move |sheet: ServiceSheetView| {
        editing.set(Some(sheet));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(ServiceSheet::element_name()) {
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
            <PageHeader title=ServiceSheet::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " خدمات ماه جدید"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <ServiceSheetDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"سال"</TableHeaderCell>
                        <TableHeaderCell>"ماه"</TableHeaderCell>
                        <TableHeaderCell>"منزل"</TableHeaderCell>
                        <TableHeaderCell>"دوکانداران"</TableHeaderCell>
                        <TableHeaderCell>"مجموع خدمات"</TableHeaderCell>
                        <TableHeaderCell>"دریافت شده"</TableHeaderCell>
                        <TableHeaderCell>"باقی مانده"</TableHeaderCell>
                        <TableHeaderCell>"تایید"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=9 /> }.into_any();
                        }
                        rows.into_iter().map(|sheet| {
                            let id = sheet.id.clone();
                            let edit = sheet.clone();
                            let tenants = sheet.customers.len();
                            let (approval, color) = if sheet.is_approved {
                                ("تایید شده", BadgeColor::Success)
                            } else {
                                ("در انتظار", BadgeColor::Warning)
                            };
                            view! {
                                <TableRow>
                                    <TableCell>{sheet.year}</TableCell>
                                    <TableCell>{month_name(sheet.month)}</TableCell>
                                    <TableCell>{floor_name(sheet.floor)}</TableCell>
                                    <TableCell>{tenants}</TableCell>
                                    <TableCellMoney value=Some(sheet.total) bold=true />
                                    <TableCellMoney value=Some(sheet.total_taken) />
                                    <TableCellMoney value=Some(sheet.total_remainder) color_by_sign=true />
                                    <TableCell><Badge color=color>{approval}</Badge></TableCell>
                                    <TableCell>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_edit(edit.clone())
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

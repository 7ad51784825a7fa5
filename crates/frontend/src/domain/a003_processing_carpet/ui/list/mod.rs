use contracts::domain::a003_processing_carpet::aggregate::{ProcessingCarpet, ProcessingCarpetDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_processing_carpet::api;
use crate::domain::a003_processing_carpet::ui::details::ProcessingCarpetDetails;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{EmptyRow, TableCellMoney};
use crate::shared::icons::icon;

#[component]
pub fn ProcessingCarpetListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ProcessingCarpet>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<ProcessingCarpetDto>);

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

    let handle_edit = move |dto: ProcessingCarpetDto| {
        editing.set(Some(dto));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(ProcessingCarpet::element_name()) {
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
            <PageHeader title=ProcessingCarpet::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " قالین جدید"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <ProcessingCarpetDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"کارگر"</TableHeaderCell>
                        <TableHeaderCell>"طول"</TableHeaderCell>
                        <TableHeaderCell>"عرض"</TableHeaderCell>
                        <TableHeaderCell>"نقشه"</TableHeaderCell>
                        <TableHeaderCell>"مواد"</TableHeaderCell>
                        <TableHeaderCell>"پرداخت ها"</TableHeaderCell>
                        <TableHeaderCell>"مجموع پرداخت"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=8 /> }.into_any();
                        }
                        rows.into_iter().map(|carpet| {
                            let id = carpet.base.id.as_string();
                            let dto = carpet.to_dto();
                            let worker = carpet.worker_name.clone().unwrap_or_else(|| "-".to_string());
                            let materials = carpet.materials.join("، ");
                            let payment_count = carpet.payments.len();
                            let total_paid = carpet.total_paid();
                            view! {
                                <TableRow>
                                    <TableCell>{worker}</TableCell>
                                    <TableCell>{carpet.length}</TableCell>
                                    <TableCell>{carpet.width}</TableCell>
                                    <TableCell>{carpet.map}</TableCell>
                                    <TableCell>{materials}</TableCell>
                                    <TableCell>{payment_count}</TableCell>
                                    <TableCellMoney value=Some(total_paid) bold=true />
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

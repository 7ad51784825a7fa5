use contracts::domain::a010_agreement::aggregate::{Agreement, AgreementDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a010_agreement::api;
use crate::domain::a010_agreement::ui::details::AgreementDetails;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{EmptyRow, TableCellMoney};
use crate::shared::icons::icon;

#[component]
pub fn AgreementListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Agreement>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<AgreementDto>);

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

    let handle_edit = move |dto: AgreementDto| {
        editing.set(Some(dto));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(Agreement::element_name()) {
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
            <PageHeader title=Agreement::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " قرارداد جدید"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <AgreementDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"دوکاندار"</TableHeaderCell>
                        <TableHeaderCell>"دوکان ها"</TableHeaderCell>
                        <TableHeaderCell>"منزل"</TableHeaderCell>
                        <TableHeaderCell>"پیش پرداخت"</TableHeaderCell>
                        <TableHeaderCell>"کرایه"</TableHeaderCell>
                        <TableHeaderCell>"خدمات"</TableHeaderCell>
                        <TableHeaderCell>"دریافت شده"</TableHeaderCell>
                        <TableHeaderCell>"وضعیت"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=9 /> }.into_any();
                        }
                        rows.into_iter().map(|agreement| {
                            let id = agreement.base.id.as_string();
                            let dto = agreement.to_dto();
                            let customer = agreement.customer_name.clone().unwrap_or_else(|| "-".to_string());
                            let shops = agreement.shops_label();
                            let floor = agreement.floor.display_name();
                            let (advance, rent, service, taken) =
                                (agreement.advance, agreement.rent, agreement.service, agreement.taken);
                            let status = agreement.status.display_name();
                            let status_color = if agreement.is_active() {
                                BadgeColor::Success
                            } else {
                                BadgeColor::Danger
                            };
                            view! {
                                <TableRow>
                                    <TableCell>{customer}</TableCell>
                                    <TableCell>{shops}</TableCell>
                                    <TableCell>{floor}</TableCell>
                                    <TableCellMoney value=Some(advance) />
                                    <TableCellMoney value=Some(rent) />
                                    <TableCellMoney value=Some(service) />
                                    <TableCellMoney value=Some(taken) />
                                    <TableCell>
                                        <Badge color=status_color>{status}</Badge>
                                    </TableCell>
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

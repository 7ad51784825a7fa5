use contracts::domain::a004_staff::aggregate::{Staff, StaffDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_staff::api;
use crate::domain::a004_staff::ui::details::StaffDetails;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{EmptyRow, TableCellMoney};
use crate::shared::icons::icon;

#[component]
pub fn StaffListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Staff>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<StaffDto>);

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

    let handle_edit = move |dto: StaffDto| {
        editing.set(Some(dto));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(Staff::element_name()) {
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
            <PageHeader title=Staff::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " کارمند جدید"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <StaffDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"نام"</TableHeaderCell>
                        <TableHeaderCell>"نام پدر"</TableHeaderCell>
                        <TableHeaderCell>"وظیفه"</TableHeaderCell>
                        <TableHeaderCell>"شماره تماس"</TableHeaderCell>
                        <TableHeaderCell>"معاش اصلی"</TableHeaderCell>
                        <TableHeaderCell>"تاریخ استخدام"</TableHeaderCell>
                        <TableHeaderCell>"وضعیت"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=8 /> }.into_any();
                        }
                        rows.into_iter().map(|staff| {
                            let id = staff.base.id.as_string();
                            let dto = staff.to_dto();
                            view! {
                                <TableRow>
                                    <TableCell>{staff.name.clone()}</TableCell>
                                    <TableCell>{staff.father_name.clone()}</TableCell>
                                    <TableCell>{staff.position.clone()}</TableCell>
                                    <TableCell>{staff.phone.clone()}</TableCell>
                                    <TableCellMoney value=Some(staff.base_salary) />
                                    <TableCell>{staff.hire_date.clone().unwrap_or_default()}</TableCell>
                                    <TableCell>
                                        {if staff.is_active {
                                            view! { <Badge color=BadgeColor::Success>"فعال"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge color=BadgeColor::Danger>"غیر فعال"</Badge> }.into_any()
                                        }}
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

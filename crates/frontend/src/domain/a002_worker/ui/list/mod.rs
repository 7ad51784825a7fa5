use contracts::domain::a002_worker::aggregate::{Worker, WorkerDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_worker::api;
use crate::domain::a002_worker::ui::details::WorkerDetails;
use crate::shared::api_utils::media_link;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::EmptyRow;
use crate::shared::icons::icon;

#[component]
pub fn WorkerListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Worker>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<WorkerDto>);

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

    let handle_edit = move |dto: WorkerDto| {
        editing.set(Some(dto));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(Worker::element_name()) {
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
            <PageHeader title=Worker::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " کارگر جدید"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <WorkerDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"نام"</TableHeaderCell>
                        <TableHeaderCell>"نام پدر"</TableHeaderCell>
                        <TableHeaderCell>"سکونت دایمی"</TableHeaderCell>
                        <TableHeaderCell>"سکونت فعلی"</TableHeaderCell>
                        <TableHeaderCell>"تذکره"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=6 /> }.into_any();
                        }
                        rows.into_iter().map(|worker| {
                            let id = worker.base.id.as_string();
                            let dto = worker.to_dto();
                            view! {
                                <TableRow>
                                    <TableCell>{worker.name.clone()}</TableCell>
                                    <TableCell>{worker.father_name.clone()}</TableCell>
                                    <TableCell>{worker.permanent_residency.clone()}</TableCell>
                                    <TableCell>{worker.current_residency.clone()}</TableCell>
                                    <TableCell>
                                        {worker.nic_file.clone().map(|file| view! {
                                            <a href=media_link(&file) target="_blank" rel="noopener">
                                                {icon("image")}
                                            </a>
                                        })}
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

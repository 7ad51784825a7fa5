use contracts::domain::a009_customer::aggregate::{Customer, CustomerDto, CustomerView};
use contracts::shared::attachment::AttachmentType;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a009_customer::api;
use crate::domain::a009_customer::ui::details::CustomerDetails;
use crate::shared::api_utils::media_link;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::EmptyRow;
use crate::shared::icons::icon;

fn attachment_icon(kind: AttachmentType) -> &'static str {
    match kind {
        AttachmentType::Image => "image",
        AttachmentType::Pdf | AttachmentType::File => "file",
    }
}

fn attachment_link(file: Option<String>, kind: Option<AttachmentType>) -> impl IntoView {
    file.map(|file| {
        let kind = kind.unwrap_or_else(|| AttachmentType::from_file_name(&file));
        view! {
            <a href=media_link(&file) target="_blank" rel="noopener" title=kind.as_str()>
                {icon(attachment_icon(kind))}
            </a>
        }
    })
}

#[component]
pub fn CustomerListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CustomerView>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<CustomerDto>);

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

    let handle_edit = move |dto: CustomerDto| {
        editing.set(Some(dto));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(Customer::element_name()) {
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
            <PageHeader title=Customer::list_name()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " دوکاندار جدید"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <CustomerDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"نام"</TableHeaderCell>
                        <TableHeaderCell>"نام پدر"</TableHeaderCell>
                        <TableHeaderCell>"شماره تماس"</TableHeaderCell>
                        <TableHeaderCell>"مالک ملک"</TableHeaderCell>
                        <TableHeaderCell>"نمبر تذکره"</TableHeaderCell>
                        <TableHeaderCell>"آدرس"</TableHeaderCell>
                        <TableHeaderCell>"ضمیمه"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=8 /> }.into_any();
                        }
                        rows.into_iter().map(|customer| {
                            let id = customer.id.clone();
                            let dto = customer.to_dto();
                            view! {
                                <TableRow>
                                    <TableCell>{customer.name.clone()}</TableCell>
                                    <TableCell>{customer.father_name.clone()}</TableCell>
                                    <TableCell>{customer.phone_number.clone()}</TableCell>
                                    <TableCell>{customer.rental_owner.clone()}</TableCell>
                                    <TableCell>{customer.nic.clone()}</TableCell>
                                    <TableCell>{customer.address.clone()}</TableCell>
                                    <TableCell>
                                        {attachment_link(customer.attachment.clone(), customer.attachment_type)}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_icon() {
        assert_eq!(attachment_icon(AttachmentType::Image), "image");
        assert_eq!(attachment_icon(AttachmentType::Pdf), "file");
    }
}

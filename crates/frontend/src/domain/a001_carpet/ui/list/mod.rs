use contracts::domain::a001_carpet::aggregate::{Carpet, CarpetDirection, CarpetDto};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_carpet::api;
use crate::domain::a001_carpet::ui::details::CarpetDetails;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_amount, format_money, EmptyRow, TableCellMoney};
use crate::shared::icons::icon;

fn page_title(direction: CarpetDirection) -> &'static str {
    match direction {
        CarpetDirection::Import => "قالین های وارد شده",
        CarpetDirection::Export => "قالین های ارسالی",
    }
}

/// Carpets of one direction; the two sidebar pages differ only in `direction`
#[component]
pub fn CarpetListPage(direction: CarpetDirection) -> impl IntoView {
    let (items, set_items) = signal::<Vec<Carpet>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<CarpetDto>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all(direction).await {
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

    let handle_edit = move |dto: CarpetDto| {
        editing.set(Some(dto));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(Carpet::element_name()) {
            return;
        }
        spawn_local(async move {
            match api::delete(direction, &id).await {
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
        items.with(|list| {
            let total: f64 = list.iter().map(|c| c.price).sum();
            Some(format!("{} قالین، ارزش مجموعی {}", list.len(), format_money(total)))
        })
    });

    view! {
        <div class="page">
            <PageHeader title=page_title(direction) subtitle=subtitle>
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
                    <CarpetDetails
                        direction=direction
                        initial=editing.get()
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"منبع"</TableHeaderCell>
                        <TableHeaderCell>"توضیحات"</TableHeaderCell>
                        <TableHeaderCell>"کیفیت"</TableHeaderCell>
                        <TableHeaderCell>"طول"</TableHeaderCell>
                        <TableHeaderCell>"عرض"</TableHeaderCell>
                        <TableHeaderCell>"نرخ"</TableHeaderCell>
                        <TableHeaderCell>"قیمت"</TableHeaderCell>
                        <TableHeaderCell>"وزن"</TableHeaderCell>
                        <TableHeaderCell>"درجه"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=10 /> }.into_any();
                        }
                        rows.into_iter().map(|carpet| {
                            let id = carpet.base.id.as_string();
                            let dto = CarpetDto::from(&carpet);
                            view! {
                                <TableRow>
                                    <TableCell>{carpet.source.display_name()}</TableCell>
                                    <TableCell>{carpet.description.clone()}</TableCell>
                                    <TableCell>{carpet.quality.clone()}</TableCell>
                                    <TableCell>{format_amount(carpet.length)}</TableCell>
                                    <TableCell>{format_amount(carpet.width)}</TableCell>
                                    <TableCellMoney value=Some(carpet.rate) />
                                    <TableCellMoney value=Some(carpet.price) bold=true />
                                    <TableCell>{carpet.weight.clone()}</TableCell>
                                    <TableCell>{carpet.degree.clone().unwrap_or_default()}</TableCell>
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
    fn test_page_titles_differ() {
        assert_ne!(
            page_title(CarpetDirection::Import),
            page_title(CarpetDirection::Export)
        );
    }
}

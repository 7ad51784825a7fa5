use contracts::domain::a013_unit::aggregate::{Unit, UnitDto, UnitStatus};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a013_unit::api;
use crate::domain::a013_unit::ui::details::UnitDetails;
use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{EmptyRow, TableCellMoney};
use crate::shared::icons::icon;

/// `(occupied, vacant)` counts for the page subtitle
fn occupancy(units: &[UnitDto]) -> (usize, usize) {
    let occupied = units.iter().filter(|u| u.status == UnitStatus::Occupied).count();
    let vacant = units.iter().filter(|u| u.status == UnitStatus::Vacant).count();
    (occupied, vacant)
}

#[component]
pub fn UnitListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<UnitDto>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<UnitDto>);

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

    let handle_edit = move |dto: UnitDto| {
        editing.set(Some(dto));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete(Unit::element_name()) {
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
        let (occupied, vacant) = items.with(|units| occupancy(units));
        Some(format!("اشغال شده: {}    خالی: {}", occupied, vacant))
    });

    view! {
        <div class="page">
            <PageHeader title=Unit::list_name() subtitle=subtitle>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " ثبت واحد"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <UnitDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"نمبر واحد"</TableHeaderCell>
                        <TableHeaderCell>"ساکن"</TableHeaderCell>
                        <TableHeaderCell>"وضعیت"</TableHeaderCell>
                        <TableHeaderCell>"فیس خدمات"</TableHeaderCell>
                        <TableHeaderCell>"میتر آب"</TableHeaderCell>
                        <TableHeaderCell>"میتر برق"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=7 /> }.into_any();
                        }
                        rows.into_iter().map(|unit| {
                            let id = unit.id.clone().unwrap_or_default();
                            let edit = unit.clone();
                            let resident = if unit.customer_name.is_empty() {
                                "-".to_string()
                            } else {
                                format!("{} ولد {}", unit.customer_name, unit.customer_father_name)
                            };
                            let color = match unit.status {
                                UnitStatus::Occupied => BadgeColor::Success,
                                UnitStatus::Vacant => BadgeColor::Warning,
                                UnitStatus::Maintenance => BadgeColor::Danger,
                            };
                            view! {
                                <TableRow>
                                    <TableCell>{unit.unit_number}</TableCell>
                                    <TableCell>{resident}</TableCell>
                                    <TableCell><Badge color=color>{unit.status.display_name()}</Badge></TableCell>
                                    <TableCellMoney value=Some(unit.service_charge) />
                                    <TableCell>{unit.current_water_reading}</TableCell>
                                    <TableCell>{unit.current_electricity_reading}</TableCell>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_counts() {
        let unit = |status| UnitDto {
            status,
            ..Default::default()
        };
        let units = [
            unit(UnitStatus::Occupied),
            unit(UnitStatus::Occupied),
            unit(UnitStatus::Vacant),
            unit(UnitStatus::Maintenance),
        ];
        assert_eq!(occupancy(&units), (2, 1));
        assert_eq!(occupancy(&[]), (0, 0));
    }
}

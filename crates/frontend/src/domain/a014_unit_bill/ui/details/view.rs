use contracts::domain::a014_unit_bill::aggregate::UnitBillView;
use leptos::prelude::*;
use thaw::*;

use super::view_model::UnitBillDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::period_select::MonthSelect;
use crate::shared::components::table::{format_money, EmptyRow};
use crate::shared::icons::icon;

#[component]
pub fn UnitBillDetails(
    initial: Option<UnitBillView>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = UnitBillDetailsVm::new(initial);

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش بل واحدها" } else { "ثبت بل ماه" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"سال" <span class="form__required">"*"</span></label>
                        <Input value=vm.year placeholder="1403" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"ماه"</label>
                        <MonthSelect value=vm.month />
                    </div>
                </div>

                <Show
                    when=move || vm.is_edit_mode()
                    fallback=|| view! {
                        <div class="form__hint">
                            "واحد های اشغال شده با میتر های فعلی شان اضافه می شوند"
                        </div>
                    }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"واحد"</TableHeaderCell>
                                <TableHeaderCell>"ساکن"</TableHeaderCell>
                                <TableHeaderCell>"خدمات"</TableHeaderCell>
                                <TableHeaderCell>"آب قبلی"</TableHeaderCell>
                                <TableHeaderCell>"آب فعلی"</TableHeaderCell>
                                <TableHeaderCell>"قیمت آب"</TableHeaderCell>
                                <TableHeaderCell>"برق قبلی"</TableHeaderCell>
                                <TableHeaderCell>"برق فعلی"</TableHeaderCell>
                                <TableHeaderCell>"قیمت برق"</TableHeaderCell>
                                <TableHeaderCell>"دریافت شده"</TableHeaderCell>
                                <TableHeaderCell>"مجموع"</TableHeaderCell>
                                <TableHeaderCell>"باقی مانده"</TableHeaderCell>
                                <TableHeaderCell>"توضیحات"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = vm.rows.get();
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=13 /> }.into_any();
                                }
                                rows.into_iter().map(|row| {
                                    let totals = row.clone();
                                    let rest = row.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{row.unit_number.clone()}</TableCell>
                                            <TableCell>{row.resident.clone()}</TableCell>
                                            <TableCell><Input value=row.service_charge /></TableCell>
                                            <TableCell><Input value=row.previous_water_reading /></TableCell>
                                            <TableCell><Input value=row.current_water_reading /></TableCell>
                                            <TableCell><Input value=row.water_price /></TableCell>
                                            <TableCell><Input value=row.previous_electricity_reading /></TableCell>
                                            <TableCell><Input value=row.current_electricity_reading /></TableCell>
                                            <TableCell><Input value=row.electricity_price /></TableCell>
                                            <TableCell><Input value=row.taken /></TableCell>
                                            <TableCell class="table__cell--number">
                                                {move || totals.amounts().map(|(t, _)| format_money(t)).unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
                                            <TableCell class="table__cell--number">
                                                {move || rest.amounts().map(|(_, r)| format_money(r)).unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
                                            <TableCell><Input value=row.description /></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                    <div class="rent-totals">
                        {move || {
                            let (total, rest) = vm.totals();
                            format!("مجموع: {}    باقی مانده: {}", format_money(total), format_money(rest))
                        }}
                    </div>
                </Show>

                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=vm.saving
                    >
                        {icon("save")}
                        " ذخیره"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        {icon("cancel")}
                        " لغو"
                    </Button>
                </Space>
            </Card>
        </div>
    }
}

use contracts::domain::a012_service::aggregate::ServiceSheetView;
use leptos::prelude::*;
use thaw::*;

use super::view_model::ServiceSheetDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::period_select::{FloorSelect, MonthSelect};
use crate::shared::components::table::{format_money, EmptyRow};
use crate::shared::icons::icon;

#[component]
pub fn ServiceSheetDetails(
    initial: Option<ServiceSheetView>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ServiceSheetDetailsVm::new(initial);

    Effect::watch(
        move || vm.is_approved.get(),
        move |approved, _, _| {
            if *approved {
                vm.approve_rows();
            }
        },
        false,
    );

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش خدمات" } else { "ثبت خدمات ماه" }}
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
                    <div class="form__group">
                        <label class="form__label">"منزل"</label>
                        <FloorSelect value=vm.floor />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=vm.is_approved label="تایید شده" />
                    </div>
                </div>

                <Show
                    when=move || vm.is_edit_mode()
                    fallback=|| view! {
                        <div class="form__hint">
                            "دوکانداران قرارداد های فعال این منزل با فیس خدمات شان اضافه می شوند"
                        </div>
                    }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"دوکاندار"</TableHeaderCell>
                                <TableHeaderCell>"دوکان"</TableHeaderCell>
                                <TableHeaderCell>"خدمات"</TableHeaderCell>
                                <TableHeaderCell>"دریافت شده"</TableHeaderCell>
                                <TableHeaderCell>"باقی مانده"</TableHeaderCell>
                                <TableHeaderCell>"تایید"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = vm.rows.get();
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=6 /> }.into_any();
                                }
                                rows.into_iter().map(|row| {
                                    let line = row.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{row.customer_name.clone()}</TableCell>
                                            <TableCell>{row.shop.clone()}</TableCell>
                                            <TableCell><Input value=row.service /></TableCell>
                                            <TableCell><Input value=row.taken /></TableCell>
                                            <TableCell class="table__cell--number">
                                                {move || line.remainder().map(format_money).unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
                                            <TableCell><Checkbox checked=row.is_approved /></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                    <div class="rent-totals">
                        {move || {
                            let (total, taken, rest) = vm.totals();
                            format!(
                                "مجموع خدمات: {}    دریافت شده: {}    باقی مانده: {}",
                                format_money(total),
                                format_money(taken),
                                format_money(rest)
                            )
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

use contracts::domain::a011_rent::aggregate::RentView;
use leptos::prelude::*;
use thaw::*;

use super::view_model::RentDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::period_select::{FloorSelect, MonthSelect};
use crate::shared::components::table::{format_money, EmptyRow};
use crate::shared::icons::icon;

#[component]
pub fn RentDetails(
    initial: Option<RentView>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = RentDetailsVm::new(initial);

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش کرایه" } else { "ثبت کرایه ماه" }}
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
                </div>

                <Show
                    when=move || vm.is_edit_mode()
                    fallback=|| view! {
                        <div class="form__hint">
                            "دوکانداران قرارداد های فعال این منزل خودکار اضافه می شوند"
                        </div>
                    }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"دوکاندار"</TableHeaderCell>
                                <TableHeaderCell>"دوکان"</TableHeaderCell>
                                <TableHeaderCell>"کرایه"</TableHeaderCell>
                                <TableHeaderCell>"دریافت شده"</TableHeaderCell>
                                <TableHeaderCell>"باقی مانده"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = vm.rows.get();
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=5 /> }.into_any();
                                }
                                rows.into_iter().map(|row| {
                                    let line = row.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{row.customer_name.clone()}</TableCell>
                                            <TableCell>{row.shop.clone()}</TableCell>
                                            <TableCell><Input value=row.rent /></TableCell>
                                            <TableCell><Input value=row.taken /></TableCell>
                                            <TableCell class="table__cell--number">
                                                {move || line.remainder().map(format_money).unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
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
                                "مجموع کرایه: {}    دریافت شده: {}    باقی مانده: {}",
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

use contracts::domain::a005_salary::aggregate::SalaryDto;
use leptos::prelude::*;
use thaw::*;

use super::view_model::SalaryDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::period_select::MonthSelect;
use crate::shared::components::ref_select::RefSelect;
use crate::shared::components::table::format_money;
use crate::shared::icons::icon;

#[component]
pub fn SalaryDetails(
    initial: Option<SalaryDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SalaryDetailsVm::new(initial);
    vm.load_staff();

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش معاش" } else { "ثبت معاش" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"کارمند" <span class="form__required">"*"</span></label>
                        <RefSelect value=vm.staff_id options=vm.staff_options placeholder="انتخاب کارمند" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"سال" <span class="form__required">"*"</span></label>
                        <Input value=vm.year placeholder="1403" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"ماه"</label>
                        <MonthSelect value=vm.month />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"مقدار معاش"</label>
                        <Input value=vm.amount placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"پرداخت شده"</label>
                        <Input value=vm.paid placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"باقی مانده"</label>
                        <div class="form__readonly">
                            {move || vm.remainder().map(format_money).unwrap_or_else(|| "-".to_string())}
                        </div>
                    </div>
                    <div class="form__group form__group--wide">
                        <label class="form__label">"توضیحات"</label>
                        <Textarea value=vm.description />
                    </div>
                </div>

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

use contracts::domain::a007_income::aggregate::IncomeDto;
use leptos::prelude::*;
use thaw::*;

use super::view_model::IncomeDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::period_select::MonthSelect;
use crate::shared::icons::icon;

#[component]
pub fn IncomeDetails(
    initial: Option<IncomeDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = IncomeDetailsVm::new(initial);

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش عاید" } else { "ثبت عاید" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"منبع عاید" <span class="form__required">"*"</span></label>
                        <Input value=vm.source />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"مبلغ"</label>
                        <Input value=vm.amount placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"دریافت کننده"</label>
                        <Input value=vm.receiver />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"پرداخت کننده"</label>
                        <Input value=vm.consumer />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"سال" <span class="form__required">"*"</span></label>
                        <Input value=vm.year placeholder="1403" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"ماه"</label>
                        <MonthSelect value=vm.month />
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

use contracts::domain::a008_finance::aggregate::FinanceDto;
use leptos::prelude::*;
use thaw::*;

use super::view_model::FinanceDetailsVm;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;

#[component]
pub fn FinanceDetails(
    initial: Option<FinanceDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FinanceDetailsVm::new(initial);

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش برداشت" } else { "ثبت برداشت" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"از طرف" <span class="form__required">"*"</span></label>
                        <Input value=vm.from_person />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"به" <span class="form__required">"*"</span></label>
                        <Input value=vm.to_person />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"مبلغ"</label>
                        <Input value=vm.amount placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"تاریخ" <span class="form__required">"*"</span></label>
                        <DateInput value=vm.issue_date />
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

use contracts::domain::a010_agreement::aggregate::{AgreementDto, AgreementStatus};
use leptos::prelude::*;
use thaw::*;

use super::view_model::AgreementDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::period_select::FloorSelect;
use crate::shared::components::ref_select::RefSelect;
use crate::shared::icons::icon;

#[component]
pub fn AgreementDetails(
    initial: Option<AgreementDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AgreementDetailsVm::new(initial);
    vm.load_customers();

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش قرارداد" } else { "قرارداد جدید" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"دوکاندار" <span class="form__required">"*"</span></label>
                        <RefSelect value=vm.customer_id options=vm.customer_options placeholder="انتخاب دوکاندار" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"وضعیت"</label>
                        <Select value=vm.status>
                            {[AgreementStatus::Active, AgreementStatus::InActive].into_iter().map(|s| view! {
                                <option value=s.as_str()>{s.display_name()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"منزل"</label>
                        <FloorSelect value=vm.floor />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"نمبر دوکان ها" <span class="form__required">"*"</span></label>
                        <Input value=vm.shops placeholder="12، 13" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"پیش پرداخت"</label>
                        <Input value=vm.advance placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"کرایه ماهوار"</label>
                        <Input value=vm.rent placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"خدمات ماهوار"</label>
                        <Input value=vm.service placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"دریافت شده"</label>
                        <Input value=vm.taken placeholder="0" />
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

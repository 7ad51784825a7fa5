use contracts::domain::a004_staff::aggregate::StaffDto;
use leptos::prelude::*;
use thaw::*;

use super::view_model::StaffDetailsVm;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;

#[component]
pub fn StaffDetails(
    initial: Option<StaffDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = StaffDetailsVm::new(initial);

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش کارمند" } else { "کارمند جدید" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"نام" <span class="form__required">"*"</span></label>
                        <Input value=vm.name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"نام پدر"</label>
                        <Input value=vm.father_name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"وظیفه" <span class="form__required">"*"</span></label>
                        <Input value=vm.position />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"شماره تماس"</label>
                        <Input value=vm.phone />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"معاش اصلی"</label>
                        <Input value=vm.base_salary placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"تاریخ استخدام"</label>
                        <DateInput value=vm.hire_date />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=vm.is_active label="فعال" />
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

use contracts::domain::a009_customer::aggregate::CustomerDto;
use leptos::prelude::*;
use thaw::*;

use super::view_model::CustomerDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::file_input::FileInput;
use crate::shared::icons::icon;

#[component]
pub fn CustomerDetails(
    initial: Option<CustomerDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsVm::new(initial);

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش دوکاندار" } else { "دوکاندار جدید" }}
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
                        <label class="form__label">"شماره تماس" <span class="form__required">"*"</span></label>
                        <Input value=vm.phone_number />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"مالک ملک"</label>
                        <Input value=vm.rental_owner />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"نمبر تذکره" <span class="form__required">"*"</span></label>
                        <Input value=vm.nic />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"ضمیمه"</label>
                        <FileInput file=vm.attachment />
                    </div>
                    <div class="form__group form__group--wide">
                        <label class="form__label">"آدرس"</label>
                        <Textarea value=vm.address />
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

use contracts::domain::a002_worker::aggregate::WorkerDto;
use leptos::prelude::*;
use thaw::*;

use super::view_model::WorkerDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::file_input::FileInput;
use crate::shared::icons::icon;

#[component]
pub fn WorkerDetails(
    initial: Option<WorkerDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = WorkerDetailsVm::new(initial);

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش کارگر" } else { "کارگر جدید" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"نام" <span class="form__required">"*"</span></label>
                        <Input value=vm.name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"نام پدر" <span class="form__required">"*"</span></label>
                        <Input value=vm.father_name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"سکونت دایمی" <span class="form__required">"*"</span></label>
                        <Input value=vm.permanent_residency />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"سکونت فعلی" <span class="form__required">"*"</span></label>
                        <Input value=vm.current_residency />
                    </div>
                    <div class="form__group">
                        <label class="form__label">
                            "تذکره"
                            {move || (!vm.is_edit_mode()).then(|| view! { <span class="form__required">"*"</span> })}
                        </label>
                        <FileInput file=vm.nic />
                        <Show when=move || vm.is_edit_mode()>
                            <div class="form__hint">"بدون انتخاب فایل، تذکره قبلی باقی می ماند"</div>
                        </Show>
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

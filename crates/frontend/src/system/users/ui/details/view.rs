use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{UserDetailsVm, ROLE_OPTIONS};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;

#[component]
pub fn UserDetails(
    initial: Option<User>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = UserDetailsVm::new(initial);

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش کاربر" } else { "کاربر جدید" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"نام کاربری" <span class="form__required">"*"</span></label>
                        <Input value=vm.username disabled=Signal::derive(move || vm.is_edit_mode()) />
                    </div>
                    <div class="form__group">
                        <label class="form__label">
                            {move || if vm.is_edit_mode() { "رمز عبور جدید" } else { "رمز عبور" }}
                        </label>
                        <Input value=vm.password input_type=InputType::Password />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"نام کامل"</label>
                        <Input value=vm.full_name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"ایمیل"</label>
                        <Input value=vm.email />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"نقش"</label>
                        <Select value=vm.role>
                            {ROLE_OPTIONS.iter().map(|(role, label)| view! {
                                <option value=role.to_string()>{*label}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <Show when=move || vm.is_edit_mode()>
                        <div class="form__group">
                            <Checkbox checked=vm.is_active label="فعال" />
                        </div>
                    </Show>
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

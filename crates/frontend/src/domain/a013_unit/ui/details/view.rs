use contracts::domain::a013_unit::aggregate::{UnitDto, UnitStatus};
use leptos::prelude::*;
use thaw::*;

use super::view_model::UnitDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;

#[component]
pub fn UnitDetails(
    initial: Option<UnitDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = UnitDetailsVm::new(initial);

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش واحد" } else { "ثبت واحد" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"نمبر واحد" <span class="form__required">"*"</span></label>
                        <Input value=vm.unit_number />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"وضعیت"</label>
                        <Select value=vm.status>
                            {UnitStatus::all().into_iter().map(|s| view! {
                                <option value=s.as_str()>{s.display_name()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <Show when=move || vm.has_occupant()>
                        <div class="form__group">
                            <label class="form__label">"نام ساکن"</label>
                            <Input value=vm.customer_name />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"نام پدر"</label>
                            <Input value=vm.customer_father_name />
                        </div>
                    </Show>
                    <div class="form__group">
                        <label class="form__label">"فیس خدمات"</label>
                        <Input value=vm.service_charge placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"میتر آب"</label>
                        <Input value=vm.current_water_reading placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"میتر برق"</label>
                        <Input value=vm.current_electricity_reading placeholder="0" />
                    </div>
                    <div class="form__group form__group--wide">
                        <label class="form__label">"خدمات"</label>
                        <Textarea value=vm.services_description />
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

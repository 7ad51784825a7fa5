use contracts::domain::a003_processing_carpet::aggregate::ProcessingCarpetDto;
use leptos::prelude::*;
use thaw::*;

use super::view_model::ProcessingCarpetDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::ref_select::RefSelect;
use crate::shared::components::table::format_money;
use crate::shared::icons::icon;

#[component]
pub fn ProcessingCarpetDetails(
    initial: Option<ProcessingCarpetDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProcessingCarpetDetailsVm::new(initial);
    vm.load_workers();

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">
                    {move || if vm.is_edit_mode() { "ویرایش قالین در حال بافت" } else { "قالین جدید روی دار" }}
                </h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"کارگر" <span class="form__required">"*"</span></label>
                        <RefSelect value=vm.worker_id options=vm.worker_options placeholder="انتخاب کارگر" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"طول" <span class="form__required">"*"</span></label>
                        <Input value=vm.length />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"عرض" <span class="form__required">"*"</span></label>
                        <Input value=vm.width />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"نقشه"</label>
                        <Input value=vm.map />
                    </div>
                    <div class="form__group form__group--wide">
                        <label class="form__label">"مواد"</label>
                        <Input value=vm.materials placeholder="پشم، ابریشم، رنگ" />
                    </div>
                    <div class="form__group form__group--wide">
                        <label class="form__label">"پرداخت ها"</label>
                        <Input value=vm.payments placeholder="5000 + 2500" />
                        <div class="form__hint">
                            "مجموع: "
                            {move || vm.total_paid().map(format_money).unwrap_or_else(|| "-".to_string())}
                        </div>
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

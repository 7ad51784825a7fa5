use contracts::domain::a001_carpet::aggregate::{CarpetDirection, CarpetDto, CarpetSource};
use leptos::prelude::*;
use thaw::*;

use super::view_model::CarpetDetailsVm;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::table::format_money;
use crate::shared::icons::icon;

#[component]
pub fn CarpetDetails(
    direction: CarpetDirection,
    initial: Option<CarpetDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CarpetDetailsVm::new(direction, initial);
    let title = move || match (vm.is_edit_mode(), direction) {
        (true, _) => "ویرایش قالین",
        (false, CarpetDirection::Import) => "ثبت قالین وارد شده",
        (false, CarpetDirection::Export) => "ثبت قالین ارسالی",
    };

    view! {
        <div class="details-form">
            <Card>
                <h2 class="details-form__title">{title}</h2>

                <ErrorBanner error=vm.error />

                <div class="form__grid">
                    <div class="form__group">
                        <label class="form__label">"منبع" <span class="form__required">"*"</span></label>
                        <Select value=vm.source>
                            <option value="">"انتخاب منبع"</option>
                            {CarpetSource::all().into_iter().map(|s| view! {
                                <option value=s.display_name()>{s.display_name()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"کیفیت" <span class="form__required">"*"</span></label>
                        <Input value=vm.quality />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"طول (متر)"</label>
                        <Input value=vm.length placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"عرض (متر)"</label>
                        <Input value=vm.width placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"نرخ فی متر"</label>
                        <Input value=vm.rate placeholder="0" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"قیمت"</label>
                        <div class="form__readonly">
                            {move || vm.price_preview().map(format_money).unwrap_or_else(|| "-".to_string())}
                        </div>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"وزن" <span class="form__required">"*"</span></label>
                        <Input value=vm.weight />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"درجه"</label>
                        <Input value=vm.degree />
                    </div>
                    <div class="form__group form__group--wide">
                        <label class="form__label">"توضیحات" <span class="form__required">"*"</span></label>
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

use leptos::prelude::*;

/// Select box over `(id, label)` pairs loaded from another resource.
///
/// Options arrive after the form is built, so every option tracks its own
/// `selected` state instead of relying on the select's value.
#[component]
pub fn RefSelect(
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            <option value="" prop:selected=move || value.with(|v| v.is_empty())>{placeholder}</option>
            {move || options.get().into_iter().map(|(id, label)| {
                let option_id = id.clone();
                view! {
                    <option value=id prop:selected=move || value.with(|v| *v == option_id)>{label}</option>
                }
            }).collect_view()}
        </select>
    }
}

use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string
#[component]
pub fn DateInput(value: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

/// File picker; keeps the chosen file in a local signal until the form is sent
#[component]
pub fn FileInput(
    file: RwSignal<Option<File>, LocalStorage>,
    #[prop(optional, into)] accept: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="file"
            class="form__input"
            accept=accept.unwrap_or_else(|| "image/*,.pdf".to_string())
            on:change=move |ev| {
                let input = event_target::<HtmlInputElement>(&ev);
                let chosen = input.files().and_then(|list| list.get(0));
                if let Some(f) = chosen.as_ref() {
                    log::debug!("file chosen: {} ({} bytes)", f.name(), f.size());
                }
                file.set(chosen);
            }
        />
        {move || file.with(|f| f.as_ref().map(|f| view! {
            <div class="form__hint">{f.name()}</div>
        }))}
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Request or validation error of a page; hidden while `error` is `None`
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="warning-box" role="alert" style="padding: 12px; margin: 12px 0; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px; display: flex; align-items: center; gap: 8px;">
                <span style="color: var(--color-error);">{icon("alert")}</span>
                <span style="color: var(--color-error);">{e}</span>
            </div>
        })}
    }
}

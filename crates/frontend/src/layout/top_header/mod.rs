//! Top bar: sidebar toggle, application title and the signed-in user.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::access::AccessTier;
use leptos::prelude::*;

fn tier_label(tier: AccessTier) -> &'static str {
    match tier {
        AccessTier::Full => "مدیر",
        AccessTier::Restricted => "محدود",
        AccessTier::SignOutOnly => "بدون دسترسی",
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_label = move || {
        auth_state.with(|s| match s.user_info.as_ref() {
            Some(u) => format!("{} ({})", u.display_name(), tier_label(u.tier())),
            None => "مهمان".to_string(),
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "پنهان کردن منو" } else { "نمایش منو" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"مدیریت شرکت قالین"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_label}</span>
                </div>
            </div>
        </div>
    }
}

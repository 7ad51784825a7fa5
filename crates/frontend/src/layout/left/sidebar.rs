//! Sidebar menu, filtered by the role of the signed-in user

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use contracts::system::access::{accessible_items, SIGNOUT};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let confirm_signout = RwSignal::new(false);

    let items = move || {
        let role = auth_state.with(|s| s.user_info.as_ref().map(|u| u.role));
        accessible_items(role)
    };

    let on_signout_confirmed = Callback::new(move |_| {
        confirm_signout.set(false);
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    });

    view! {
        <div class="app-sidebar__content">
            {move || items().into_iter().map(|item| {
                let key = item.key;
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.is_selected(key)
                        on:click=move |_| {
                            if key == SIGNOUT {
                                confirm_signout.set(true);
                            } else {
                                ctx.select(key);
                            }
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>

        <ConfirmDialog
            open=confirm_signout
            title="خروج"
            message="آیا می‌خواهید از سیستم خارج شوید؟"
            confirm_label="بلی، خارج شو"
            on_confirm=on_signout_confirmed
        />
    }
}

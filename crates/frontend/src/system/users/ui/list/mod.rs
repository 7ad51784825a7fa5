use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::confirm_dialog::confirm_delete;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::EmptyRow;
use crate::shared::icons::icon;
use crate::system::users::api;
use crate::system::users::ui::details::{role_label, UserDetails};

/// RFC 3339 timestamp as `YYYY-MM-DD HH:MM`; anything else is cut at `T`
fn short_date(value: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(value) {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => value.split('T').next().unwrap_or(value).to_string(),
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let (users, set_users) = signal::<Vec<User>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<User>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(v) => {
                    set_users.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_create_new = move || {
        editing.set(None);
        show_form.update(|open| *open = !*open);
    };

    let handle_edit = move |user: User| {
        editing.set(Some(user));
        show_form.set(true);
    };

    let handle_delete = move |id: String| {
        if !confirm_delete("کاربر") {
            return;
        }
        spawn_local(async move {
            match api::delete_user(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        show_form.set(false);
        editing.set(None);
        fetch();
    });
    let on_cancel = Callback::new(move |_| {
        show_form.set(false);
        editing.set(None);
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="کاربران">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " کاربر جدید"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=move || show_form.get()>
                {move || view! {
                    <UserDetails initial=editing.get() on_saved=on_saved on_cancel=on_cancel />
                }}
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"نام کاربری"</TableHeaderCell>
                        <TableHeaderCell>"نام کامل"</TableHeaderCell>
                        <TableHeaderCell>"ایمیل"</TableHeaderCell>
                        <TableHeaderCell>"نقش"</TableHeaderCell>
                        <TableHeaderCell>"وضعیت"</TableHeaderCell>
                        <TableHeaderCell>"آخرین ورود"</TableHeaderCell>
                        <TableHeaderCell>"تاریخ ایجاد"</TableHeaderCell>
                        <TableHeaderCell>"عملیات"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = users.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=8 /> }.into_any();
                        }
                        rows.into_iter().map(|user| {
                            let id = user.id.clone();
                            let edit = user.clone();
                            view! {
                                <TableRow>
                                    <TableCell>{user.username.clone()}</TableCell>
                                    <TableCell>{user.full_name.clone().unwrap_or_default()}</TableCell>
                                    <TableCell>{user.email.clone().unwrap_or_default()}</TableCell>
                                    <TableCell>{role_label(user.role)}</TableCell>
                                    <TableCell>
                                        {if user.is_active {
                                            view! { <Badge color=BadgeColor::Success>"فعال"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge color=BadgeColor::Danger>"غیر فعال"</Badge> }.into_any()
                                        }}
                                    </TableCell>
                                    <TableCell>
                                        {user.last_login_at.as_deref().map(short_date).unwrap_or_else(|| "-".to_string())}
                                    </TableCell>
                                    <TableCell>{short_date(&user.created_at)}</TableCell>
                                    <TableCell>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_edit(edit.clone())
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_delete(id.clone())
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-05-01T10:20:30+00:00"), "2024-05-01 10:20");
        assert_eq!(short_date("2024-05-01"), "2024-05-01");
    }
}

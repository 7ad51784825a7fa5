use contracts::dashboards::d400_summary::dto::SummaryResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_summary::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Home page: record counts and money totals.
///
/// The restricted tier only sees the money figures, matching the pages it
/// can open.
#[component]
pub fn SummaryDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (data, set_data) = signal(None::<SummaryResponse>);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        spawn_local(async move {
            match api::get_summary().await {
                Ok(summary) => {
                    set_data.set(Some(summary));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load summary: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    load();

    let count = move |pick: fn(&SummaryResponse) -> u64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(|d| format_number_int(pick(d) as f64))))
    };
    let money = move |pick: fn(&SummaryResponse) -> f64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(|d| format_money(pick(d)))))
    };
    let balance_tone = Signal::derive(move || data.with(|d| d.as_ref().map(|d| StatTone::by_sign(d.balance))));
    let show_counts = move || auth_state.with(|s| s.tier().can_manage_users());

    let greeting = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| format!("خوش آمدید، {}", u.display_name()))
        })
    };

    view! {
        <div class="page">
            <PageHeader title="صفحه اصلی" subtitle=Signal::derive(greeting)>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    " تازه سازی"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <Show when=show_counts>
                <div class="stat-grid">
                    <StatCard label="قالین های وارد شده" icon_name="import" value=count(|d| d.imported_carpets) />
                    <StatCard label="قالین های ارسالی" icon_name="export" value=count(|d| d.exported_carpets) />
                    <StatCard label="کارگران" icon_name="workers" value=count(|d| d.workers) />
                    <StatCard label="کارمندان فعال" icon_name="staff" value=count(|d| d.staff) />
                    <StatCard label="قرارداد های فعال" icon_name="agreement" value=count(|d| d.active_agreements) />
                </div>
            </Show>

            <div class="stat-grid">
                <StatCard label="مجموع عواید" icon_name="income" value=money(|d| d.total_income) />
                <StatCard label="مجموع مصارف" icon_name="expense" value=money(|d| d.total_expenditure) />
                <StatCard label="بیلانس" icon_name="finance" value=money(|d| d.balance) tone=balance_tone />
                <StatCard label="معاشات باقی مانده" icon_name="salary" value=money(|d| d.salaries_remainder) />
            </div>
        </div>
    }
}

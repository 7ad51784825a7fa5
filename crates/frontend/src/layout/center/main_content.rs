//! Page switch: maps the selected key to a page component.

use crate::dashboards::d400_summary::ui::SummaryDashboard;
use crate::domain::a001_carpet::ui::list::CarpetListPage;
use crate::domain::a002_worker::ui::list::WorkerListPage;
use crate::domain::a003_processing_carpet::ui::list::ProcessingCarpetListPage;
use crate::domain::a004_staff::ui::list::StaffListPage;
use crate::domain::a005_salary::ui::list::SalaryListPage;
use crate::domain::a006_expenditure::ui::list::ExpenditureListPage;
use crate::domain::a007_income::ui::list::IncomeListPage;
use crate::domain::a008_finance::ui::list::FinanceListPage;
use crate::domain::a009_customer::ui::list::CustomerListPage;
use crate::domain::a010_agreement::ui::list::AgreementListPage;
use crate::domain::a011_rent::ui::list::RentListPage;
use crate::domain::a012_service::ui::list::ServiceSheetListPage;
use crate::domain::a013_unit::ui::list::UnitListPage;
use crate::domain::a014_unit_bill::ui::list::UnitBillListPage;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::use_auth;
use crate::system::users::ui::list::UsersListPage;
use contracts::domain::a001_carpet::aggregate::CarpetDirection;
use contracts::system::access::{is_allowed, HOME, NAV_ITEMS, SIGNOUT};
use leptos::prelude::*;

/// Key of the page to render. Unknown keys and keys the role may not open
/// fall back to the home dashboard; `None` when even that is closed.
pub fn resolve_page_key(role: Option<i32>, key: &str) -> Option<&'static str> {
    let opens = |k: &str| k != SIGNOUT && is_allowed(role, k);
    NAV_ITEMS
        .iter()
        .map(|item| item.key)
        .find(|k| *k == key && opens(k))
        .or_else(|| opens(HOME).then_some(HOME))
}

fn render_page(key: Option<&str>) -> AnyView {
    let Some(key) = key else {
        return view! {
            <div class="no-access">
                <h2>"دسترسی ندارید"</h2>
                <p>"حساب شما به هیچ صفحه ای دسترسی ندارد. لطفا با مدیر سیستم تماس بگیرید."</p>
            </div>
        }
        .into_any();
    };
    match key {
        "Workers" => view! { <WorkerListPage /> }.into_any(),
        "ProcessingCarpets" => view! { <ProcessingCarpetListPage /> }.into_any(),
        "Importing" => view! { <CarpetListPage direction=CarpetDirection::Import /> }.into_any(),
        "SendingCarpets" => {
            view! { <CarpetListPage direction=CarpetDirection::Export /> }.into_any()
        }
        "StaffManager" => view! { <StaffListPage /> }.into_any(),
        "Salaries" => view! { <SalaryListPage /> }.into_any(),
        "Expenses" => view! { <ExpenditureListPage /> }.into_any(),
        "Incomes" => view! { <IncomeListPage /> }.into_any(),
        "financial" => view! { <FinanceListPage /> }.into_any(),
        "Shopkeepers" => view! { <CustomerListPage /> }.into_any(),
        "Agreements" => view! { <AgreementListPage /> }.into_any(),
        "RentManager" => view! { <RentListPage /> }.into_any(),
        "ServiceManager" => view! { <ServiceSheetListPage /> }.into_any(),
        "Blockes" => view! { <UnitListPage /> }.into_any(),
        "BlockesServices" => view! { <UnitBillListPage /> }.into_any(),
        "CreateUsers" => view! { <UsersListPage /> }.into_any(),
        _ => view! { <SummaryDashboard /> }.into_any(),
    }
}

#[component]
pub fn MainContent() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let page_key = Memo::new(move |_| {
        let role = auth_state.with(|s| s.user_info.as_ref().map(|u| u.role));
        ctx.selected.with(|key| resolve_page_key(role, key))
    });

    view! {
        <div class="main-content">
            {move || render_page(page_key.get())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_tier_opens_every_page() {
        assert_eq!(resolve_page_key(Some(0), "Workers"), Some("Workers"));
        assert_eq!(resolve_page_key(Some(1), "CreateUsers"), Some("CreateUsers"));
        assert_eq!(resolve_page_key(Some(0), "Blockes"), Some("Blockes"));
    }

    #[test]
    fn test_restricted_tier_falls_back_to_home() {
        assert_eq!(resolve_page_key(Some(3), "RentManager"), Some("RentManager"));
        assert_eq!(resolve_page_key(Some(3), "BlockesServices"), Some("BlockesServices"));
        assert_eq!(resolve_page_key(Some(3), "Workers"), Some(HOME));
        assert_eq!(resolve_page_key(Some(3), "Blockes"), Some(HOME));
        assert_eq!(resolve_page_key(Some(3), "CreateUsers"), Some(HOME));
    }

    #[test]
    fn test_unknown_and_signout_render_home() {
        assert_eq!(resolve_page_key(Some(0), "NoSuchPage"), Some(HOME));
        assert_eq!(resolve_page_key(Some(0), SIGNOUT), Some(HOME));
    }

    #[test]
    fn test_sign_out_only_roles_see_no_page() {
        assert_eq!(resolve_page_key(Some(7), "Salaries"), None);
        assert_eq!(resolve_page_key(Some(2), HOME), None);
        assert_eq!(resolve_page_key(None, "home"), None);
    }
}

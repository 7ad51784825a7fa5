use contracts::dashboards::d400_summary::dto::SummaryResponse;
use contracts::domain::a001_carpet::aggregate::CarpetDirection;

use crate::domain::{
    a001_carpet, a002_worker, a004_staff, a005_salary, a006_expenditure, a007_income,
    a010_agreement,
};

/// Counts and money totals for the home page
pub async fn get_summary() -> anyhow::Result<SummaryResponse> {
    let imported_carpets = a001_carpet::repository::count_by_direction(CarpetDirection::Import).await?;
    let exported_carpets = a001_carpet::repository::count_by_direction(CarpetDirection::Export).await?;
    let workers = a002_worker::repository::count_all().await?;
    let staff = a004_staff::repository::count_active().await?;
    let active_agreements = a010_agreement::repository::count_active().await?;

    let total_income = a007_income::repository::list_all()
        .await?
        .iter()
        .map(|i| i.amount)
        .sum();
    let total_expenditure = a006_expenditure::repository::list_all()
        .await?
        .iter()
        .map(|e| e.amount)
        .sum();
    let salaries_remainder = a005_salary::repository::total_remainder().await?;

    Ok(SummaryResponse {
        imported_carpets,
        exported_carpets,
        workers,
        staff,
        active_agreements,
        total_income,
        total_expenditure,
        balance: 0.0,
        salaries_remainder,
    }
    .with_balance())
}

use axum::Json;
use contracts::dashboards::d400_summary::dto::SummaryResponse;

use crate::dashboards::d400_summary::service;
use crate::shared::error::ServiceResult;

/// GET /api/dashboard/summary
pub async fn get_summary() -> ServiceResult<Json<SummaryResponse>> {
    Ok(Json(service::get_summary().await?))
}

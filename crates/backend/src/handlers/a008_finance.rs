use axum::{extract::Path, Json};
use contracts::domain::a008_finance::aggregate::{Finance, FinanceDto};
use serde_json::json;

use crate::domain::a008_finance;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/finances
pub async fn list_all() -> ServiceResult<Json<Vec<Finance>>> {
    Ok(Json(a008_finance::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Finance>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a008_finance::service::get_by_id(uuid).await?))
}

pub async fn create(Json(dto): Json<FinanceDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a008_finance::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<FinanceDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a008_finance::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a008_finance::service::delete(uuid).await
}

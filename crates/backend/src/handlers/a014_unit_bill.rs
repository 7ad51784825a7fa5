use axum::{extract::Path, Json};
use contracts::domain::a014_unit_bill::aggregate::{UnitBillDto, UnitBillView};
use serde_json::json;

use crate::domain::a014_unit_bill;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/unit-bills, newest month first
pub async fn list_all() -> ServiceResult<Json<Vec<UnitBillView>>> {
    Ok(Json(a014_unit_bill::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<UnitBillView>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a014_unit_bill::service::get_by_id(uuid).await?))
}

pub async fn create(Json(dto): Json<UnitBillDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a014_unit_bill::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<UnitBillDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a014_unit_bill::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a014_unit_bill::service::delete(uuid).await
}

use axum::{extract::Path, Json};
use contracts::domain::a013_unit::aggregate::UnitDto;
use serde_json::json;

use crate::domain::a013_unit;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/units, numeric unit numbers first
pub async fn list_all() -> ServiceResult<Json<Vec<UnitDto>>> {
    Ok(Json(a013_unit::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<UnitDto>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a013_unit::service::get_by_id(uuid).await?))
}

pub async fn create(Json(dto): Json<UnitDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a013_unit::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<UnitDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a013_unit::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a013_unit::service::delete(uuid).await
}

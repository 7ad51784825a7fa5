use axum::{extract::Path, Json};
use contracts::domain::a004_staff::aggregate::{Staff, StaffDto};
use serde_json::json;

use crate::domain::a004_staff;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/staff
pub async fn list_all() -> ServiceResult<Json<Vec<Staff>>> {
    Ok(Json(a004_staff::service::list_all().await?))
}

/// GET /api/staff/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Staff>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a004_staff::service::get_by_id(uuid).await?))
}

/// POST /api/staff
pub async fn create(Json(dto): Json<StaffDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a004_staff::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

/// PATCH /api/staff/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<StaffDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a004_staff::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/staff/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a004_staff::service::delete(uuid).await
}

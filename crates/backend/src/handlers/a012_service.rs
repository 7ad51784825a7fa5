use axum::{extract::Path, Json};
use contracts::domain::a012_service::aggregate::{ServiceSheetDto, ServiceSheetView};
use serde_json::json;

use crate::domain::a012_service;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/services
pub async fn list_all() -> ServiceResult<Json<Vec<ServiceSheetView>>> {
    Ok(Json(a012_service::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<ServiceSheetView>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a012_service::service::get_by_id(uuid).await?))
}

pub async fn create(Json(dto): Json<ServiceSheetDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a012_service::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ServiceSheetDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a012_service::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a012_service::service::delete(uuid).await
}

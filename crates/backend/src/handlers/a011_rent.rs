use axum::{extract::Path, Json};
use contracts::domain::a011_rent::aggregate::{RentDto, RentView};
use serde_json::json;

use crate::domain::a011_rent;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/rent
pub async fn list_all() -> ServiceResult<Json<Vec<RentView>>> {
    Ok(Json(a011_rent::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<RentView>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a011_rent::service::get_by_id(uuid).await?))
}

pub async fn create(Json(dto): Json<RentDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a011_rent::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<RentDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a011_rent::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a011_rent::service::delete(uuid).await
}

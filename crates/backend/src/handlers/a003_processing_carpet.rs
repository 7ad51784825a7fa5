use axum::{extract::Path, Json};
use contracts::domain::a003_processing_carpet::aggregate::{ProcessingCarpet, ProcessingCarpetDto};
use serde_json::json;

use crate::domain::a003_processing_carpet;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/processing-carpets
pub async fn list_all() -> ServiceResult<Json<Vec<ProcessingCarpet>>> {
    Ok(Json(a003_processing_carpet::service::list_all().await?))
}

/// GET /api/processing-carpets/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<ProcessingCarpet>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a003_processing_carpet::service::get_by_id(uuid).await?))
}

/// POST /api/processing-carpets
pub async fn create(Json(dto): Json<ProcessingCarpetDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a003_processing_carpet::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

/// PATCH /api/processing-carpets/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ProcessingCarpetDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a003_processing_carpet::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/processing-carpets/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a003_processing_carpet::service::delete(uuid).await
}

use axum::{
    extract::{Path, State},
    Json,
};
use contracts::domain::a001_carpet::aggregate::{Carpet, CarpetDirection, CarpetDto};
use serde_json::json;

use crate::domain::a001_carpet;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/carpet/{import|export}
pub async fn list(State(direction): State<CarpetDirection>) -> ServiceResult<Json<Vec<Carpet>>> {
    Ok(Json(a001_carpet::service::list(direction).await?))
}

/// GET /api/carpet/{import|export}/:id
pub async fn get_by_id(
    State(direction): State<CarpetDirection>,
    Path(id): Path<String>,
) -> ServiceResult<Json<Carpet>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a001_carpet::service::get_by_id(direction, uuid).await?))
}

/// POST /api/carpet/{import|export}
pub async fn create(
    State(direction): State<CarpetDirection>,
    Json(dto): Json<CarpetDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let id = a001_carpet::service::create(direction, dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

/// PATCH /api/carpet/{import|export}/:id
pub async fn update(
    State(direction): State<CarpetDirection>,
    Path(id): Path<String>,
    Json(dto): Json<CarpetDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a001_carpet::service::update(direction, uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/carpet/{import|export}/:id
pub async fn delete(
    State(direction): State<CarpetDirection>,
    Path(id): Path<String>,
) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a001_carpet::service::delete(direction, uuid).await
}

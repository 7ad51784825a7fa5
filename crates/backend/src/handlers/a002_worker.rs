use axum::{
    extract::{Multipart, Path},
    Json,
};
use contracts::domain::a002_worker::aggregate::Worker;
use serde_json::json;

use crate::domain::a002_worker::{self, service::NIC_FIELD};
use crate::shared::error::{parse_id, ServiceResult};
use crate::shared::upload::MultipartForm;

/// GET /api/person
pub async fn list_all() -> ServiceResult<Json<Vec<Worker>>> {
    Ok(Json(a002_worker::service::list_all().await?))
}

/// GET /api/person/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Worker>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a002_worker::service::get_by_id(uuid).await?))
}

/// POST /api/person (multipart: text fields + `nic` file)
pub async fn create(multipart: Multipart) -> ServiceResult<Json<serde_json::Value>> {
    let form = MultipartForm::read(multipart, NIC_FIELD).await?;
    let id = a002_worker::service::create(form).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

/// PATCH /api/person/:id (multipart, `nic` optional)
pub async fn update(
    Path(id): Path<String>,
    multipart: Multipart,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    let form = MultipartForm::read(multipart, NIC_FIELD).await?;
    a002_worker::service::update(uuid, form).await?;
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/person/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a002_worker::service::delete(uuid).await
}

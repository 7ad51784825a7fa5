use axum::{
    extract::{Multipart, Path},
    Json,
};
use contracts::domain::a009_customer::aggregate::CustomerView;
use serde_json::json;

use crate::domain::a009_customer::{self, service::ATTACHMENT_FIELD};
use crate::shared::error::{parse_id, ServiceResult};
use crate::shared::upload::MultipartForm;

/// GET /api/customers
pub async fn list_all() -> ServiceResult<Json<Vec<CustomerView>>> {
    Ok(Json(a009_customer::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<CustomerView>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a009_customer::service::get_by_id(uuid).await?))
}

/// POST /api/customers (multipart, `attachment` optional)
pub async fn create(multipart: Multipart) -> ServiceResult<Json<serde_json::Value>> {
    let form = MultipartForm::read(multipart, ATTACHMENT_FIELD).await?;
    let id = a009_customer::service::create(form).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    multipart: Multipart,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    let form = MultipartForm::read(multipart, ATTACHMENT_FIELD).await?;
    a009_customer::service::update(uuid, form).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a009_customer::service::delete(uuid).await
}

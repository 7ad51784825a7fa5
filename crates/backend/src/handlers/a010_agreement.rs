use axum::{extract::Path, Json};
use contracts::domain::a010_agreement::aggregate::{Agreement, AgreementDto};
use serde_json::json;

use crate::domain::a010_agreement;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/agreements
pub async fn list_all() -> ServiceResult<Json<Vec<Agreement>>> {
    Ok(Json(a010_agreement::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Agreement>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a010_agreement::service::get_by_id(uuid).await?))
}

pub async fn create(Json(dto): Json<AgreementDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a010_agreement::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<AgreementDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a010_agreement::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a010_agreement::service::delete(uuid).await
}

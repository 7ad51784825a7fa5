use axum::{extract::Path, Json};
use contracts::domain::a006_expenditure::aggregate::{Expenditure, ExpenditureDto, ExpenditureList};
use serde_json::json;

use crate::domain::a006_expenditure;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/expenditure
pub async fn list_all() -> ServiceResult<Json<ExpenditureList>> {
    Ok(Json(a006_expenditure::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Expenditure>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a006_expenditure::service::get_by_id(uuid).await?))
}

pub async fn create(Json(dto): Json<ExpenditureDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a006_expenditure::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ExpenditureDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a006_expenditure::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a006_expenditure::service::delete(uuid).await
}

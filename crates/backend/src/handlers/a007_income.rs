use axum::{extract::Path, Json};
use contracts::domain::a007_income::aggregate::{Income, IncomeDto, IncomeList};
use serde_json::json;

use crate::domain::a007_income;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/income
pub async fn list_all() -> ServiceResult<Json<IncomeList>> {
    Ok(Json(a007_income::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Income>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a007_income::service::get_by_id(uuid).await?))
}

pub async fn create(Json(dto): Json<IncomeDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a007_income::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<IncomeDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a007_income::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a007_income::service::delete(uuid).await
}

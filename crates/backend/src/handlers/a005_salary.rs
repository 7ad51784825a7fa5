use axum::{extract::Path, Json};
use contracts::domain::a005_salary::aggregate::{Salary, SalaryDto};
use serde_json::json;

use crate::domain::a005_salary;
use crate::shared::error::{parse_id, ServiceResult};

pub async fn list_all() -> ServiceResult<Json<Vec<Salary>>> {
    Ok(Json(a005_salary::service::list_all().await?))
}

pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Salary>> {
    let uuid = parse_id(&id)?;
    Ok(Json(a005_salary::service::get_by_id(uuid).await?))
}

pub async fn create(Json(dto): Json<SalaryDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = a005_salary::service::create(dto).await?;
    Ok(Json(json!({"id": id.to_string()})))
}

pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<SalaryDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let uuid = parse_id(&id)?;
    a005_salary::service::update(uuid, dto).await?;
    Ok(Json(json!({"id": id})))
}

pub async fn delete(Path(id): Path<String>) -> ServiceResult<()> {
    let uuid = parse_id(&id)?;
    a005_salary::service::delete(uuid).await
}

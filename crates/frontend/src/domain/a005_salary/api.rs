use contracts::domain::a005_salary::aggregate::{Salary, SalaryDto};
use contracts::system::access::ApiResource;

use crate::shared::api_utils::{self, resource_path};

const RESOURCE: ApiResource = ApiResource::Salaries;

pub async fn fetch_all() -> Result<Vec<Salary>, String> {
    api_utils::get_json(&resource_path(RESOURCE, None)).await
}

pub async fn save(dto: &SalaryDto) -> Result<(), String> {
    match dto.id.as_deref() {
        Some(id) => api_utils::patch_json(&resource_path(RESOURCE, Some(id)), dto).await,
        None => api_utils::post_json(&resource_path(RESOURCE, None), dto)
            .await
            .map(|_| ()),
    }
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&resource_path(RESOURCE, Some(id))).await
}

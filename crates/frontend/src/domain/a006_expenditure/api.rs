use contracts::domain::a006_expenditure::aggregate::{ExpenditureDto, ExpenditureList};
use contracts::system::access::ApiResource;

use crate::shared::api_utils::{self, resource_path};

const RESOURCE: ApiResource = ApiResource::Expenditure;

/// Records plus the server-side sum of their amounts
pub async fn fetch_all() -> Result<ExpenditureList, String> {
    api_utils::get_json(&resource_path(RESOURCE, None)).await
}

pub async fn save(dto: &ExpenditureDto) -> Result<(), String> {
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

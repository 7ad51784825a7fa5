use contracts::domain::a012_service::aggregate::{ServiceSheetDto, ServiceSheetView};
use contracts::system::access::ApiResource;

use crate::shared::api_utils::{self, resource_path};

const RESOURCE: ApiResource = ApiResource::Services;

pub async fn fetch_all() -> Result<Vec<ServiceSheetView>, String> {
    api_utils::get_json(&resource_path(RESOURCE, None)).await
}

/// The server fills the rows from the floor's active agreements
pub async fn create(dto: &ServiceSheetDto) -> Result<String, String> {
    api_utils::post_json(&resource_path(RESOURCE, None), dto).await
}

pub async fn update(id: &str, dto: &ServiceSheetDto) -> Result<(), String> {
    api_utils::patch_json(&resource_path(RESOURCE, Some(id)), dto).await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&resource_path(RESOURCE, Some(id))).await
}

use contracts::domain::a011_rent::aggregate::{RentDto, RentView};
use contracts::system::access::ApiResource;

use crate::shared::api_utils::{self, resource_path};

const RESOURCE: ApiResource = ApiResource::Rent;

/// Sheets, newest period first
pub async fn fetch_all() -> Result<Vec<RentView>, String> {
    api_utils::get_json(&resource_path(RESOURCE, None)).await
}

/// Creating a sheet snapshots the active agreements of the floor on the server
pub async fn create(dto: &RentDto) -> Result<String, String> {
    api_utils::post_json(&resource_path(RESOURCE, None), dto).await
}

pub async fn update(id: &str, dto: &RentDto) -> Result<(), String> {
    api_utils::patch_json(&resource_path(RESOURCE, Some(id)), dto).await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&resource_path(RESOURCE, Some(id))).await
}

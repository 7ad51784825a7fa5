use contracts::domain::a014_unit_bill::aggregate::{UnitBillDto, UnitBillView};
use contracts::system::access::ApiResource;

use crate::shared::api_utils::{self, resource_path};

const RESOURCE: ApiResource = ApiResource::UnitBills;

pub async fn fetch_all() -> Result<Vec<UnitBillView>, String> {
    api_utils::get_json(&resource_path(RESOURCE, None)).await
}

/// The server fills the rows from the occupied units
pub async fn create(dto: &UnitBillDto) -> Result<String, String> {
    api_utils::post_json(&resource_path(RESOURCE, None), dto).await
}

pub async fn update(id: &str, dto: &UnitBillDto) -> Result<(), String> {
    api_utils::patch_json(&resource_path(RESOURCE, Some(id)), dto).await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&resource_path(RESOURCE, Some(id))).await
}

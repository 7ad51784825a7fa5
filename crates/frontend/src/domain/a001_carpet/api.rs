//! Imported and exported carpets share one shape and live under two resources.

use contracts::domain::a001_carpet::aggregate::{Carpet, CarpetDirection, CarpetDto};
use contracts::system::access::ApiResource;

use crate::shared::api_utils::{self, resource_path};

pub fn resource(direction: CarpetDirection) -> ApiResource {
    match direction {
        CarpetDirection::Import => ApiResource::ImportCarpets,
        CarpetDirection::Export => ApiResource::ExportCarpets,
    }
}

pub async fn fetch_all(direction: CarpetDirection) -> Result<Vec<Carpet>, String> {
    api_utils::get_json(&resource_path(resource(direction), None)).await
}

/// The price is computed by the server and never sent
pub async fn save(dto: &CarpetDto) -> Result<(), String> {
    let resource = resource(dto.direction);
    match dto.id.as_deref() {
        Some(id) => api_utils::patch_json(&resource_path(resource, Some(id)), dto).await,
        None => api_utils::post_json(&resource_path(resource, None), dto)
            .await
            .map(|_| ()),
    }
}

pub async fn delete(direction: CarpetDirection, id: &str) -> Result<(), String> {
    api_utils::delete(&resource_path(resource(direction), Some(id))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_by_direction() {
        assert_eq!(resource(CarpetDirection::Import).path(), "carpet/import");
        assert_eq!(resource(CarpetDirection::Export).path(), "carpet/export");
    }
}

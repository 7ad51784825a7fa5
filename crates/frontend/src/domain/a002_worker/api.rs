use contracts::domain::a002_worker::aggregate::{Worker, WorkerDto};
use contracts::system::access::ApiResource;
use web_sys::File;

use crate::shared::api_utils::{self, build_form_data, resource_path};

const RESOURCE: ApiResource = ApiResource::Workers;

/// Multipart field of the identity document
pub const NIC_FIELD: &str = "nic";

pub async fn fetch_all() -> Result<Vec<Worker>, String> {
    api_utils::get_json(&resource_path(RESOURCE, None)).await
}

fn form_fields(dto: &WorkerDto) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("name", dto.name.clone()),
        ("father_name", dto.father_name.clone()),
        ("permanent_residency", dto.permanent_residency.clone()),
        ("current_residency", dto.current_residency.clone()),
    ];
    if let Some(id) = &dto.id {
        fields.push(("id", id.clone()));
    }
    fields
}

/// Sends the text fields and, when chosen, the identity document as one multipart form
pub async fn save(dto: &WorkerDto, nic: Option<File>) -> Result<(), String> {
    let form = build_form_data(&form_fields(dto), nic.map(|f| (NIC_FIELD, f)))?;
    match dto.id.as_deref() {
        Some(id) => api_utils::patch_form(&resource_path(RESOURCE, Some(id)), form).await,
        None => api_utils::post_form(&resource_path(RESOURCE, None), form)
            .await
            .map(|_| ()),
    }
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&resource_path(RESOURCE, Some(id))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_carry_id_on_edit() {
        let mut dto = WorkerDto {
            name: "احمد".into(),
            ..Default::default()
        };
        assert!(!form_fields(&dto).iter().any(|(k, _)| *k == "id"));

        dto.id = Some("w-1".into());
        let fields = form_fields(&dto);
        assert!(fields.contains(&("id", "w-1".to_string())));
        assert!(fields.contains(&("name", "احمد".to_string())));
    }
}

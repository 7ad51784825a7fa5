use contracts::domain::a009_customer::aggregate::{CustomerDto, CustomerView};
use contracts::system::access::ApiResource;
use web_sys::File;

use crate::shared::api_utils::{self, build_form_data, resource_path};

const RESOURCE: ApiResource = ApiResource::Customers;

/// Multipart field of the optional scanned document
pub const ATTACHMENT_FIELD: &str = "attachment";

pub async fn fetch_all() -> Result<Vec<CustomerView>, String> {
    api_utils::get_json(&resource_path(RESOURCE, None)).await
}

fn form_fields(dto: &CustomerDto) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("name", dto.name.clone()),
        ("father_name", dto.father_name.clone()),
        ("phone_number", dto.phone_number.clone()),
        ("rental_owner", dto.rental_owner.clone()),
        ("nic", dto.nic.clone()),
        ("address", dto.address.clone()),
    ];
    if let Some(id) = &dto.id {
        fields.push(("id", id.clone()));
    }
    fields
}

pub async fn save(dto: &CustomerDto, attachment: Option<File>) -> Result<(), String> {
    let form = build_form_data(
        &form_fields(dto),
        attachment.map(|f| (ATTACHMENT_FIELD, f)),
    )?;
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
    fn test_form_fields() {
        let dto = CustomerDto {
            id: Some("c-9".into()),
            nic: "1234".into(),
            ..Default::default()
        };
        let fields = form_fields(&dto);
        assert_eq!(fields.len(), 7);
        assert!(fields.contains(&("nic", "1234".to_string())));
        assert!(fields.contains(&("id", "c-9".to_string())));
    }
}

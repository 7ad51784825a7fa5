use super::repository;
use crate::domain::a010_agreement;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::upload::{save_optional, settle_replacement, MultipartForm};
use contracts::domain::a009_customer::aggregate::{Customer, CustomerDto, CustomerView};
use std::collections::HashMap;
use uuid::Uuid;

/// Multipart field carrying the optional scanned document
pub const ATTACHMENT_FIELD: &str = "attachment";

fn dto_from_form(form: &MultipartForm) -> CustomerDto {
    CustomerDto {
        id: form.opt_text("id"),
        name: form.text("name"),
        father_name: form.text("father_name"),
        phone_number: form.text("phone_number"),
        rental_owner: form.text("rental_owner"),
        nic: form.text("nic"),
        address: form.text("address"),
    }
}

pub async fn create(form: MultipartForm) -> ServiceResult<Uuid> {
    let dto = dto_from_form(&form);
    Customer::new_for_insert(&dto, None)
        .validate()
        .map_err(ServiceError::Validation)?;

    let attachment = save_optional(form.file.as_ref()).await?;
    let mut aggregate = Customer::new_for_insert(&dto, attachment);
    aggregate.before_write();

    let inserted = repository::insert(&aggregate).await;
    let id = settle_replacement(inserted, aggregate.attachment.as_deref(), None).await?;
    tracing::info!("Created customer {} ({})", aggregate.name, id);
    Ok(id)
}

/// Keeps the stored attachment when no new file is sent; a replaced one is deleted
pub async fn update(id: Uuid, form: MultipartForm) -> ServiceResult<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    let dto = dto_from_form(&form);

    let mut check = aggregate.clone();
    check.update(&dto, None);
    check.validate().map_err(ServiceError::Validation)?;

    let attachment = save_optional(form.file.as_ref()).await?;
    let replaced = aggregate.attachment.clone();
    aggregate.update(&dto, attachment.clone());
    aggregate.before_write();
    let updated = repository::update(&aggregate).await;
    settle_replacement(updated, attachment.as_deref(), replaced.as_deref()).await?;
    Ok(())
}

/// Customers referenced by any agreement, active or not, stay
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if a010_agreement::repository::count_by_customer(&id.to_string()).await? > 0 {
        return Err(ServiceError::Conflict(
            "این دوکاندار قرارداد دارد و حذف نمی‌شود".into(),
        ));
    }
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<CustomerView> {
    repository::get_by_id(id)
        .await?
        .map(|c| c.to_view())
        .ok_or(ServiceError::NotFound)
}

pub async fn list_all() -> ServiceResult<Vec<CustomerView>> {
    Ok(repository::list_all()
        .await?
        .iter()
        .map(Customer::to_view)
        .collect())
}

/// id -> display name, for agreements and rent sheets
pub async fn names() -> ServiceResult<HashMap<String, String>> {
    Ok(repository::list_all()
        .await?
        .into_iter()
        .map(|c| (c.base.id.value().to_string(), c.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;
    use crate::shared::upload::{media_dir, UploadedFile};
    use contracts::domain::a010_agreement::aggregate::{AgreementDto, AgreementStatus};

    fn form(name: &str, attachment: Option<&str>) -> MultipartForm {
        let mut form = MultipartForm::default();
        for (key, value) in [
            ("name", name),
            ("father_name", "کبیر"),
            ("phone_number", "0700123456"),
            ("nic", "1402-0101-12345"),
        ] {
            form.fields.insert(key.into(), value.into());
        }
        form.file = attachment.map(|original_name| UploadedFile {
            original_name: original_name.into(),
            bytes: b"%PDF-1.4".to_vec(),
        });
        form
    }

    #[test]
    fn test_customer_with_an_inactive_agreement_cannot_be_deleted() {
        run(async {
            let id = create(form("فرید", None)).await.unwrap();
            a010_agreement::service::create(AgreementDto {
                customer_id: id.to_string(),
                status: AgreementStatus::InActive,
                shops: vec!["12".into()],
                rent: 5000.0,
                floor: 2,
                ..Default::default()
            })
            .await
            .unwrap();

            assert!(matches!(delete(id).await, Err(ServiceError::Conflict(_))));
            assert!(get_by_id(id).await.is_ok());
        });
    }

    #[test]
    fn test_customer_without_agreements_is_soft_deleted() {
        run(async {
            let id = create(form("حمید", None)).await.unwrap();
            delete(id).await.unwrap();
            assert!(matches!(get_by_id(id).await, Err(ServiceError::NotFound)));
            assert!(!names().await.unwrap().contains_key(&id.to_string()));
        });
    }

    #[test]
    fn test_replaced_attachment_is_removed_from_disk() {
        run(async {
            let id = create(form("صابر", Some("contract.pdf"))).await.unwrap();
            let first = get_by_id(id).await.unwrap().attachment.unwrap();
            update(id, form("صابر", Some("contract-2.pdf"))).await.unwrap();
            let second = get_by_id(id).await.unwrap().attachment.unwrap();

            let dir = media_dir().unwrap();
            assert!(!dir.join(&first).exists());
            assert!(dir.join(&second).exists());
        });
    }
}

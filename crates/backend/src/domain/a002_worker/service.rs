use super::repository;
use crate::domain::a003_processing_carpet;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::upload::{save_optional, settle_replacement, MultipartForm};
use contracts::domain::a002_worker::aggregate::{Worker, WorkerDto};
use uuid::Uuid;

/// Name of the multipart field carrying the identity document
pub const NIC_FIELD: &str = "nic";

fn dto_from_form(form: &MultipartForm) -> WorkerDto {
    WorkerDto {
        id: form.opt_text("id"),
        name: form.text("name"),
        father_name: form.text("father_name"),
        permanent_residency: form.text("permanent_residency"),
        current_residency: form.text("current_residency"),
    }
}

pub async fn create(form: MultipartForm) -> ServiceResult<Uuid> {
    let dto = dto_from_form(&form);
    if form.file.is_none() {
        return Err(ServiceError::validation("فایل تذکره الزامی است"));
    }

    // Validate text fields before touching the disk
    Worker::new_for_insert(&dto, Some(String::new()))
        .validate()
        .map_err(ServiceError::Validation)?;

    let nic_file = save_optional(form.file.as_ref()).await?;
    let mut aggregate = Worker::new_for_insert(&dto, nic_file);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    let inserted = repository::insert(&aggregate).await;
    let id = settle_replacement(inserted, aggregate.nic_file.as_deref(), None).await?;
    tracing::info!("Created worker {} ({})", aggregate.name, id);
    Ok(id)
}

/// Without a new `nic` file the stored document is kept; a replaced one is deleted
pub async fn update(id: Uuid, form: MultipartForm) -> ServiceResult<()> {
    let mut aggregate = get_by_id(id).await?;
    let dto = dto_from_form(&form);

    let mut check = aggregate.clone();
    check.update(&dto, None);
    check.validate().map_err(ServiceError::Validation)?;

    let nic_file = save_optional(form.file.as_ref()).await?;
    let replaced = aggregate.nic_file.clone();
    aggregate.update(&dto, nic_file.clone());
    aggregate.before_write();

    let updated = repository::update(&aggregate).await;
    settle_replacement(updated, nic_file.as_deref(), replaced.as_deref()).await?;
    Ok(())
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if a003_processing_carpet::repository::count_by_worker(&id.to_string()).await? > 0 {
        return Err(ServiceError::Conflict(
            "این کارگر قالین در حال بافت دارد و حذف نمی‌شود".into(),
        ));
    }
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Worker> {
    repository::get_by_id(id).await?.ok_or(ServiceError::NotFound)
}

pub async fn list_all() -> ServiceResult<Vec<Worker>> {
    Ok(repository::list_all().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;
    use crate::shared::upload::UploadedFile;
    use contracts::domain::a003_processing_carpet::aggregate::ProcessingCarpetDto;

    fn form(name: &str, file: Option<&str>) -> MultipartForm {
        let mut form = MultipartForm::default();
        for (key, value) in [
            ("name", name),
            ("father_name", "رحیم"),
            ("permanent_residency", "هرات"),
            ("current_residency", "کابل"),
        ] {
            form.fields.insert(key.into(), value.into());
        }
        form.file = file.map(|original_name| UploadedFile {
            original_name: original_name.into(),
            bytes: vec![0xff, 0xd8, 0xff],
        });
        form
    }

    fn stored(name: &str) -> bool {
        crate::shared::upload::media_dir().unwrap().join(name).exists()
    }

    #[test]
    fn test_create_requires_the_nic_file() {
        run(async {
            let err = create(form("جمیل", None)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        });
    }

    #[test]
    fn test_new_nic_file_replaces_the_old_one_on_disk() {
        run(async {
            let id = create(form("شکور", Some("nic.jpg"))).await.unwrap();
            let first = get_by_id(id).await.unwrap().nic_file.unwrap();
            assert!(stored(&first));

            update(id, form("شکور", None)).await.unwrap();
            assert_eq!(get_by_id(id).await.unwrap().nic_file.as_deref(), Some(first.as_str()));

            update(id, form("شکور", Some("nic-new.jpg"))).await.unwrap();
            let second = get_by_id(id).await.unwrap().nic_file.unwrap();
            assert_ne!(first, second);
            assert!(!stored(&first));
            assert!(stored(&second));
        });
    }

    #[test]
    fn test_worker_with_carpets_in_progress_cannot_be_deleted() {
        run(async {
            let busy = create(form("نسیم", Some("a.png"))).await.unwrap();
            a003_processing_carpet::service::create(ProcessingCarpetDto {
                id: None,
                worker_id: busy.to_string(),
                width: "2".into(),
                length: "3".into(),
                map: "افغانی".into(),
                materials: vec![],
                payments: vec![],
            })
            .await
            .unwrap();
            assert!(matches!(delete(busy).await, Err(ServiceError::Conflict(_))));
            assert!(get_by_id(busy).await.is_ok());

            let idle = create(form("وحید", Some("b.png"))).await.unwrap();
            delete(idle).await.unwrap();
            assert!(matches!(get_by_id(idle).await, Err(ServiceError::NotFound)));
            assert!(list_all()
                .await
                .unwrap()
                .iter()
                .all(|w| w.base.id.value() != idle));
        });
    }
}

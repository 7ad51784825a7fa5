use super::repository;
use crate::domain::a002_worker;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};
use contracts::domain::a003_processing_carpet::aggregate::{ProcessingCarpet, ProcessingCarpetDto};
use std::collections::HashMap;
use uuid::Uuid;

async fn ensure_worker_exists(worker_id: &str) -> ServiceResult<()> {
    let uuid = parse_id(worker_id).map_err(|_| ServiceError::validation("کارگر انتخاب نشده است"))?;
    a002_worker::repository::get_by_id(uuid)
        .await?
        .map(|_| ())
        .ok_or_else(|| ServiceError::validation("کارگر انتخاب شده وجود ندارد"))
}

pub async fn create(dto: ProcessingCarpetDto) -> ServiceResult<Uuid> {
    let mut aggregate = ProcessingCarpet::new_for_insert(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_worker_exists(&aggregate.worker_id).await?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(id: Uuid, dto: ProcessingCarpetDto) -> ServiceResult<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_worker_exists(&aggregate.worker_id).await?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(())
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<ProcessingCarpet> {
    let mut item = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    let names = worker_names().await?;
    item.worker_name = names.get(&item.worker_id).cloned();
    Ok(item)
}

/// List with worker names filled in
pub async fn list_all() -> ServiceResult<Vec<ProcessingCarpet>> {
    let names = worker_names().await?;
    let mut items = repository::list_all().await?;
    for item in &mut items {
        item.worker_name = names.get(&item.worker_id).cloned();
    }
    Ok(items)
}

async fn worker_names() -> ServiceResult<HashMap<String, String>> {
    use contracts::domain::common::AggregateId;
    Ok(a002_worker::repository::list_all()
        .await?
        .into_iter()
        .map(|w| (w.base.id.as_string(), w.name))
        .collect())
}

use super::repository;
use crate::domain::a009_customer;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a010_agreement::aggregate::{Agreement, AgreementDto};
use contracts::enums::floor::Floor;
use uuid::Uuid;

async fn ensure_customer_exists(customer_id: &str) -> ServiceResult<()> {
    let uuid = Uuid::parse_str(customer_id)
        .map_err(|_| ServiceError::validation("دوکاندار انتخاب نشده است"))?;
    match a009_customer::repository::get_by_id(uuid).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::validation("دوکاندار یافت نشد")),
    }
}

pub async fn create(dto: AgreementDto) -> ServiceResult<Uuid> {
    let mut aggregate = Agreement::new_for_insert(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_customer_exists(&aggregate.customer_id).await?;
    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    tracing::info!(
        "Created agreement {} for shops {} on {}",
        id,
        aggregate.shops_label(),
        aggregate.floor.display_name()
    );
    Ok(id)
}

pub async fn update(id: Uuid, dto: AgreementDto) -> ServiceResult<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    aggregate.update(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_customer_exists(&aggregate.customer_id).await?;
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

pub async fn get_by_id(id: Uuid) -> ServiceResult<Agreement> {
    let mut agreement = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    agreement.customer_name = a009_customer::service::names()
        .await?
        .remove(&agreement.customer_id);
    Ok(agreement)
}

pub async fn list_all() -> ServiceResult<Vec<Agreement>> {
    let names = a009_customer::service::names().await?;
    let mut items = repository::list_all().await?;
    for agreement in &mut items {
        agreement.customer_name = names.get(&agreement.customer_id).cloned();
    }
    Ok(items)
}

/// Active agreements on a floor with customer names filled in
pub async fn list_active_by_floor(floor: Floor) -> ServiceResult<Vec<Agreement>> {
    let names = a009_customer::service::names().await?;
    let mut items = repository::list_active_by_floor(floor).await?;
    for agreement in &mut items {
        agreement.customer_name = names.get(&agreement.customer_id).cloned();
    }
    Ok(items)
}

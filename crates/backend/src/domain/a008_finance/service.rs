use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a008_finance::aggregate::{Finance, FinanceDto};
use uuid::Uuid;

pub async fn create(dto: FinanceDto) -> ServiceResult<Uuid> {
    let mut aggregate = Finance::new_for_insert(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    tracing::info!(
        "Recorded transfer {} -> {} of {}",
        aggregate.from_person,
        aggregate.to_person,
        aggregate.amount
    );
    Ok(id)
}

pub async fn update(id: Uuid, dto: FinanceDto) -> ServiceResult<()> {
    let mut aggregate = get_by_id(id).await?;
    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
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

pub async fn get_by_id(id: Uuid) -> ServiceResult<Finance> {
    repository::get_by_id(id).await?.ok_or(ServiceError::NotFound)
}

pub async fn list_all() -> ServiceResult<Vec<Finance>> {
    Ok(repository::list_all().await?)
}

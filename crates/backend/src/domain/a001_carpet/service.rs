use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a001_carpet::aggregate::{Carpet, CarpetDirection, CarpetDto};
use uuid::Uuid;

/// Create a carpet of the given direction; the price is computed here
pub async fn create(direction: CarpetDirection, mut dto: CarpetDto) -> ServiceResult<Uuid> {
    dto.direction = direction;
    let mut aggregate = Carpet::new_for_insert(&dto).map_err(ServiceError::Validation)?;

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    tracing::info!(
        "Created {} carpet {} (price {})",
        direction.as_str(),
        id,
        aggregate.price
    );
    Ok(id)
}

pub async fn update(direction: CarpetDirection, id: Uuid, dto: CarpetDto) -> ServiceResult<()> {
    let mut aggregate = get_by_id(direction, id).await?;

    aggregate.update(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(())
}

pub async fn delete(direction: CarpetDirection, id: Uuid) -> ServiceResult<()> {
    get_by_id(direction, id).await?;
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

/// A carpet of the other direction is reported as missing
pub async fn get_by_id(direction: CarpetDirection, id: Uuid) -> ServiceResult<Carpet> {
    repository::get_by_id(id)
        .await?
        .filter(|c| c.direction == direction)
        .ok_or(ServiceError::NotFound)
}

pub async fn list(direction: CarpetDirection) -> ServiceResult<Vec<Carpet>> {
    Ok(repository::list_by_direction(direction).await?)
}

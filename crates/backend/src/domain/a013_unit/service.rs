use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a013_unit::aggregate::{Unit, UnitDto};
use uuid::Uuid;

pub async fn create(dto: UnitDto) -> ServiceResult<Uuid> {
    let mut aggregate = Unit::new_for_insert(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    tracing::info!("Created unit {} ({})", aggregate.unit_number, aggregate.status.as_str());
    Ok(id)
}

pub async fn update(id: Uuid, dto: UnitDto) -> ServiceResult<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
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

pub async fn get_by_id(id: Uuid) -> ServiceResult<UnitDto> {
    repository::get_by_id(id)
        .await?
        .map(|unit| unit.to_dto())
        .ok_or(ServiceError::NotFound)
}

pub async fn list_all() -> ServiceResult<Vec<UnitDto>> {
    Ok(repository::list_all()
        .await?
        .iter()
        .map(Unit::to_dto)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;
    use contracts::domain::a013_unit::aggregate::UnitStatus;

    #[test]
    fn test_vacating_a_unit_clears_its_occupant() {
        run(async {
            let id = create(UnitDto {
                unit_number: "301".into(),
                customer_name: "حمید".into(),
                customer_father_name: "کریم".into(),
                service_charge: 900.0,
                current_water_reading: 12.5,
                status: UnitStatus::Occupied,
                ..Default::default()
            })
            .await
            .unwrap();

            let mut dto = get_by_id(id).await.unwrap();
            assert_eq!(dto.customer_name, "حمید");
            dto.status = UnitStatus::Vacant;
            update(id, dto).await.unwrap();

            let dto = get_by_id(id).await.unwrap();
            assert_eq!(dto.status, UnitStatus::Vacant);
            assert!(dto.customer_name.is_empty());
            assert!(dto.customer_father_name.is_empty());
            assert_eq!(dto.current_water_reading, 12.5);
        });
    }

    #[test]
    fn test_occupied_unit_needs_a_resident() {
        run(async {
            let err = create(UnitDto {
                unit_number: "302".into(),
                status: UnitStatus::Occupied,
                ..Default::default()
            })
            .await
            .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        });
    }

    #[test]
    fn test_deleted_unit_is_gone() {
        run(async {
            let id = create(UnitDto {
                unit_number: "303".into(),
                ..Default::default()
            })
            .await
            .unwrap();
            delete(id).await.unwrap();
            assert!(matches!(get_by_id(id).await, Err(ServiceError::NotFound)));
            assert!(matches!(delete(id).await, Err(ServiceError::NotFound)));
        });
    }
}

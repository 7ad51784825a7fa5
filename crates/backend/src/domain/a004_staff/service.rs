use super::repository;
use crate::domain::a005_salary;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a004_staff::aggregate::{Staff, StaffDto};
use uuid::Uuid;

pub async fn create(dto: StaffDto) -> ServiceResult<Uuid> {
    let mut aggregate = Staff::new_for_insert(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(id: Uuid, dto: StaffDto) -> ServiceResult<()> {
    let mut aggregate = get_by_id(id).await?;
    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(())
}

/// Staff with salary records cannot be removed
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if a005_salary::repository::count_by_staff(&id.to_string()).await? > 0 {
        return Err(ServiceError::Conflict(
            "برای این کارمند معاش ثبت شده است".into(),
        ));
    }
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Staff> {
    repository::get_by_id(id).await?.ok_or(ServiceError::NotFound)
}

pub async fn list_all() -> ServiceResult<Vec<Staff>> {
    Ok(repository::list_all().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;
    use contracts::domain::a005_salary::aggregate::SalaryDto;

    fn dto(name: &str) -> StaffDto {
        StaffDto {
            name: name.into(),
            position: "نگهبان".into(),
            base_salary: 7000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_staff_with_salaries_cannot_be_deleted() {
        run(async {
            let paid = create(dto("عارف")).await.unwrap();
            a005_salary::service::create(SalaryDto {
                staff_id: paid.to_string(),
                year: "1402".into(),
                month: 1,
                amount: 7000.0,
                ..Default::default()
            })
            .await
            .unwrap();
            assert!(matches!(delete(paid).await, Err(ServiceError::Conflict(_))));

            let unpaid = create(dto("باقر")).await.unwrap();
            delete(unpaid).await.unwrap();
            assert!(matches!(get_by_id(unpaid).await, Err(ServiceError::NotFound)));
        });
    }

    #[test]
    fn test_invalid_hire_date_is_rejected() {
        run(async {
            let mut bad = dto("ظاهر");
            bad.hire_date = Some("1403/01/01".into());
            assert!(matches!(create(bad).await, Err(ServiceError::Validation(_))));
        });
    }
}

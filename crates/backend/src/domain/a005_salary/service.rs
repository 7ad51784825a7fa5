use super::repository;
use crate::domain::a004_staff;
use crate::shared::error::{is_unique_violation, ServiceError, ServiceResult};
use contracts::domain::a005_salary::aggregate::{Salary, SalaryDto};
use std::collections::HashMap;
use uuid::Uuid;

async fn ensure_staff_exists(staff_id: &str) -> ServiceResult<()> {
    let uuid = Uuid::parse_str(staff_id)
        .map_err(|_| ServiceError::validation("کارمند انتخاب نشده است"))?;
    match a004_staff::repository::get_by_id(uuid).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::validation("کارمند یافت نشد")),
    }
}

fn period_taken(aggregate: &Salary) -> ServiceError {
    ServiceError::Conflict(format!(
        "معاش {} {} برای این کارمند قبلا ثبت شده است",
        aggregate.month.display_name(),
        aggregate.year
    ))
}

/// One record per staff member and month
async fn ensure_period_free(aggregate: &Salary) -> ServiceResult<()> {
    let existing =
        repository::find_for_period(&aggregate.staff_id, &aggregate.year, aggregate.month).await?;
    match existing {
        Some(other) if other.base.id != aggregate.base.id => Err(period_taken(aggregate)),
        _ => Ok(()),
    }
}

/// A concurrent write that slipped past `ensure_period_free` hits the unique index
fn write_error(aggregate: &Salary, e: anyhow::Error) -> ServiceError {
    if is_unique_violation(&e) {
        period_taken(aggregate)
    } else {
        ServiceError::Internal(e)
    }
}

pub async fn create(dto: SalaryDto) -> ServiceResult<Uuid> {
    let mut aggregate = Salary::new_for_insert(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_staff_exists(&aggregate.staff_id).await?;
    ensure_period_free(&aggregate).await?;
    aggregate.before_write();
    repository::insert(&aggregate)
        .await
        .map_err(|e| write_error(&aggregate, e))
}

pub async fn update(id: Uuid, dto: SalaryDto) -> ServiceResult<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    aggregate.update(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_staff_exists(&aggregate.staff_id).await?;
    ensure_period_free(&aggregate).await?;
    aggregate.before_write();
    repository::update(&aggregate)
        .await
        .map_err(|e| write_error(&aggregate, e))
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

async fn staff_names() -> ServiceResult<HashMap<String, String>> {
    Ok(a004_staff::repository::list_all()
        .await?
        .into_iter()
        .map(|s| (s.base.id.value().to_string(), s.name))
        .collect())
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Salary> {
    let mut salary = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    salary.staff_name = staff_names().await?.remove(&salary.staff_id);
    Ok(salary)
}

pub async fn list_all() -> ServiceResult<Vec<Salary>> {
    let names = staff_names().await?;
    let mut items = repository::list_all().await?;
    for salary in &mut items {
        salary.staff_name = names.get(&salary.staff_id).cloned();
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;
    use contracts::domain::a004_staff::aggregate::StaffDto;

    async fn new_staff(name: &str) -> String {
        a004_staff::service::create(StaffDto {
            name: name.into(),
            position: "حسابدار".into(),
            base_salary: 9000.0,
            ..Default::default()
        })
        .await
        .unwrap()
        .to_string()
    }

    fn salary(staff_id: &str, month: u8) -> SalaryDto {
        SalaryDto {
            staff_id: staff_id.into(),
            year: "1403".into(),
            month,
            amount: 9000.0,
            paid: 4000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_second_salary_for_the_same_month_conflicts() {
        run(async {
            let staff_id = new_staff("کریم").await;
            create(salary(&staff_id, 2)).await.unwrap();

            let err = create(salary(&staff_id, 2)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Conflict(_)));

            let other = create(salary(&staff_id, 3)).await.unwrap();
            let err = update(other, salary(&staff_id, 2)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Conflict(_)));
        });
    }

    #[test]
    fn test_concurrent_creates_store_one_salary_per_month() {
        run(async {
            let staff_id = new_staff("نادر").await;
            let tasks: Vec<_> = (0..6)
                .map(|_| tokio::spawn(create(salary(&staff_id, 7))))
                .collect();

            let mut created = 0;
            for task in tasks {
                match task.await.unwrap() {
                    Ok(_) => created += 1,
                    Err(e) => assert!(matches!(e, ServiceError::Conflict(_)), "{e:?}"),
                }
            }
            assert_eq!(created, 1);

            let stored = list_all()
                .await
                .unwrap()
                .into_iter()
                .filter(|s| s.staff_id == staff_id)
                .count();
            assert_eq!(stored, 1);
        });
    }

    #[test]
    fn test_deleted_salary_frees_its_month_and_leaves_the_list() {
        run(async {
            let staff_id = new_staff("سلیم").await;
            let id = create(salary(&staff_id, 9)).await.unwrap();
            delete(id).await.unwrap();

            assert!(matches!(get_by_id(id).await, Err(ServiceError::NotFound)));
            assert!(list_all().await.unwrap().iter().all(|s| s.base.id.value() != id));
            assert!(matches!(delete(id).await, Err(ServiceError::NotFound)));

            let again = get_by_id(create(salary(&staff_id, 9)).await.unwrap())
                .await
                .unwrap();
            assert_eq!(again.staff_name.as_deref(), Some("سلیم"));
            assert_eq!(again.remainder, 5000.0);
        });
    }

    #[test]
    fn test_unknown_staff_is_rejected() {
        run(async {
            let err = create(salary(&Uuid::new_v4().to_string(), 1))
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        });
    }
}

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a006_expenditure::aggregate::{Expenditure, ExpenditureDto, ExpenditureList};
use uuid::Uuid;

pub async fn create(dto: ExpenditureDto) -> ServiceResult<Uuid> {
    let mut aggregate = Expenditure::new_for_insert(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(id: Uuid, dto: ExpenditureDto) -> ServiceResult<()> {
    let mut aggregate = get_by_id(id).await?;
    aggregate.update(&dto).map_err(ServiceError::Validation)?;
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

pub async fn get_by_id(id: Uuid) -> ServiceResult<Expenditure> {
    repository::get_by_id(id).await?.ok_or(ServiceError::NotFound)
}

pub async fn list_all() -> ServiceResult<ExpenditureList> {
    Ok(ExpenditureList::new(repository::list_all().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;

    fn dto(category: &str, amount: f64) -> ExpenditureDto {
        ExpenditureDto {
            category: category.into(),
            amount,
            year: "1403".into(),
            month: 4,
            spender: "دفتر".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_total_covers_live_rows_only() {
        run(async {
            let kept = create(dto("برق", 1500.0)).await.unwrap();
            let dropped = create(dto("آب", 700.0)).await.unwrap();
            delete(dropped).await.unwrap();

            let list = list_all().await.unwrap();
            let ids: Vec<_> = list.items.iter().map(|e| e.base.id.value()).collect();
            assert!(ids.contains(&kept));
            assert!(!ids.contains(&dropped));
            assert_eq!(
                list.total_amount,
                list.items.iter().map(|e| e.amount).sum::<f64>()
            );

            let newest_first = list.items.windows(2).all(|w| {
                w[0].base.metadata.created_at >= w[1].base.metadata.created_at
            });
            assert!(newest_first);
        });
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        run(async {
            let err = create(dto("کرایه", 0.0)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        });
    }
}

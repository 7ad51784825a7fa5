use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a007_income::aggregate::{Income, IncomeDto, IncomeList};
use uuid::Uuid;

pub async fn create(dto: IncomeDto) -> ServiceResult<Uuid> {
    let mut aggregate = Income::new_for_insert(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    tracing::info!("Recorded income {} ({})", aggregate.amount, id);
    Ok(id)
}

pub async fn update(id: Uuid, dto: IncomeDto) -> ServiceResult<()> {
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

pub async fn get_by_id(id: Uuid) -> ServiceResult<Income> {
    repository::get_by_id(id).await?.ok_or(ServiceError::NotFound)
}

/// Year, month and creation time descending, with the overall total
pub async fn list_all() -> ServiceResult<IncomeList> {
    Ok(IncomeList::new(repository::list_all().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;

    fn dto(year: &str, month: u8, amount: f64) -> IncomeDto {
        IncomeDto {
            source: "فروش قالین".into(),
            amount,
            year: year.into(),
            month,
            receiver: "صندوق".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_is_newest_period_first_with_total() {
        run(async {
            let march = create(dto("1390", 3, 100.0)).await.unwrap();
            let november = create(dto("1390", 11, 200.0)).await.unwrap();
            let next_year = create(dto("1391", 1, 300.0)).await.unwrap();
            let removed = create(dto("1391", 2, 400.0)).await.unwrap();
            delete(removed).await.unwrap();

            let list = list_all().await.unwrap();
            let order: Vec<_> = list
                .items
                .iter()
                .map(|i| i.base.id.value())
                .filter(|id| [march, november, next_year, removed].contains(id))
                .collect();
            assert_eq!(order, vec![next_year, november, march]);
            assert_eq!(
                list.total_amount,
                list.items.iter().map(|i| i.amount).sum::<f64>()
            );
        });
    }
}

use super::repository;
use crate::domain::a013_unit;
use crate::shared::error::{is_unique_violation, ServiceError, ServiceResult};
use contracts::domain::a014_unit_bill::aggregate::{UnitBill, UnitBillDto, UnitBillView};
use uuid::Uuid;

fn period_taken(aggregate: &UnitBill) -> ServiceError {
    ServiceError::Conflict(format!(
        "بل واحدها برای {} {} قبلا ثبت شده است",
        aggregate.month.display_name(),
        aggregate.year
    ))
}

/// One bill per month
async fn ensure_period_free(aggregate: &UnitBill) -> ServiceResult<()> {
    match repository::find_for_period(&aggregate.year, aggregate.month).await? {
        Some(other) if other.base.id != aggregate.base.id => Err(period_taken(aggregate)),
        _ => Ok(()),
    }
}

fn write_error(aggregate: &UnitBill, e: anyhow::Error) -> ServiceError {
    if is_unique_violation(&e) {
        period_taken(aggregate)
    } else {
        ServiceError::Internal(e)
    }
}

/// Bills every occupied unit, carrying its current meters over as the
/// previous readings
pub async fn create(dto: UnitBillDto) -> ServiceResult<Uuid> {
    let units = a013_unit::repository::list_all().await?;
    let mut aggregate = UnitBill::new_from_units(&dto, &units).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_period_free(&aggregate).await?;
    aggregate.before_write();

    let id = repository::insert(&aggregate)
        .await
        .map_err(|e| write_error(&aggregate, e))?;
    tracing::info!(
        "Created unit bill {} for {}/{} with {} units",
        id,
        aggregate.month.number(),
        aggregate.year,
        aggregate.units.len()
    );
    Ok(id)
}

/// Meter readings changed on the bill are written back to their units
pub async fn update(id: Uuid, dto: UnitBillDto) -> ServiceResult<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    let before = aggregate.units.clone();
    aggregate.update(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_period_free(&aggregate).await?;
    aggregate.before_write();
    repository::update(&aggregate)
        .await
        .map_err(|e| write_error(&aggregate, e))?;

    for (unit_id, line) in &aggregate.units {
        let changed = before.get(unit_id).map_or(false, |old| {
            old.current_water_reading != line.current_water_reading
                || old.current_electricity_reading != line.current_electricity_reading
        });
        if !changed {
            continue;
        }
        let Ok(uuid) = Uuid::parse_str(unit_id) else {
            tracing::warn!("Unit bill {} holds malformed unit id {}", id, unit_id);
            continue;
        };
        a013_unit::repository::set_readings(
            uuid,
            line.current_water_reading,
            line.current_electricity_reading,
        )
        .await?;
    }
    Ok(())
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<UnitBillView> {
    repository::get_by_id(id)
        .await?
        .map(|bill| bill.to_view())
        .ok_or(ServiceError::NotFound)
}

pub async fn list_all() -> ServiceResult<Vec<UnitBillView>> {
    Ok(repository::list_all()
        .await?
        .iter()
        .map(UnitBill::to_view)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;
    use contracts::domain::a013_unit::aggregate::{UnitDto, UnitStatus};
    use contracts::domain::a014_unit_bill::aggregate::UnitBillLineUpdate;

    async fn unit(number: &str, status: UnitStatus) -> String {
        a013_unit::service::create(UnitDto {
            unit_number: number.into(),
            customer_name: "ناصر".into(),
            service_charge: 400.0,
            current_water_reading: 30.0,
            current_electricity_reading: 210.0,
            status,
            ..Default::default()
        })
        .await
        .unwrap()
        .to_string()
    }

    fn period(month: u8) -> UnitBillDto {
        UnitBillDto {
            year: "1399".into(),
            month,
            ..Default::default()
        }
    }

    #[test]
    fn test_bill_covers_occupied_units_and_moves_meters() {
        run(async {
            let occupied = unit("501", UnitStatus::Occupied).await;
            let repairing = unit("502", UnitStatus::Maintenance).await;

            let id = create(period(3)).await.unwrap();
            let bill = get_by_id(id).await.unwrap();
            assert!(!bill.units.contains_key(&repairing));
            let line = &bill.units[&occupied];
            assert_eq!(line.previous_water_reading, 30.0);
            assert_eq!(line.current_water_reading, 30.0);
            assert_eq!(line.service_charge, 400.0);

            let mut edit = period(3);
            edit.units.insert(
                occupied.clone(),
                UnitBillLineUpdate {
                    current_water_reading: Some(41.0),
                    ..Default::default()
                },
            );
            update(id, edit).await.unwrap();

            let stored = a013_unit::service::get_by_id(Uuid::parse_str(&occupied).unwrap())
                .await
                .unwrap();
            assert_eq!(stored.current_water_reading, 41.0);
            assert_eq!(stored.current_electricity_reading, 210.0);

            let bill = get_by_id(id).await.unwrap();
            assert_eq!(bill.total, bill.units.values().map(|l| l.totals).sum::<f64>());
        });
    }

    #[test]
    fn test_second_bill_for_a_month_conflicts() {
        run(async {
            create(period(7)).await.unwrap();
            let err = create(period(7)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Conflict(_)));

            let other = create(period(8)).await.unwrap();
            let err = update(other, period(7)).await.unwrap_err();
            assert!(matches!(err, ServiceError::Conflict(_)));
        });
    }
}

use super::repository;
use crate::domain::{a009_customer, a010_agreement};
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a011_rent::aggregate::{Rent, RentDto, RentView};
use contracts::enums::floor::Floor;
use uuid::Uuid;

/// Creates a sheet from the floor's active agreements
pub async fn create(dto: RentDto) -> ServiceResult<Uuid> {
    let floor = Floor::from_number(dto.floor).map_err(ServiceError::Validation)?;
    let agreements = a010_agreement::service::list_active_by_floor(floor).await?;

    let mut aggregate =
        Rent::new_from_agreements(&dto, &agreements).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    tracing::info!(
        "Created rent sheet {} for {} {}/{} with {} customers",
        id,
        floor.display_name(),
        aggregate.month.number(),
        aggregate.year,
        aggregate.customers.len()
    );
    Ok(id)
}

pub async fn update(id: Uuid, dto: RentDto) -> ServiceResult<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
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

/// Refreshes customer names on the rows from the current customer list
fn fill_names(rent: &mut Rent, names: &std::collections::HashMap<String, String>) {
    for (customer_id, line) in rent.customers.iter_mut() {
        if let Some(name) = names.get(customer_id) {
            line.customer_name = Some(name.clone());
        }
    }
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<RentView> {
    let mut rent = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    fill_names(&mut rent, &a009_customer::service::names().await?);
    Ok(rent.to_view())
}

pub async fn list_all() -> ServiceResult<Vec<RentView>> {
    let names = a009_customer::service::names().await?;
    Ok(repository::list_all()
        .await?
        .into_iter()
        .map(|mut rent| {
            fill_names(&mut rent, &names);
            rent.to_view()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;
    use crate::shared::upload::MultipartForm;
    use contracts::domain::a010_agreement::aggregate::{AgreementDto, AgreementStatus};
    use contracts::domain::a011_rent::aggregate::RentLineUpdate;

    async fn customer(name: &str) -> String {
        let mut form = MultipartForm::default();
        for (key, value) in [("name", name), ("phone_number", "0799000111"), ("nic", "77-12")] {
            form.fields.insert(key.into(), value.into());
        }
        a009_customer::service::create(form).await.unwrap().to_string()
    }

    async fn agreement(customer_id: &str, status: AgreementStatus, rent: f64) {
        a010_agreement::service::create(AgreementDto {
            customer_id: customer_id.into(),
            status,
            shops: vec!["5-14".into()],
            rent,
            floor: 5,
            ..Default::default()
        })
        .await
        .unwrap();
    }

    #[test]
    fn test_sheet_snapshots_active_agreements_of_the_floor() {
        run(async {
            let tenant = customer("غلام").await;
            let former = customer("یوسف").await;
            agreement(&tenant, AgreementStatus::Active, 4200.0).await;
            agreement(&former, AgreementStatus::InActive, 3100.0).await;

            let id = create(RentDto {
                year: "1404".into(),
                month: 2,
                floor: 5,
                ..Default::default()
            })
            .await
            .unwrap();

            let sheet = get_by_id(id).await.unwrap();
            let line = &sheet.customers[&tenant];
            assert_eq!(line.rent, 4200.0);
            assert_eq!(line.taken, 0.0);
            assert_eq!(line.remainder, 4200.0);
            assert_eq!(line.shop.as_deref(), Some("5-14"));
            assert_eq!(line.customer_name.as_deref(), Some("غلام"));
            assert!(!sheet.customers.contains_key(&former));

            let mut edit = RentDto {
                year: "1404".into(),
                month: 2,
                floor: 5,
                ..Default::default()
            };
            edit.customers.insert(
                tenant.clone(),
                RentLineUpdate {
                    rent: None,
                    taken: Some(1200.0),
                },
            );
            update(id, edit).await.unwrap();
            let sheet = get_by_id(id).await.unwrap();
            assert_eq!(sheet.customers[&tenant].remainder, 3000.0);
            assert_eq!(sheet.total_remainder, sheet.total - sheet.total_taken);
        });
    }

    #[test]
    fn test_unknown_floor_is_rejected() {
        run(async {
            let err = create(RentDto {
                year: "1404".into(),
                floor: 9,
                ..Default::default()
            })
            .await
            .unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
        });
    }
}

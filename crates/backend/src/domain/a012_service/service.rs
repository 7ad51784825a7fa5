use super::repository;
use crate::domain::{a009_customer, a010_agreement};
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a012_service::aggregate::{ServiceSheet, ServiceSheetDto, ServiceSheetView};
use contracts::enums::floor::Floor;
use std::collections::HashMap;
use uuid::Uuid;

/// Creates a sheet charging every active agreement of the floor its service fee
pub async fn create(dto: ServiceSheetDto) -> ServiceResult<Uuid> {
    let floor = Floor::from_number(dto.floor).map_err(ServiceError::Validation)?;
    let agreements = a010_agreement::service::list_active_by_floor(floor).await?;

    let mut aggregate =
        ServiceSheet::new_from_agreements(&dto, &agreements).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    tracing::info!(
        "Created services sheet {} for {} {}/{} ({} customers, total {})",
        id,
        floor.display_name(),
        aggregate.month.number(),
        aggregate.year,
        aggregate.customers.len(),
        aggregate.total
    );
    Ok(id)
}

pub async fn update(id: Uuid, dto: ServiceSheetDto) -> ServiceResult<()> {
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

fn fill_names(sheet: &mut ServiceSheet, names: &HashMap<String, String>) {
    for (customer_id, line) in sheet.customers.iter_mut() {
        if let Some(name) = names.get(customer_id) {
            line.customer_name = Some(name.clone());
        }
    }
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<ServiceSheetView> {
    let mut sheet = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    fill_names(&mut sheet, &a009_customer::service::names().await?);
    Ok(sheet.to_view())
}

pub async fn list_all() -> ServiceResult<Vec<ServiceSheetView>> {
    let names = a009_customer::service::names().await?;
    Ok(repository::list_all()
        .await?
        .into_iter()
        .map(|mut sheet| {
            fill_names(&mut sheet, &names);
            sheet.to_view()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::run;
    use crate::shared::upload::MultipartForm;
    use contracts::domain::a010_agreement::aggregate::{AgreementDto, AgreementStatus};
    use contracts::domain::a012_service::aggregate::ServiceLineUpdate;

    async fn tenant(name: &str, status: AgreementStatus, service: f64) -> String {
        let mut form = MultipartForm::default();
        for (key, value) in [("name", name), ("phone_number", "0788555444"), ("nic", "44-90")] {
            form.fields.insert(key.into(), value.into());
        }
        let id = a009_customer::service::create(form).await.unwrap().to_string();
        a010_agreement::service::create(AgreementDto {
            customer_id: id.clone(),
            status,
            shops: vec!["4-07".into()],
            rent: 6000.0,
            service,
            floor: 4,
            ..Default::default()
        })
        .await
        .unwrap();
        id
    }

    fn period() -> ServiceSheetDto {
        ServiceSheetDto {
            year: "1404".into(),
            month: 6,
            floor: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_sheet_charges_active_tenants_and_tracks_collection() {
        run(async {
            let paying = tenant("مجید", AgreementStatus::Active, 750.0).await;
            let gone = tenant("قادر", AgreementStatus::InActive, 900.0).await;

            let id = create(period()).await.unwrap();
            let sheet = get_by_id(id).await.unwrap();
            let line = &sheet.customers[&paying];
            assert_eq!((line.service, line.taken, line.remainder), (750.0, 0.0, 750.0));
            assert_eq!(line.customer_name.as_deref(), Some("مجید"));
            assert!(!sheet.customers.contains_key(&gone));

            let mut edit = period();
            edit.is_approved = true;
            edit.customers.insert(
                paying.clone(),
                ServiceLineUpdate {
                    taken: Some(750.0),
                    ..Default::default()
                },
            );
            update(id, edit).await.unwrap();

            let sheet = get_by_id(id).await.unwrap();
            assert!(sheet.is_approved);
            assert_eq!(sheet.customers[&paying].remainder, 0.0);
            assert!(sheet.customers[&paying].is_approved);

            delete(id).await.unwrap();
            assert!(list_all().await.unwrap().iter().all(|s| s.id != id.to_string()));
        });
    }
}

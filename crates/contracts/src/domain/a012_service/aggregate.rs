use crate::domain::a010_agreement::aggregate::Agreement;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::floor::Floor;
use crate::enums::solar_month::{is_valid_year, SolarMonth};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

crate::aggregate_id!(
    /// Unique services sheet identifier
    ServiceSheetId
);

/// One tenant's service charge on a sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub service: f64,
    pub taken: f64,
    /// Always `service - taken`
    pub remainder: f64,
    pub is_approved: bool,
    pub shop: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceLineUpdate {
    pub service: Option<f64>,
    pub taken: Option<f64>,
    /// Falls back to the sheet's own approval
    pub is_approved: Option<bool>,
}

/// Monthly service-charge collection for one floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSheet {
    #[serde(flatten)]
    pub base: BaseAggregate<ServiceSheetId>,

    pub year: String,
    pub month: SolarMonth,
    pub floor: Floor,
    pub is_approved: bool,
    /// Keyed by customer id
    pub customers: BTreeMap<String, ServiceLine>,
    /// Sum of `service` over all rows
    pub total: f64,
}

impl ServiceSheet {
    /// Snapshot of the floor's active agreements, each charged its agreed
    /// service fee with nothing collected yet.
    pub fn new_from_agreements(
        dto: &ServiceSheetDto,
        agreements: &[Agreement],
    ) -> Result<Self, String> {
        let floor = Floor::from_number(dto.floor)?;
        let mut customers: BTreeMap<String, ServiceLine> = BTreeMap::new();

        for agreement in agreements
            .iter()
            .filter(|a| a.is_active() && a.floor == floor && !a.customer_id.is_empty())
        {
            let shop = Some(agreement.shops_label()).filter(|s| !s.is_empty());
            customers
                .entry(agreement.customer_id.clone())
                .and_modify(|line| {
                    line.service += agreement.service;
                    line.shop = match (line.shop.take(), shop.clone()) {
                        (Some(a), Some(b)) => Some(format!("{}, {}", a, b)),
                        (a, b) => a.or(b),
                    };
                })
                .or_insert_with(|| ServiceLine {
                    service: agreement.service,
                    taken: 0.0,
                    remainder: agreement.service,
                    is_approved: dto.is_approved,
                    shop,
                    customer_name: agreement.customer_name.clone(),
                });
        }

        let mut sheet = Self {
            base: BaseAggregate::new(ServiceSheetId::new_v4()),
            year: dto.year.trim().to_string(),
            month: SolarMonth::from_number(dto.month)?,
            floor,
            is_approved: dto.is_approved,
            customers,
            total: 0.0,
        };
        sheet.recalculate();
        Ok(sheet)
    }

    pub fn update(&mut self, dto: &ServiceSheetDto) -> Result<(), String> {
        self.year = dto.year.trim().to_string();
        self.month = SolarMonth::from_number(dto.month)?;
        self.floor = Floor::from_number(dto.floor)?;
        self.is_approved = dto.is_approved;

        for (customer_id, change) in &dto.customers {
            let line = self
                .customers
                .entry(customer_id.clone())
                .or_insert_with(|| ServiceLine {
                    service: 0.0,
                    taken: 0.0,
                    remainder: 0.0,
                    is_approved: false,
                    shop: None,
                    customer_name: None,
                });
            if let Some(service) = change.service {
                line.service = service;
            }
            if let Some(taken) = change.taken {
                line.taken = taken;
            }
            line.is_approved = change.is_approved.unwrap_or(dto.is_approved);
        }
        self.recalculate();
        Ok(())
    }

    pub fn recalculate(&mut self) {
        for line in self.customers.values_mut() {
            line.remainder = line.service - line.taken;
        }
        self.total = self.customers.values().map(|l| l.service).sum();
    }

    pub fn total_taken(&self) -> f64 {
        self.customers.values().map(|l| l.taken).sum()
    }

    pub fn total_remainder(&self) -> f64 {
        self.customers.values().map(|l| l.remainder).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_year(&self.year) {
            return Err("سال باید چهار رقم باشد".into());
        }
        if self
            .customers
            .values()
            .any(|l| !(l.service >= 0.0) || !(l.taken >= 0.0))
        {
            return Err("مبالغ نمی‌تواند منفی باشد".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.recalculate();
        self.base.before_write();
    }

    /// Newest period first, then by floor
    pub fn list_order(a: &ServiceSheet, b: &ServiceSheet) -> Ordering {
        b.year
            .cmp(&a.year)
            .then(b.month.cmp(&a.month))
            .then(a.floor.cmp(&b.floor))
    }

    pub fn to_view(&self) -> ServiceSheetView {
        ServiceSheetView {
            id: self.base.id.as_string(),
            year: self.year.clone(),
            month: self.month.number(),
            floor: self.floor.number(),
            is_approved: self.is_approved,
            customers: self.customers.clone(),
            total: self.total,
            total_taken: self.total_taken(),
            total_remainder: self.total_remainder(),
            created_at: self.base.metadata.created_at,
            updated_at: self.base.metadata.updated_at,
        }
    }
}

impl AggregateRoot for ServiceSheet {
    type Id = ServiceSheetId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "services"
    }

    fn element_name() -> &'static str {
        "خدمات"
    }

    fn list_name() -> &'static str {
        "خدمات منزل ها"
    }
}

/// On create `customers` is ignored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSheetDto {
    pub id: Option<String>,
    pub year: String,
    pub month: u8,
    pub floor: u8,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub customers: BTreeMap<String, ServiceLineUpdate>,
}

impl Default for ServiceSheetDto {
    fn default() -> Self {
        Self {
            id: None,
            year: String::new(),
            month: 1,
            floor: 1,
            is_approved: false,
            customers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSheetView {
    pub id: String,
    pub year: String,
    pub month: u8,
    pub floor: u8,
    pub is_approved: bool,
    pub customers: BTreeMap<String, ServiceLine>,
    pub total: f64,
    pub total_taken: f64,
    pub total_remainder: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a010_agreement::aggregate::{AgreementDto, AgreementStatus};

    fn agreement(customer: &str, floor: u8, service: f64, status: AgreementStatus) -> Agreement {
        Agreement::new_for_insert(&AgreementDto {
            customer_id: customer.into(),
            status,
            shops: vec![format!("{}-{}", floor, customer)],
            rent: 9000.0,
            service,
            floor,
            ..Default::default()
        })
        .unwrap()
    }

    fn dto(floor: u8, is_approved: bool) -> ServiceSheetDto {
        ServiceSheetDto {
            year: "1403".into(),
            month: 8,
            floor,
            is_approved,
            ..Default::default()
        }
    }

    #[test]
    fn test_snapshot_charges_the_agreed_service_fee() {
        let agreements = vec![
            agreement("a", 4, 800.0, AgreementStatus::Active),
            agreement("b", 4, 650.0, AgreementStatus::Active),
            agreement("c", 4, 999.0, AgreementStatus::InActive),
            agreement("d", 1, 400.0, AgreementStatus::Active),
        ];
        let sheet = ServiceSheet::new_from_agreements(&dto(4, true), &agreements).unwrap();

        assert_eq!(sheet.customers.len(), 2);
        assert_eq!(sheet.total, 1450.0);
        let a = &sheet.customers["a"];
        assert_eq!((a.service, a.taken, a.remainder), (800.0, 0.0, 800.0));
        assert!(a.is_approved);
        assert_eq!(a.shop.as_deref(), Some("4-a"));
    }

    #[test]
    fn test_update_recomputes_and_defaults_row_approval_to_the_sheet() {
        let agreements = vec![
            agreement("a", 2, 800.0, AgreementStatus::Active),
            agreement("b", 2, 500.0, AgreementStatus::Active),
        ];
        let mut sheet = ServiceSheet::new_from_agreements(&dto(2, false), &agreements).unwrap();

        let mut edit = dto(2, true);
        edit.customers.insert(
            "a".into(),
            ServiceLineUpdate {
                taken: Some(300.0),
                ..Default::default()
            },
        );
        edit.customers.insert(
            "b".into(),
            ServiceLineUpdate {
                service: Some(600.0),
                taken: Some(600.0),
                is_approved: Some(false),
            },
        );
        sheet.update(&edit).unwrap();

        assert!(sheet.is_approved);
        assert!(sheet.customers["a"].is_approved);
        assert!(!sheet.customers["b"].is_approved);
        assert_eq!(sheet.customers["a"].remainder, 500.0);
        assert_eq!(sheet.total, 1400.0);
        assert_eq!(sheet.total_taken(), 900.0);
        assert_eq!(sheet.total_remainder(), 500.0);
    }

    #[test]
    fn test_negative_collection_is_rejected() {
        let mut sheet = ServiceSheet::new_from_agreements(&dto(3, false), &[]).unwrap();
        let mut edit = dto(3, false);
        edit.customers.insert(
            "x".into(),
            ServiceLineUpdate {
                taken: Some(-5.0),
                ..Default::default()
            },
        );
        sheet.update(&edit).unwrap();
        assert!(sheet.validate().is_err());
    }
}

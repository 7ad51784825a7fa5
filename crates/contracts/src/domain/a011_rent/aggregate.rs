use crate::domain::a010_agreement::aggregate::Agreement;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::floor::Floor;
use crate::enums::solar_month::{is_valid_year, SolarMonth};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

crate::aggregate_id!(
    /// Unique rent sheet identifier
    RentId
);

/// One tenant's row on a rent sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentLine {
    pub rent: f64,
    pub taken: f64,
    /// Always `rent - taken`
    pub remainder: f64,
    pub shop: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

/// Client edit of a single row; missing values keep the stored ones
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentLineUpdate {
    pub rent: Option<f64>,
    pub taken: Option<f64>,
}

/// Monthly rent collection sheet for one floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rent {
    #[serde(flatten)]
    pub base: BaseAggregate<RentId>,

    pub year: String,
    pub month: SolarMonth,
    pub floor: Floor,
    /// Keyed by customer id
    pub customers: BTreeMap<String, RentLine>,
    /// Sum of `rent` over all rows
    pub total: f64,
}

impl Rent {
    /// Builds a new sheet from the agreements of the floor.
    ///
    /// Only active agreements on `dto.floor` are taken; every row starts
    /// with nothing collected. Two agreements of the same customer on one
    /// floor are merged into a single row.
    pub fn new_from_agreements(dto: &RentDto, agreements: &[Agreement]) -> Result<Self, String> {
        let floor = Floor::from_number(dto.floor)?;
        let mut customers: BTreeMap<String, RentLine> = BTreeMap::new();

        for agreement in agreements
            .iter()
            .filter(|a| a.is_active() && a.floor == floor && !a.customer_id.is_empty())
        {
            let shop = Some(agreement.shops_label()).filter(|s| !s.is_empty());
            customers
                .entry(agreement.customer_id.clone())
                .and_modify(|line| {
                    line.rent += agreement.rent;
                    line.shop = match (line.shop.take(), shop.clone()) {
                        (Some(a), Some(b)) => Some(format!("{}, {}", a, b)),
                        (a, b) => a.or(b),
                    };
                })
                .or_insert_with(|| RentLine {
                    rent: agreement.rent,
                    taken: 0.0,
                    remainder: agreement.rent,
                    shop,
                    customer_name: agreement.customer_name.clone(),
                });
        }

        let mut rent = Self {
            base: BaseAggregate::new(RentId::new_v4()),
            year: dto.year.trim().to_string(),
            month: SolarMonth::from_number(dto.month)?,
            floor,
            customers,
            total: 0.0,
        };
        rent.recalculate();
        Ok(rent)
    }

    /// Applies period changes and per-customer edits, then recomputes.
    pub fn update(&mut self, dto: &RentDto) -> Result<(), String> {
        self.year = dto.year.trim().to_string();
        self.month = SolarMonth::from_number(dto.month)?;
        self.floor = Floor::from_number(dto.floor)?;

        for (customer_id, change) in &dto.customers {
            let line = self
                .customers
                .entry(customer_id.clone())
                .or_insert_with(|| RentLine {
                    rent: 0.0,
                    taken: 0.0,
                    remainder: 0.0,
                    shop: None,
                    customer_name: None,
                });
            if let Some(rent) = change.rent {
                line.rent = rent;
            }
            if let Some(taken) = change.taken {
                line.taken = taken;
            }
        }
        self.recalculate();
        Ok(())
    }

    pub fn recalculate(&mut self) {
        for line in self.customers.values_mut() {
            line.remainder = line.rent - line.taken;
        }
        self.total = self.customers.values().map(|l| l.rent).sum();
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
            .any(|l| !(l.rent >= 0.0) || !(l.taken >= 0.0))
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
    pub fn list_order(a: &Rent, b: &Rent) -> Ordering {
        b.year
            .cmp(&a.year)
            .then(b.month.cmp(&a.month))
            .then(a.floor.cmp(&b.floor))
    }

    pub fn to_view(&self) -> RentView {
        RentView {
            id: self.base.id.as_string(),
            year: self.year.clone(),
            month: self.month.number(),
            floor: self.floor.number(),
            customers: self.customers.clone(),
            total: self.total,
            total_taken: self.total_taken(),
            total_remainder: self.total_remainder(),
            created_at: self.base.metadata.created_at,
            updated_at: self.base.metadata.updated_at,
        }
    }
}

impl AggregateRoot for Rent {
    type Id = RentId;

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
        "a011"
    }

    fn collection_name() -> &'static str {
        "rent"
    }

    fn element_name() -> &'static str {
        "کرایه"
    }

    fn list_name() -> &'static str {
        "کرایه ها"
    }
}

/// Create/update payload. On create `customers` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentDto {
    pub id: Option<String>,
    pub year: String,
    pub month: u8,
    pub floor: u8,
    #[serde(default)]
    pub customers: BTreeMap<String, RentLineUpdate>,
}

impl Default for RentDto {
    fn default() -> Self {
        Self {
            id: None,
            year: String::new(),
            month: 1,
            floor: 1,
            customers: BTreeMap::new(),
        }
    }
}

/// Rent sheet as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentView {
    pub id: String,
    pub year: String,
    pub month: u8,
    pub floor: u8,
    pub customers: BTreeMap<String, RentLine>,
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

    fn agreement(customer: &str, floor: u8, rent: f64, status: AgreementStatus) -> Agreement {
        Agreement::new_for_insert(&AgreementDto {
            customer_id: customer.into(),
            status,
            shops: vec![format!("{}-{}", floor, customer)],
            rent,
            floor,
            ..Default::default()
        })
        .unwrap()
    }

    fn dto(floor: u8) -> RentDto {
        RentDto {
            year: "1403".into(),
            month: 3,
            floor,
            ..Default::default()
        }
    }

    #[test]
    fn test_snapshot_takes_active_agreements_of_floor() {
        let agreements = vec![
            agreement("a", 2, 3000.0, AgreementStatus::Active),
            agreement("b", 2, 2500.0, AgreementStatus::Active),
            agreement("c", 2, 9999.0, AgreementStatus::InActive),
            agreement("d", 3, 4000.0, AgreementStatus::Active),
        ];
        let rent = Rent::new_from_agreements(&dto(2), &agreements).unwrap();

        assert_eq!(rent.customers.len(), 2);
        assert_eq!(rent.total, 5500.0);
        let a = &rent.customers["a"];
        assert_eq!(a.taken, 0.0);
        assert_eq!(a.remainder, 3000.0);
        assert_eq!(a.shop.as_deref(), Some("2-a"));
        assert_eq!(rent.total_remainder(), 5500.0);
    }

    #[test]
    fn test_snapshot_empty_floor() {
        let agreements = vec![agreement("a", 1, 100.0, AgreementStatus::Active)];
        let rent = Rent::new_from_agreements(&dto(6), &agreements).unwrap();
        assert!(rent.customers.is_empty());
        assert_eq!(rent.total, 0.0);
    }

    #[test]
    fn test_same_customer_merged() {
        let agreements = vec![
            agreement("a", 1, 100.0, AgreementStatus::Active),
            agreement("a", 1, 50.0, AgreementStatus::Active),
        ];
        let rent = Rent::new_from_agreements(&dto(1), &agreements).unwrap();
        assert_eq!(rent.customers.len(), 1);
        assert_eq!(rent.customers["a"].rent, 150.0);
        assert_eq!(rent.customers["a"].shop.as_deref(), Some("1-a, 1-a"));
    }

    #[test]
    fn test_update_recomputes_remainder_and_total() {
        let agreements = vec![
            agreement("a", 1, 3000.0, AgreementStatus::Active),
            agreement("b", 1, 2000.0, AgreementStatus::Active),
        ];
        let mut rent = Rent::new_from_agreements(&dto(1), &agreements).unwrap();

        let mut edit = dto(1);
        edit.customers.insert(
            "a".into(),
            RentLineUpdate {
                rent: None,
                taken: Some(1200.0),
            },
        );
        edit.customers.insert(
            "b".into(),
            RentLineUpdate {
                rent: Some(2200.0),
                taken: Some(2200.0),
            },
        );
        rent.update(&edit).unwrap();

        assert_eq!(rent.customers["a"].remainder, 1800.0);
        assert_eq!(rent.customers["a"].shop.as_deref(), Some("1-a"));
        assert_eq!(rent.customers["b"].remainder, 0.0);
        assert_eq!(rent.total, 5200.0);
        assert_eq!(rent.total_taken(), 3400.0);
        assert_eq!(rent.total_remainder(), 1800.0);
    }

    #[test]
    fn test_list_order() {
        let agreements: Vec<Agreement> = vec![];
        let mk = |year: &str, month: u8, floor: u8| {
            Rent::new_from_agreements(
                &RentDto {
                    year: year.into(),
                    month,
                    floor,
                    ..Default::default()
                },
                &agreements,
            )
            .unwrap()
        };
        let mut sheets = vec![mk("1402", 12, 1), mk("1403", 1, 2), mk("1403", 1, 1), mk("1403", 4, 5)];
        sheets.sort_by(Rent::list_order);
        let keys: Vec<_> = sheets
            .iter()
            .map(|r| (r.year.clone(), r.month.number(), r.floor.number()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("1403".to_string(), 4, 5),
                ("1403".to_string(), 1, 1),
                ("1403".to_string(), 1, 2),
                ("1402".to_string(), 12, 1),
            ]
        );
    }
}

use crate::domain::a013_unit::aggregate::{Unit, UnitStatus};
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::solar_month::{is_valid_year, SolarMonth};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

crate::aggregate_id!(
    /// Unique monthly unit bill identifier
    UnitBillId
);

/// One unit's row on a monthly bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitBillLine {
    pub unit_number: String,
    pub customer_name: String,
    pub customer_father_name: String,
    pub services_description: String,
    pub service_charge: f64,
    pub previous_water_reading: f64,
    pub current_water_reading: f64,
    pub previous_electricity_reading: f64,
    pub current_electricity_reading: f64,
    pub water_price: f64,
    pub electricity_price: f64,
    pub taken: f64,
    /// `service_charge + water_price + electricity_price`
    pub totals: f64,
    /// `totals - taken`
    pub remainder: f64,
    pub description: String,
}

impl UnitBillLine {
    fn from_unit(unit: &Unit) -> Self {
        let mut line = Self {
            unit_number: unit.unit_number.clone(),
            customer_name: unit.customer_name.clone(),
            customer_father_name: unit.customer_father_name.clone(),
            services_description: unit.services_description.clone(),
            service_charge: unit.service_charge,
            previous_water_reading: unit.current_water_reading,
            current_water_reading: unit.current_water_reading,
            previous_electricity_reading: unit.current_electricity_reading,
            current_electricity_reading: unit.current_electricity_reading,
            water_price: 0.0,
            electricity_price: 0.0,
            taken: 0.0,
            totals: 0.0,
            remainder: 0.0,
            description: String::new(),
        };
        line.recalculate();
        line
    }

    fn recalculate(&mut self) {
        self.totals = self.service_charge + self.water_price + self.electricity_price;
        self.remainder = self.totals - self.taken;
    }

    fn amounts(&self) -> [f64; 8] {
        [
            self.service_charge,
            self.water_price,
            self.electricity_price,
            self.taken,
            self.previous_water_reading,
            self.current_water_reading,
            self.previous_electricity_reading,
            self.current_electricity_reading,
        ]
    }
}

/// Edit of one row; missing values keep the stored ones
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitBillLineUpdate {
    pub service_charge: Option<f64>,
    pub water_price: Option<f64>,
    pub electricity_price: Option<f64>,
    pub taken: Option<f64>,
    pub previous_water_reading: Option<f64>,
    pub current_water_reading: Option<f64>,
    pub previous_electricity_reading: Option<f64>,
    pub current_electricity_reading: Option<f64>,
    pub description: Option<String>,
}

/// Monthly bill over every occupied unit, one per period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitBill {
    #[serde(flatten)]
    pub base: BaseAggregate<UnitBillId>,

    pub year: String,
    pub month: SolarMonth,
    /// Keyed by unit id
    pub units: BTreeMap<String, UnitBillLine>,
    /// Sum of `totals` over all rows
    pub total: f64,
}

impl UnitBill {
    /// Snapshot of the occupied units; last month's readings become the
    /// previous readings of every row.
    pub fn new_from_units(dto: &UnitBillDto, units: &[Unit]) -> Result<Self, String> {
        let units = units
            .iter()
            .filter(|u| u.status == UnitStatus::Occupied)
            .map(|u| (u.base.id.as_string(), UnitBillLine::from_unit(u)))
            .collect();

        let mut bill = Self {
            base: BaseAggregate::new(UnitBillId::new_v4()),
            year: dto.year.trim().to_string(),
            month: SolarMonth::from_number(dto.month)?,
            units,
            total: 0.0,
        };
        bill.recalculate();
        Ok(bill)
    }

    /// Applies the period and the row edits. Rows of units that are not on
    /// the bill are ignored.
    pub fn update(&mut self, dto: &UnitBillDto) -> Result<(), String> {
        self.year = dto.year.trim().to_string();
        self.month = SolarMonth::from_number(dto.month)?;

        for (unit_id, change) in &dto.units {
            let Some(line) = self.units.get_mut(unit_id) else {
                continue;
            };
            let fields = [
                (&mut line.service_charge, change.service_charge),
                (&mut line.water_price, change.water_price),
                (&mut line.electricity_price, change.electricity_price),
                (&mut line.taken, change.taken),
                (&mut line.previous_water_reading, change.previous_water_reading),
                (&mut line.current_water_reading, change.current_water_reading),
                (&mut line.previous_electricity_reading, change.previous_electricity_reading),
                (&mut line.current_electricity_reading, change.current_electricity_reading),
            ];
            for (field, value) in fields {
                if let Some(v) = value {
                    *field = v;
                }
            }
            if let Some(description) = &change.description {
                line.description = description.clone();
            }
        }
        self.recalculate();
        Ok(())
    }

    pub fn recalculate(&mut self) {
        for line in self.units.values_mut() {
            line.recalculate();
        }
        self.total = self.units.values().map(|l| l.totals).sum();
    }

    pub fn total_taken(&self) -> f64 {
        self.units.values().map(|l| l.taken).sum()
    }

    pub fn total_remainder(&self) -> f64 {
        self.units.values().map(|l| l.remainder).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_year(&self.year) {
            return Err("سال باید چهار رقم باشد".into());
        }
        if self
            .units
            .values()
            .any(|l| l.amounts().iter().any(|v| !(*v >= 0.0)))
        {
            return Err("مبالغ و میترها نمی‌تواند منفی باشد".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.recalculate();
        self.base.before_write();
    }

    /// Newest period first
    pub fn list_order(a: &UnitBill, b: &UnitBill) -> Ordering {
        b.year.cmp(&a.year).then(b.month.cmp(&a.month))
    }

    pub fn to_view(&self) -> UnitBillView {
        UnitBillView {
            id: self.base.id.as_string(),
            year: self.year.clone(),
            month: self.month.number(),
            units: self.units.clone(),
            total: self.total,
            total_taken: self.total_taken(),
            total_remainder: self.total_remainder(),
            created_at: self.base.metadata.created_at,
            updated_at: self.base.metadata.updated_at,
        }
    }
}

impl AggregateRoot for UnitBill {
    type Id = UnitBillId;

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
        "a014"
    }

    fn collection_name() -> &'static str {
        "unit_bills"
    }

    fn element_name() -> &'static str {
        "بل واحدها"
    }

    fn list_name() -> &'static str {
        "خدمات واحدها"
    }
}

/// On create `units` is ignored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitBillDto {
    pub id: Option<String>,
    pub year: String,
    pub month: u8,
    #[serde(default)]
    pub units: BTreeMap<String, UnitBillLineUpdate>,
}

impl Default for UnitBillDto {
    fn default() -> Self {
        Self {
            id: None,
            year: String::new(),
            month: 1,
            units: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitBillView {
    pub id: String,
    pub year: String,
    pub month: u8,
    pub units: BTreeMap<String, UnitBillLine>,
    pub total: f64,
    pub total_taken: f64,
    pub total_remainder: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a013_unit::aggregate::UnitDto;

    fn unit(number: &str, status: UnitStatus, charge: f64) -> Unit {
        Unit::new_for_insert(&UnitDto {
            unit_number: number.into(),
            customer_name: "رسول".into(),
            service_charge: charge,
            current_water_reading: 120.0,
            current_electricity_reading: 3400.0,
            status,
            ..Default::default()
        })
    }

    fn dto() -> UnitBillDto {
        UnitBillDto {
            year: "1403".into(),
            month: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_snapshot_bills_occupied_units_only() {
        let units = vec![
            unit("1", UnitStatus::Occupied, 1000.0),
            unit("2", UnitStatus::Vacant, 800.0),
            unit("3", UnitStatus::Maintenance, 700.0),
            unit("4", UnitStatus::Occupied, 1500.0),
        ];
        let bill = UnitBill::new_from_units(&dto(), &units).unwrap();

        assert_eq!(bill.units.len(), 2);
        assert_eq!(bill.total, 2500.0);
        let first = &bill.units[&units[0].base.id.as_string()];
        assert_eq!(first.previous_water_reading, 120.0);
        assert_eq!(first.current_electricity_reading, 3400.0);
        assert_eq!((first.totals, first.remainder), (1000.0, 1000.0));
    }

    #[test]
    fn test_update_adds_utilities_and_collection() {
        let units = vec![unit("1", UnitStatus::Occupied, 1000.0)];
        let key = units[0].base.id.as_string();
        let mut bill = UnitBill::new_from_units(&dto(), &units).unwrap();

        let mut edit = dto();
        edit.units.insert(
            key.clone(),
            UnitBillLineUpdate {
                water_price: Some(250.0),
                electricity_price: Some(900.0),
                taken: Some(2000.0),
                current_water_reading: Some(131.0),
                description: Some("نیمه پرداخت".into()),
                ..Default::default()
            },
        );
        edit.units.insert("not-on-bill".into(), UnitBillLineUpdate::default());
        bill.update(&edit).unwrap();

        let line = &bill.units[&key];
        assert_eq!(line.totals, 2150.0);
        assert_eq!(line.remainder, 150.0);
        assert_eq!(line.previous_water_reading, 120.0);
        assert_eq!(line.current_water_reading, 131.0);
        assert_eq!(line.description, "نیمه پرداخت");
        assert_eq!(bill.units.len(), 1);
        assert_eq!(bill.total, 2150.0);
        assert_eq!(bill.total_taken(), 2000.0);
        assert_eq!(bill.total_remainder(), 150.0);
    }

    #[test]
    fn test_negative_reading_is_rejected() {
        let units = vec![unit("1", UnitStatus::Occupied, 1000.0)];
        let key = units[0].base.id.as_string();
        let mut bill = UnitBill::new_from_units(&dto(), &units).unwrap();
        let mut edit = dto();
        edit.units.insert(
            key,
            UnitBillLineUpdate {
                current_electricity_reading: Some(-1.0),
                ..Default::default()
            },
        );
        bill.update(&edit).unwrap();
        assert!(bill.validate().is_err());
    }

    #[test]
    fn test_list_order() {
        let mk = |year: &str, month: u8| {
            UnitBill::new_from_units(
                &UnitBillDto {
                    year: year.into(),
                    month,
                    ..Default::default()
                },
                &[],
            )
            .unwrap()
        };
        let mut bills = vec![mk("1402", 12), mk("1403", 2), mk("1403", 9)];
        bills.sort_by(UnitBill::list_order);
        let keys: Vec<_> = bills.iter().map(|b| (b.year.as_str(), b.month.number())).collect();
        assert_eq!(keys, vec![("1403", 9), ("1403", 2), ("1402", 12)]);
    }
}

use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::aggregate_id!(
    /// Unique residential unit identifier
    UnitId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitStatus {
    Occupied,
    #[default]
    Vacant,
    Maintenance,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Occupied => "Occupied",
            UnitStatus::Vacant => "Vacant",
            UnitStatus::Maintenance => "Maintenance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Occupied" => Some(UnitStatus::Occupied),
            "Vacant" => Some(UnitStatus::Vacant),
            "Maintenance" => Some(UnitStatus::Maintenance),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitStatus::Occupied => "اشغال شده",
            UnitStatus::Vacant => "خالی",
            UnitStatus::Maintenance => "در حال ترمیم",
        }
    }

    pub fn all() -> [UnitStatus; 3] {
        [UnitStatus::Occupied, UnitStatus::Vacant, UnitStatus::Maintenance]
    }
}

/// Residential unit with its current occupant and meter readings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    #[serde(flatten)]
    pub base: BaseAggregate<UnitId>,

    pub unit_number: String,
    pub customer_name: String,
    pub customer_father_name: String,
    pub services_description: String,
    /// Monthly charge billed while occupied
    pub service_charge: f64,
    pub current_water_reading: f64,
    pub current_electricity_reading: f64,
    pub status: UnitStatus,
}

impl Unit {
    pub fn new_for_insert(dto: &UnitDto) -> Self {
        let mut unit = Self {
            base: BaseAggregate::new(UnitId::new_v4()),
            unit_number: String::new(),
            customer_name: String::new(),
            customer_father_name: String::new(),
            services_description: String::new(),
            service_charge: 0.0,
            current_water_reading: 0.0,
            current_electricity_reading: 0.0,
            status: UnitStatus::Vacant,
        };
        unit.update(dto);
        unit
    }

    pub fn update(&mut self, dto: &UnitDto) {
        self.unit_number = dto.unit_number.trim().to_string();
        self.customer_name = dto.customer_name.trim().to_string();
        self.customer_father_name = dto.customer_father_name.trim().to_string();
        self.services_description = dto.services_description.clone();
        self.service_charge = dto.service_charge;
        self.current_water_reading = dto.current_water_reading;
        self.current_electricity_reading = dto.current_electricity_reading;
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.unit_number.is_empty() {
            return Err("نمبر واحد نمی‌تواند خالی باشد".into());
        }
        if self.status == UnitStatus::Occupied && self.customer_name.is_empty() {
            return Err("نام ساکن برای واحد اشغال شده الزامی است".into());
        }
        for value in [
            self.service_charge,
            self.current_water_reading,
            self.current_electricity_reading,
        ] {
            if !(value >= 0.0) {
                return Err("مبالغ و میترها نمی‌تواند منفی باشد".into());
            }
        }
        Ok(())
    }

    /// A vacant unit keeps no occupant
    pub fn before_write(&mut self) {
        if self.status == UnitStatus::Vacant {
            self.customer_name.clear();
            self.customer_father_name.clear();
        }
        self.base.before_write();
    }

    /// Numeric unit numbers in numeric order, the rest after them by text
    pub fn list_order(a: &Unit, b: &Unit) -> Ordering {
        match (a.unit_number.parse::<u64>(), b.unit_number.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a.unit_number.cmp(&b.unit_number),
        }
    }

    pub fn to_dto(&self) -> UnitDto {
        UnitDto {
            id: Some(self.base.id.as_string()),
            unit_number: self.unit_number.clone(),
            customer_name: self.customer_name.clone(),
            customer_father_name: self.customer_father_name.clone(),
            services_description: self.services_description.clone(),
            service_charge: self.service_charge,
            current_water_reading: self.current_water_reading,
            current_electricity_reading: self.current_electricity_reading,
            status: self.status,
        }
    }
}

impl AggregateRoot for Unit {
    type Id = UnitId;

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
        "a013"
    }

    fn collection_name() -> &'static str {
        "units"
    }

    fn element_name() -> &'static str {
        "واحد"
    }

    fn list_name() -> &'static str {
        "واحدها"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitDto {
    pub id: Option<String>,
    pub unit_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_father_name: String,
    #[serde(default)]
    pub services_description: String,
    pub service_charge: f64,
    #[serde(default)]
    pub current_water_reading: f64,
    #[serde(default)]
    pub current_electricity_reading: f64,
    #[serde(default)]
    pub status: UnitStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(number: &str, status: UnitStatus, occupant: &str) -> UnitDto {
        UnitDto {
            unit_number: number.into(),
            customer_name: occupant.into(),
            customer_father_name: "ولی".into(),
            service_charge: 1200.0,
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_occupied_unit_needs_an_occupant() {
        assert!(Unit::new_for_insert(&dto("4", UnitStatus::Occupied, "")).validate().is_err());
        assert!(Unit::new_for_insert(&dto("4", UnitStatus::Occupied, "نبی")).validate().is_ok());
        assert!(Unit::new_for_insert(&dto("", UnitStatus::Vacant, "")).validate().is_err());
    }

    #[test]
    fn test_vacant_unit_drops_its_occupant_on_write() {
        let mut unit = Unit::new_for_insert(&dto("7", UnitStatus::Vacant, "نبی"));
        unit.before_write();
        assert!(unit.customer_name.is_empty());
        assert!(unit.customer_father_name.is_empty());

        let mut repair = Unit::new_for_insert(&dto("8", UnitStatus::Maintenance, "نبی"));
        repair.before_write();
        assert_eq!(repair.customer_name, "نبی");
    }

    #[test]
    fn test_list_order_is_numeric_first() {
        let mut units: Vec<Unit> = ["10", "B-2", "2", "A-1", "1"]
            .iter()
            .map(|n| Unit::new_for_insert(&dto(n, UnitStatus::Vacant, "")))
            .collect();
        units.sort_by(Unit::list_order);
        let numbers: Vec<_> = units.iter().map(|u| u.unit_number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "10", "A-1", "B-2"]);
    }

    #[test]
    fn test_status_round_trips_its_column_text() {
        for status in UnitStatus::all() {
            assert_eq!(UnitStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(UnitStatus::default(), UnitStatus::Vacant);
    }
}

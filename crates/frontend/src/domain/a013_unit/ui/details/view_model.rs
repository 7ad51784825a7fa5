use contracts::domain::a013_unit::aggregate::{Unit, UnitDto, UnitStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a013_unit::api;
use crate::shared::forms::{amount_input, parse_amount};

pub fn parse_status(input: &str) -> Result<UnitStatus, String> {
    UnitStatus::parse(input).ok_or_else(|| "وضعیت واحد انتخاب نشده است".to_string())
}

#[derive(Clone, Copy)]
pub struct UnitDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub unit_number: RwSignal<String>,
    pub customer_name: RwSignal<String>,
    pub customer_father_name: RwSignal<String>,
    pub services_description: RwSignal<String>,
    pub service_charge: RwSignal<String>,
    pub current_water_reading: RwSignal<String>,
    pub current_electricity_reading: RwSignal<String>,
    pub status: RwSignal<String>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl UnitDetailsVm {
    pub fn new(initial: Option<UnitDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            unit_number: RwSignal::new(dto.unit_number),
            customer_name: RwSignal::new(dto.customer_name),
            customer_father_name: RwSignal::new(dto.customer_father_name),
            services_description: RwSignal::new(dto.services_description),
            service_charge: RwSignal::new(amount_input(dto.service_charge)),
            current_water_reading: RwSignal::new(amount_input(dto.current_water_reading)),
            current_electricity_reading: RwSignal::new(amount_input(dto.current_electricity_reading)),
            status: RwSignal::new(dto.status.as_str().to_string()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// Occupant fields are hidden for a vacant unit
    pub fn has_occupant(&self) -> bool {
        self.status.with(|s| s != UnitStatus::Vacant.as_str())
    }

    pub fn build_dto(&self) -> Result<UnitDto, String> {
        let dto = UnitDto {
            id: self.id.get_untracked(),
            unit_number: self.unit_number.get_untracked().trim().to_string(),
            customer_name: self.customer_name.get_untracked().trim().to_string(),
            customer_father_name: self.customer_father_name.get_untracked().trim().to_string(),
            services_description: self.services_description.get_untracked().trim().to_string(),
            service_charge: parse_amount("فیس خدمات", &self.service_charge.get_untracked())?,
            current_water_reading: parse_amount("میتر آب", &self.current_water_reading.get_untracked())?,
            current_electricity_reading: parse_amount(
                "میتر برق",
                &self.current_electricity_reading.get_untracked(),
            )?,
            status: parse_status(&self.status.get_untracked())?,
        };
        Unit::new_for_insert(&dto).validate()?;
        Ok(dto)
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.build_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let this = *self;
        this.error.set(None);
        this.saving.set(true);
        spawn_local(async move {
            let result = api::save(&dto).await;
            this.saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("Occupied"), Ok(UnitStatus::Occupied));
        assert_eq!(parse_status("Maintenance"), Ok(UnitStatus::Maintenance));
        assert!(parse_status("").is_err());
    }
}

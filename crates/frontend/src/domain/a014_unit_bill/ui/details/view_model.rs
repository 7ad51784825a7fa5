use std::collections::BTreeMap;

use contracts::domain::a014_unit_bill::aggregate::{
    UnitBill, UnitBillDto, UnitBillLineUpdate, UnitBillView,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a014_unit_bill::api;
use crate::shared::forms::{amount_input, optional_text, parse_amount, parse_number};

/// `(totals, remainder)` of a row from its typed service charge, water
/// price, electricity price and collected amount
pub fn row_amounts(service: &str, water: &str, electricity: &str, taken: &str) -> Option<(f64, f64)> {
    let totals = parse_amount("", service).ok()?
        + parse_amount("", water).ok()?
        + parse_amount("", electricity).ok()?;
    Some((totals, totals - parse_amount("", taken).ok()?))
}

#[derive(Clone)]
pub struct UnitBillRowVm {
    pub unit_id: String,
    pub unit_number: String,
    pub resident: String,
    pub service_charge: RwSignal<String>,
    pub previous_water_reading: RwSignal<String>,
    pub current_water_reading: RwSignal<String>,
    pub previous_electricity_reading: RwSignal<String>,
    pub current_electricity_reading: RwSignal<String>,
    pub water_price: RwSignal<String>,
    pub electricity_price: RwSignal<String>,
    pub taken: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl UnitBillRowVm {
    pub fn amounts(&self) -> Option<(f64, f64)> {
        row_amounts(
            &self.service_charge.get(),
            &self.water_price.get(),
            &self.electricity_price.get(),
            &self.taken.get(),
        )
    }

    fn to_update(&self) -> Result<UnitBillLineUpdate, String> {
        let amount = |label: &str, value: RwSignal<String>| {
            parse_amount(&format!("{} واحد {}", label, self.unit_number), &value.get_untracked())
                .map(Some)
        };
        Ok(UnitBillLineUpdate {
            service_charge: amount("خدمات", self.service_charge)?,
            water_price: amount("قیمت آب", self.water_price)?,
            electricity_price: amount("قیمت برق", self.electricity_price)?,
            taken: amount("دریافتی", self.taken)?,
            previous_water_reading: amount("میتر قبلی آب", self.previous_water_reading)?,
            current_water_reading: amount("میتر فعلی آب", self.current_water_reading)?,
            previous_electricity_reading: amount("میتر قبلی برق", self.previous_electricity_reading)?,
            current_electricity_reading: amount("میتر فعلی برق", self.current_electricity_reading)?,
            description: Some(optional_text(&self.description.get_untracked()).unwrap_or_default()),
        })
    }
}

#[derive(Clone, Copy)]
pub struct UnitBillDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub year: RwSignal<String>,
    pub month: RwSignal<String>,
    pub rows: RwSignal<Vec<UnitBillRowVm>>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl UnitBillDetailsVm {
    pub fn new(initial: Option<UnitBillView>) -> Self {
        let Some(bill) = initial else {
            let dto = UnitBillDto::default();
            return Self {
                id: RwSignal::new(None),
                year: RwSignal::new(dto.year),
                month: RwSignal::new(dto.month.to_string()),
                rows: RwSignal::new(Vec::new()),
                error: RwSignal::new(None),
                saving: RwSignal::new(false),
            };
        };

        let rows = bill
            .units
            .iter()
            .map(|(unit_id, line)| UnitBillRowVm {
                unit_id: unit_id.clone(),
                unit_number: line.unit_number.clone(),
                resident: line.customer_name.clone(),
                service_charge: RwSignal::new(amount_input(line.service_charge)),
                previous_water_reading: RwSignal::new(amount_input(line.previous_water_reading)),
                current_water_reading: RwSignal::new(amount_input(line.current_water_reading)),
                previous_electricity_reading: RwSignal::new(amount_input(
                    line.previous_electricity_reading,
                )),
                current_electricity_reading: RwSignal::new(amount_input(
                    line.current_electricity_reading,
                )),
                water_price: RwSignal::new(amount_input(line.water_price)),
                electricity_price: RwSignal::new(amount_input(line.electricity_price)),
                taken: RwSignal::new(amount_input(line.taken)),
                description: RwSignal::new(line.description.clone()),
            })
            .collect();

        Self {
            id: RwSignal::new(Some(bill.id)),
            year: RwSignal::new(bill.year),
            month: RwSignal::new(bill.month.to_string()),
            rows: RwSignal::new(rows),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// Live `(total, remainder)` over the rows that parse
    pub fn totals(&self) -> (f64, f64) {
        self.rows.with(|rows| {
            rows.iter()
                .filter_map(UnitBillRowVm::amounts)
                .fold((0.0, 0.0), |(total, rest), (t, r)| (total + t, rest + r))
        })
    }

    pub fn build_dto(&self) -> Result<UnitBillDto, String> {
        let mut units = BTreeMap::new();
        for row in self.rows.get_untracked() {
            units.insert(row.unit_id.clone(), row.to_update()?);
        }

        let dto = UnitBillDto {
            id: self.id.get_untracked(),
            year: self.year.get_untracked().trim().to_string(),
            month: parse_number("ماه", &self.month.get_untracked())?,
            units,
        };

        UnitBill::new_from_units(&dto, &[])?.validate()?;
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
            let result = match dto.id.as_deref() {
                Some(id) => api::update(id, &dto).await,
                None => api::create(&dto).await.map(|id| {
                    log::info!("unit bill {} created", id);
                }),
            };
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
    fn test_row_amounts() {
        assert_eq!(row_amounts("500", "120", "۳۸۰", "600"), Some((1000.0, 400.0)));
        assert_eq!(row_amounts("", "", "", ""), Some((0.0, 0.0)));
        assert_eq!(row_amounts("500", "x", "0", "0"), None);
    }
}

use std::collections::BTreeMap;

use contracts::domain::a011_rent::aggregate::{Rent, RentDto, RentLineUpdate, RentView};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a011_rent::api;
use crate::shared::forms::{amount_input, parse_amount, parse_number};

/// One editable tenant row
#[derive(Clone)]
pub struct RentRowVm {
    pub customer_id: String,
    pub customer_name: String,
    pub shop: String,
    pub rent: RwSignal<String>,
    pub taken: RwSignal<String>,
}

impl RentRowVm {
    pub fn remainder(&self) -> Option<f64> {
        let rent = parse_amount("", &self.rent.get()).ok()?;
        let taken = parse_amount("", &self.taken.get()).ok()?;
        Some(rent - taken)
    }
}

/// Parsed edit of one row
pub fn line_update(name: &str, rent: &str, taken: &str) -> Result<RentLineUpdate, String> {
    Ok(RentLineUpdate {
        rent: Some(parse_amount(&format!("کرایه {}", name), rent)?),
        taken: Some(parse_amount(&format!("دریافتی {}", name), taken)?),
    })
}

#[derive(Clone, Copy)]
pub struct RentDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub year: RwSignal<String>,
    pub month: RwSignal<String>,
    pub floor: RwSignal<String>,
    pub rows: RwSignal<Vec<RentRowVm>>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl RentDetailsVm {
    pub fn new(initial: Option<RentView>) -> Self {
        let Some(sheet) = initial else {
            let dto = RentDto::default();
            return Self {
                id: RwSignal::new(None),
                year: RwSignal::new(dto.year),
                month: RwSignal::new(dto.month.to_string()),
                floor: RwSignal::new(dto.floor.to_string()),
                rows: RwSignal::new(Vec::new()),
                error: RwSignal::new(None),
                saving: RwSignal::new(false),
            };
        };

        let rows = sheet
            .customers
            .iter()
            .map(|(customer_id, line)| RentRowVm {
                customer_id: customer_id.clone(),
                customer_name: line.customer_name.clone().unwrap_or_else(|| "-".to_string()),
                shop: line.shop.clone().unwrap_or_default(),
                rent: RwSignal::new(amount_input(line.rent)),
                taken: RwSignal::new(amount_input(line.taken)),
            })
            .collect();

        Self {
            id: RwSignal::new(Some(sheet.id)),
            year: RwSignal::new(sheet.year),
            month: RwSignal::new(sheet.month.to_string()),
            floor: RwSignal::new(sheet.floor.to_string()),
            rows: RwSignal::new(rows),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// Live `(total, taken, remainder)` of the typed rows
    pub fn totals(&self) -> (f64, f64, f64) {
        self.rows.with(|rows| {
            rows.iter().fold((0.0, 0.0, 0.0), |(total, taken, rest), row| {
                let r = parse_amount("", &row.rent.get()).unwrap_or(0.0);
                let t = parse_amount("", &row.taken.get()).unwrap_or(0.0);
                (total + r, taken + t, rest + r - t)
            })
        })
    }

    pub fn build_dto(&self) -> Result<RentDto, String> {
        let mut customers = BTreeMap::new();
        for row in self.rows.get_untracked() {
            let change = line_update(
                &row.customer_name,
                &row.rent.get_untracked(),
                &row.taken.get_untracked(),
            )?;
            customers.insert(row.customer_id.clone(), change);
        }

        let dto = RentDto {
            id: self.id.get_untracked(),
            year: self.year.get_untracked().trim().to_string(),
            month: parse_number("ماه", &self.month.get_untracked())?,
            floor: parse_number("منزل", &self.floor.get_untracked())?,
            customers,
        };

        let mut check = Rent::new_from_agreements(&dto, &[])?;
        check.update(&dto)?;
        check.validate()?;
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
                    log::info!("rent sheet {} created", id);
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
    fn test_line_update() {
        let change = line_update("احمد", "3,000", "۱۲۰۰").unwrap();
        assert_eq!(change.rent, Some(3000.0));
        assert_eq!(change.taken, Some(1200.0));

        let empty = line_update("احمد", "", "").unwrap();
        assert_eq!(empty.taken, Some(0.0));

        let err = line_update("احمد", "3000", "x").unwrap_err();
        assert!(err.contains("احمد"));
    }
}

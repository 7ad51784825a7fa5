use std::collections::BTreeMap;

use contracts::domain::a012_service::aggregate::{
    ServiceLineUpdate, ServiceSheet, ServiceSheetDto, ServiceSheetView,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a012_service::api;
use crate::shared::forms::{amount_input, parse_amount, parse_number};

#[derive(Clone)]
pub struct ServiceRowVm {
    pub customer_id: String,
    pub customer_name: String,
    pub shop: String,
    pub service: RwSignal<String>,
    pub taken: RwSignal<String>,
    pub is_approved: RwSignal<bool>,
}

impl ServiceRowVm {
    pub fn remainder(&self) -> Option<f64> {
        let service = parse_amount("", &self.service.get()).ok()?;
        let taken = parse_amount("", &self.taken.get()).ok()?;
        Some(service - taken)
    }
}

pub fn line_update(
    name: &str,
    service: &str,
    taken: &str,
    is_approved: bool,
) -> Result<ServiceLineUpdate, String> {
    Ok(ServiceLineUpdate {
        service: Some(parse_amount(&format!("خدمات {}", name), service)?),
        taken: Some(parse_amount(&format!("دریافتی {}", name), taken)?),
        is_approved: Some(is_approved),
    })
}

#[derive(Clone, Copy)]
pub struct ServiceSheetDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub year: RwSignal<String>,
    pub month: RwSignal<String>,
    pub floor: RwSignal<String>,
    pub is_approved: RwSignal<bool>,
    pub rows: RwSignal<Vec<ServiceRowVm>>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ServiceSheetDetailsVm {
    pub fn new(initial: Option<ServiceSheetView>) -> Self {
        let (id, dto, rows) = match initial {
            Some(sheet) => {
                let rows = sheet
                    .customers
                    .iter()
                    .map(|(customer_id, line)| ServiceRowVm {
                        customer_id: customer_id.clone(),
                        customer_name: line.customer_name.clone().unwrap_or_else(|| "-".to_string()),
                        shop: line.shop.clone().unwrap_or_default(),
                        service: RwSignal::new(amount_input(line.service)),
                        taken: RwSignal::new(amount_input(line.taken)),
                        is_approved: RwSignal::new(line.is_approved),
                    })
                    .collect();
                let dto = ServiceSheetDto {
                    id: Some(sheet.id.clone()),
                    year: sheet.year,
                    month: sheet.month,
                    floor: sheet.floor,
                    is_approved: sheet.is_approved,
                    customers: BTreeMap::new(),
                };
                (Some(sheet.id), dto, rows)
            }
            None => (None, ServiceSheetDto::default(), Vec::new()),
        };

        Self {
            id: RwSignal::new(id),
            year: RwSignal::new(dto.year),
            month: RwSignal::new(dto.month.to_string()),
            floor: RwSignal::new(dto.floor.to_string()),
            is_approved: RwSignal::new(dto.is_approved),
            rows: RwSignal::new(rows),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// Live `(total, taken, remainder)`
    pub fn totals(&self) -> (f64, f64, f64) {
        self.rows.with(|rows| {
            rows.iter().fold((0.0, 0.0, 0.0), |(total, taken, rest), row| {
                let s = parse_amount("", &row.service.get()).unwrap_or(0.0);
                let t = parse_amount("", &row.taken.get()).unwrap_or(0.0);
                (total + s, taken + t, rest + s - t)
            })
        })
    }

    /// Ticks the approval of every row
    pub fn approve_rows(&self) {
        self.rows.with_untracked(|rows| {
            for row in rows {
                row.is_approved.set(true);
            }
        });
    }

    pub fn build_dto(&self) -> Result<ServiceSheetDto, String> {
        let mut customers = BTreeMap::new();
        for row in self.rows.get_untracked() {
            let change = line_update(
                &row.customer_name,
                &row.service.get_untracked(),
                &row.taken.get_untracked(),
                row.is_approved.get_untracked(),
            )?;
            customers.insert(row.customer_id.clone(), change);
        }

        let dto = ServiceSheetDto {
            id: self.id.get_untracked(),
            year: self.year.get_untracked().trim().to_string(),
            month: parse_number("ماه", &self.month.get_untracked())?,
            floor: parse_number("منزل", &self.floor.get_untracked())?,
            is_approved: self.is_approved.get_untracked(),
            customers,
        };

        let mut check = ServiceSheet::new_from_agreements(&dto, &[])?;
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
                    log::info!("services sheet {} created", id);
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
    fn test_line_update_keeps_row_approval() {
        let change = line_update("رحیم", "1,500", "۵۰۰", true).unwrap();
        assert_eq!(change.service, Some(1500.0));
        assert_eq!(change.taken, Some(500.0));
        assert_eq!(change.is_approved, Some(true));

        let err = line_update("رحیم", "-", "0", false).unwrap_err();
        assert!(err.contains("رحیم"));
    }
}

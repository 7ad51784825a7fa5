use contracts::domain::a005_salary::aggregate::{Salary, SalaryDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_salary::api;
use crate::shared::forms::{amount_input, parse_amount, parse_number};

#[derive(Clone, Copy)]
pub struct SalaryDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub staff_id: RwSignal<String>,
    pub year: RwSignal<String>,
    pub month: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub paid: RwSignal<String>,
    pub description: RwSignal<String>,

    /// `(id, name)` of the staff members for the select box
    pub staff_options: RwSignal<Vec<(String, String)>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl SalaryDetailsVm {
    pub fn new(initial: Option<SalaryDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            staff_id: RwSignal::new(dto.staff_id),
            year: RwSignal::new(dto.year),
            month: RwSignal::new(dto.month.to_string()),
            amount: RwSignal::new(amount_input(dto.amount)),
            paid: RwSignal::new(amount_input(dto.paid)),
            description: RwSignal::new(dto.description),
            staff_options: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    pub fn load_staff(&self) {
        let this = *self;
        spawn_local(async move {
            match crate::domain::a004_staff::api::fetch_all().await {
                Ok(list) => this.staff_options.set(
                    list.into_iter()
                        .map(|s| (s.base.id.as_string(), s.name))
                        .collect(),
                ),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    /// Remainder of the typed values, shown live under the form
    pub fn remainder(&self) -> Option<f64> {
        let amount = parse_amount("", &self.amount.get()).ok()?;
        let paid = parse_amount("", &self.paid.get()).ok()?;
        Some(amount - paid)
    }

    pub fn build_dto(&self) -> Result<SalaryDto, String> {
        let staff_id = self.staff_id.get_untracked();
        if staff_id.is_empty() {
            return Err("کارمند انتخاب نشده است".to_string());
        }
        let dto = SalaryDto {
            id: self.id.get_untracked(),
            staff_id,
            year: self.year.get_untracked().trim().to_string(),
            month: parse_number("ماه", &self.month.get_untracked())?,
            amount: parse_amount("مقدار معاش", &self.amount.get_untracked())?,
            paid: parse_amount("پرداخت شده", &self.paid.get_untracked())?,
            description: self.description.get_untracked().trim().to_string(),
        };
        Salary::new_for_insert(&dto)?.validate()?;
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

use contracts::domain::a006_expenditure::aggregate::{Expenditure, ExpenditureDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_expenditure::api;
use crate::shared::forms::{amount_input, parse_amount, parse_number};

#[derive(Clone, Copy)]
pub struct ExpenditureDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub category: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub description: RwSignal<String>,
    pub year: RwSignal<String>,
    pub month: RwSignal<String>,
    pub spender: RwSignal<String>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ExpenditureDetailsVm {
    pub fn new(initial: Option<ExpenditureDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            category: RwSignal::new(dto.category),
            amount: RwSignal::new(amount_input(dto.amount)),
            description: RwSignal::new(dto.description),
            year: RwSignal::new(dto.year),
            month: RwSignal::new(dto.month.to_string()),
            spender: RwSignal::new(dto.spender),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    pub fn build_dto(&self) -> Result<ExpenditureDto, String> {
        let dto = ExpenditureDto {
            id: self.id.get_untracked(),
            category: self.category.get_untracked().trim().to_string(),
            amount: parse_amount("مبلغ", &self.amount.get_untracked())?,
            description: self.description.get_untracked().trim().to_string(),
            year: self.year.get_untracked().trim().to_string(),
            month: parse_number("ماه", &self.month.get_untracked())?,
            spender: self.spender.get_untracked().trim().to_string(),
        };
        Expenditure::new_for_insert(&dto)?.validate()?;
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

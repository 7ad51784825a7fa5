use contracts::domain::a007_income::aggregate::{Income, IncomeDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a007_income::api;
use crate::shared::forms::{amount_input, optional_text, parse_amount, parse_number};

#[derive(Clone, Copy)]
pub struct IncomeDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub source: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub description: RwSignal<String>,
    pub year: RwSignal<String>,
    pub month: RwSignal<String>,
    pub receiver: RwSignal<String>,
    pub consumer: RwSignal<String>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl IncomeDetailsVm {
    pub fn new(initial: Option<IncomeDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            source: RwSignal::new(dto.source),
            amount: RwSignal::new(amount_input(dto.amount)),
            description: RwSignal::new(dto.description),
            year: RwSignal::new(dto.year),
            month: RwSignal::new(dto.month.to_string()),
            receiver: RwSignal::new(dto.receiver),
            consumer: RwSignal::new(dto.consumer.unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    pub fn build_dto(&self) -> Result<IncomeDto, String> {
        let dto = IncomeDto {
            id: self.id.get_untracked(),
            source: self.source.get_untracked().trim().to_string(),
            amount: parse_amount("مبلغ", &self.amount.get_untracked())?,
            description: self.description.get_untracked().trim().to_string(),
            year: self.year.get_untracked().trim().to_string(),
            month: parse_number("ماه", &self.month.get_untracked())?,
            receiver: self.receiver.get_untracked().trim().to_string(),
            consumer: optional_text(&self.consumer.get_untracked()),
        };
        Income::new_for_insert(&dto)?.validate()?;
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

use contracts::domain::a008_finance::aggregate::{Finance, FinanceDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a008_finance::api;
use crate::shared::forms::{amount_input, parse_amount};

#[derive(Clone, Copy)]
pub struct FinanceDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub from_person: RwSignal<String>,
    pub to_person: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub description: RwSignal<String>,
    pub issue_date: RwSignal<String>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl FinanceDetailsVm {
    pub fn new(initial: Option<FinanceDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            from_person: RwSignal::new(dto.from_person),
            to_person: RwSignal::new(dto.to_person),
            amount: RwSignal::new(amount_input(dto.amount)),
            description: RwSignal::new(dto.description),
            issue_date: RwSignal::new(dto.issue_date),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    pub fn build_dto(&self) -> Result<FinanceDto, String> {
        let dto = FinanceDto {
            id: self.id.get_untracked(),
            from_person: self.from_person.get_untracked().trim().to_string(),
            to_person: self.to_person.get_untracked().trim().to_string(),
            amount: parse_amount("مبلغ", &self.amount.get_untracked())?,
            description: self.description.get_untracked().trim().to_string(),
            issue_date: self.issue_date.get_untracked().trim().to_string(),
        };
        Finance::new_for_insert(&dto).validate()?;
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

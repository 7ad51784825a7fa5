use contracts::domain::a010_agreement::aggregate::{Agreement, AgreementDto, AgreementStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a010_agreement::api;
use crate::shared::forms::{amount_input, parse_amount, parse_number, split_list};

#[derive(Clone, Copy)]
pub struct AgreementDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub customer_id: RwSignal<String>,
    /// `AgreementStatus::as_str`
    pub status: RwSignal<String>,
    /// Shop numbers, comma separated
    pub shops: RwSignal<String>,
    pub advance: RwSignal<String>,
    pub rent: RwSignal<String>,
    pub service: RwSignal<String>,
    pub taken: RwSignal<String>,
    pub floor: RwSignal<String>,

    pub customer_options: RwSignal<Vec<(String, String)>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl AgreementDetailsVm {
    pub fn new(initial: Option<AgreementDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            customer_id: RwSignal::new(dto.customer_id),
            status: RwSignal::new(dto.status.as_str().to_string()),
            shops: RwSignal::new(dto.shops.join(", ")),
            advance: RwSignal::new(amount_input(dto.advance)),
            rent: RwSignal::new(amount_input(dto.rent)),
            service: RwSignal::new(amount_input(dto.service)),
            taken: RwSignal::new(amount_input(dto.taken)),
            floor: RwSignal::new(dto.floor.to_string()),
            customer_options: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    pub fn load_customers(&self) {
        let this = *self;
        spawn_local(async move {
            match crate::domain::a009_customer::api::fetch_all().await {
                Ok(list) => this
                    .customer_options
                    .set(list.into_iter().map(|c| (c.id, c.name)).collect()),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn build_dto(&self) -> Result<AgreementDto, String> {
        let status = AgreementStatus::parse(&self.status.get_untracked())
            .ok_or_else(|| "وضعیت قرارداد انتخاب نشده است".to_string())?;
        let dto = AgreementDto {
            id: self.id.get_untracked(),
            customer_id: self.customer_id.get_untracked(),
            status,
            shops: split_list(&self.shops.get_untracked()),
            advance: parse_amount("پیش پرداخت", &self.advance.get_untracked())?,
            rent: parse_amount("کرایه", &self.rent.get_untracked())?,
            service: parse_amount("خدمات", &self.service.get_untracked())?,
            taken: parse_amount("دریافت شده", &self.taken.get_untracked())?,
            floor: parse_number("منزل", &self.floor.get_untracked())?,
        };
        Agreement::new_for_insert(&dto)?.validate()?;
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

use contracts::domain::a003_processing_carpet::aggregate::{ProcessingCarpet, ProcessingCarpetDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_processing_carpet::api;
use crate::shared::forms::{amount_list_input, parse_amount_list, split_list};

#[derive(Clone, Copy)]
pub struct ProcessingCarpetDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub worker_id: RwSignal<String>,
    pub width: RwSignal<String>,
    pub length: RwSignal<String>,
    pub map: RwSignal<String>,
    /// Comma separated
    pub materials: RwSignal<String>,
    /// Amounts joined by `+`
    pub payments: RwSignal<String>,

    pub worker_options: RwSignal<Vec<(String, String)>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProcessingCarpetDetailsVm {
    pub fn new(initial: Option<ProcessingCarpetDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            worker_id: RwSignal::new(dto.worker_id),
            width: RwSignal::new(dto.width),
            length: RwSignal::new(dto.length),
            map: RwSignal::new(dto.map),
            materials: RwSignal::new(dto.materials.join("، ")),
            payments: RwSignal::new(amount_list_input(&dto.payments)),
            worker_options: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    pub fn load_workers(&self) {
        let this = *self;
        spawn_local(async move {
            match crate::domain::a002_worker::api::fetch_all().await {
                Ok(list) => this.worker_options.set(
                    list.into_iter()
                        .map(|w| (w.base.id.as_string(), format!("{} ولد {}", w.name, w.father_name)))
                        .collect(),
                ),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    /// Sum of the typed payments, `None` while the input does not parse
    pub fn total_paid(&self) -> Option<f64> {
        parse_amount_list("", &self.payments.get())
            .ok()
            .map(|list| list.iter().sum())
    }

    pub fn build_dto(&self) -> Result<ProcessingCarpetDto, String> {
        let dto = ProcessingCarpetDto {
            id: self.id.get_untracked(),
            worker_id: self.worker_id.get_untracked(),
            width: self.width.get_untracked().trim().to_string(),
            length: self.length.get_untracked().trim().to_string(),
            map: self.map.get_untracked().trim().to_string(),
            materials: split_list(&self.materials.get_untracked()),
            payments: parse_amount_list("پرداخت ها", &self.payments.get_untracked())?,
        };
        ProcessingCarpet::new_for_insert(&dto).validate()?;
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

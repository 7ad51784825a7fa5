use contracts::domain::a002_worker::aggregate::{Worker, WorkerDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::domain::a002_worker::api;

#[derive(Clone, Copy)]
pub struct WorkerDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub father_name: RwSignal<String>,
    pub permanent_residency: RwSignal<String>,
    pub current_residency: RwSignal<String>,
    /// Newly chosen identity document
    pub nic: RwSignal<Option<File>, LocalStorage>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl WorkerDetailsVm {
    pub fn new(initial: Option<WorkerDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            name: RwSignal::new(dto.name),
            father_name: RwSignal::new(dto.father_name),
            permanent_residency: RwSignal::new(dto.permanent_residency),
            current_residency: RwSignal::new(dto.current_residency),
            nic: RwSignal::new_local(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// A new worker needs a document; an edit keeps the stored one
    pub fn build_dto(&self) -> Result<WorkerDto, String> {
        let dto = WorkerDto {
            id: self.id.get_untracked(),
            name: self.name.get_untracked().trim().to_string(),
            father_name: self.father_name.get_untracked().trim().to_string(),
            permanent_residency: self.permanent_residency.get_untracked().trim().to_string(),
            current_residency: self.current_residency.get_untracked().trim().to_string(),
        };
        let has_document = dto.id.is_some() || self.nic.with_untracked(Option::is_some);
        Worker::new_for_insert(&dto, has_document.then(String::new)).validate()?;
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
        let nic = self.nic.get_untracked();

        let this = *self;
        this.error.set(None);
        this.saving.set(true);
        spawn_local(async move {
            let result = api::save(&dto, nic).await;
            this.saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

use contracts::domain::a004_staff::aggregate::{Staff, StaffDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_staff::api;
use crate::shared::forms::{amount_input, optional_text, parse_amount};

#[derive(Clone, Copy)]
pub struct StaffDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub father_name: RwSignal<String>,
    pub position: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub base_salary: RwSignal<String>,
    pub hire_date: RwSignal<String>,
    pub is_active: RwSignal<bool>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StaffDetailsVm {
    pub fn new(initial: Option<StaffDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            name: RwSignal::new(dto.name),
            father_name: RwSignal::new(dto.father_name),
            position: RwSignal::new(dto.position),
            phone: RwSignal::new(dto.phone),
            base_salary: RwSignal::new(amount_input(dto.base_salary)),
            hire_date: RwSignal::new(dto.hire_date.unwrap_or_default()),
            is_active: RwSignal::new(dto.is_active),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// Collects the fields and runs the same checks as the server
    pub fn build_dto(&self) -> Result<StaffDto, String> {
        let dto = StaffDto {
            id: self.id.get_untracked(),
            name: self.name.get_untracked().trim().to_string(),
            father_name: self.father_name.get_untracked().trim().to_string(),
            position: self.position.get_untracked().trim().to_string(),
            phone: self.phone.get_untracked().trim().to_string(),
            base_salary: parse_amount("معاش اصلی", &self.base_salary.get_untracked())?,
            hire_date: optional_text(&self.hire_date.get_untracked()),
            is_active: self.is_active.get_untracked(),
        };
        Staff::new_for_insert(&dto).validate()?;
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

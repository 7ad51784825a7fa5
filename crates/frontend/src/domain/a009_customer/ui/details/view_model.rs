use contracts::domain::a009_customer::aggregate::{Customer, CustomerDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::domain::a009_customer::api;

#[derive(Clone, Copy)]
pub struct CustomerDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub father_name: RwSignal<String>,
    pub phone_number: RwSignal<String>,
    pub rental_owner: RwSignal<String>,
    pub nic: RwSignal<String>,
    pub address: RwSignal<String>,
    pub attachment: RwSignal<Option<File>, LocalStorage>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerDetailsVm {
    pub fn new(initial: Option<CustomerDto>) -> Self {
        let dto = initial.unwrap_or_default();
        Self {
            id: RwSignal::new(dto.id),
            name: RwSignal::new(dto.name),
            father_name: RwSignal::new(dto.father_name),
            phone_number: RwSignal::new(dto.phone_number),
            rental_owner: RwSignal::new(dto.rental_owner),
            nic: RwSignal::new(dto.nic),
            address: RwSignal::new(dto.address),
            attachment: RwSignal::new_local(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    pub fn build_dto(&self) -> Result<CustomerDto, String> {
        let dto = CustomerDto {
            id: self.id.get_untracked(),
            name: self.name.get_untracked().trim().to_string(),
            father_name: self.father_name.get_untracked().trim().to_string(),
            phone_number: self.phone_number.get_untracked().trim().to_string(),
            rental_owner: self.rental_owner.get_untracked().trim().to_string(),
            nic: self.nic.get_untracked().trim().to_string(),
            address: self.address.get_untracked().trim().to_string(),
        };
        Customer::new_for_insert(&dto, None).validate()?;
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
        let attachment = self.attachment.get_untracked();

        let this = *self;
        this.error.set(None);
        this.saving.set(true);
        spawn_local(async move {
            let result = api::save(&dto, attachment).await;
            this.saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

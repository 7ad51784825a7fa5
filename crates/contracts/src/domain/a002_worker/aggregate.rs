use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Unique worker identifier
    WorkerId
);

/// Carpet weaver working for the company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    #[serde(flatten)]
    pub base: BaseAggregate<WorkerId>,

    pub name: String,
    pub father_name: String,
    pub permanent_residency: String,
    pub current_residency: String,
    /// Stored file name of the scanned identity document
    pub nic_file: Option<String>,
}

impl Worker {
    pub fn new_for_insert(dto: &WorkerDto, nic_file: Option<String>) -> Self {
        Self {
            base: BaseAggregate::new(WorkerId::new_v4()),
            name: dto.name.clone(),
            father_name: dto.father_name.clone(),
            permanent_residency: dto.permanent_residency.clone(),
            current_residency: dto.current_residency.clone(),
            nic_file,
        }
    }

    /// Apply an edit; the identity document is replaced only when a new one was uploaded.
    pub fn update(&mut self, dto: &WorkerDto, nic_file: Option<String>) {
        self.name = dto.name.clone();
        self.father_name = dto.father_name.clone();
        self.permanent_residency = dto.permanent_residency.clone();
        self.current_residency = dto.current_residency.clone();
        if nic_file.is_some() {
            self.nic_file = nic_file;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("نام نمی‌تواند خالی باشد".into());
        }
        if self.father_name.trim().is_empty() {
            return Err("نام پدر نمی‌تواند خالی باشد".into());
        }
        if self.permanent_residency.trim().is_empty() || self.current_residency.trim().is_empty() {
            return Err("سکونت دایمی و فعلی الزامی است".into());
        }
        if self.nic_file.is_none() {
            return Err("فایل تذکره الزامی است".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }

    pub fn to_dto(&self) -> WorkerDto {
        WorkerDto {
            id: Some(self.base.id.as_string()),
            name: self.name.clone(),
            father_name: self.father_name.clone(),
            permanent_residency: self.permanent_residency.clone(),
            current_residency: self.current_residency.clone(),
        }
    }
}

impl AggregateRoot for Worker {
    type Id = WorkerId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "worker"
    }

    fn element_name() -> &'static str {
        "کارگر"
    }

    fn list_name() -> &'static str {
        "کارگران"
    }
}

/// Text part of the worker form; the identity document travels as a multipart file field `nic`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkerDto {
    pub id: Option<String>,
    pub name: String,
    pub father_name: String,
    pub permanent_residency: String,
    pub current_residency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> WorkerDto {
        WorkerDto {
            id: None,
            name: "احمد".into(),
            father_name: "محمود".into(),
            permanent_residency: "بلخ".into(),
            current_residency: "مزار شریف".into(),
        }
    }

    #[test]
    fn test_document_required_on_create() {
        let worker = Worker::new_for_insert(&dto(), None);
        assert!(worker.validate().is_err());
        let worker = Worker::new_for_insert(&dto(), Some("nic.png".into()));
        assert!(worker.validate().is_ok());
    }

    #[test]
    fn test_update_keeps_document_when_none_uploaded() {
        let mut worker = Worker::new_for_insert(&dto(), Some("nic.png".into()));
        let mut edit = dto();
        edit.current_residency = "کابل".into();
        worker.update(&edit, None);
        assert_eq!(worker.nic_file.as_deref(), Some("nic.png"));
        assert_eq!(worker.current_residency, "کابل");
    }
}

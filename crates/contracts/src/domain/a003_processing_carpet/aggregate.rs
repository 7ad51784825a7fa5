use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Unique identifier of a carpet on the loom
    ProcessingCarpetId
);

/// Carpet handed to a weaver and still being woven
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingCarpet {
    #[serde(flatten)]
    pub base: BaseAggregate<ProcessingCarpetId>,

    /// Reference to a002_worker
    pub worker_id: String,
    /// Denormalized worker name for list display
    pub worker_name: Option<String>,
    pub width: String,
    pub length: String,
    /// Pattern (naqsha) description
    pub map: String,
    pub materials: Vec<String>,
    /// Advance payments made to the weaver
    pub payments: Vec<f64>,
}

impl ProcessingCarpet {
    pub fn new_for_insert(dto: &ProcessingCarpetDto) -> Self {
        Self {
            base: BaseAggregate::new(ProcessingCarpetId::new_v4()),
            worker_id: dto.worker_id.clone(),
            worker_name: None,
            width: dto.width.clone(),
            length: dto.length.clone(),
            map: dto.map.clone(),
            materials: clean_materials(&dto.materials),
            payments: dto.payments.clone(),
        }
    }

    pub fn update(&mut self, dto: &ProcessingCarpetDto) {
        self.worker_id = dto.worker_id.clone();
        self.width = dto.width.clone();
        self.length = dto.length.clone();
        self.map = dto.map.clone();
        self.materials = clean_materials(&dto.materials);
        self.payments = dto.payments.clone();
    }

    pub fn total_paid(&self) -> f64 {
        self.payments.iter().sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.worker_id.trim().is_empty() {
            return Err("کارگر انتخاب نشده است".into());
        }
        if self.width.trim().is_empty() || self.length.trim().is_empty() {
            return Err("طول و عرض الزامی است".into());
        }
        if self.payments.iter().any(|p| !(*p >= 0.0)) {
            return Err("مبلغ پرداخت نمی‌تواند منفی باشد".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }

    pub fn to_dto(&self) -> ProcessingCarpetDto {
        ProcessingCarpetDto {
            id: Some(self.base.id.as_string()),
            worker_id: self.worker_id.clone(),
            width: self.width.clone(),
            length: self.length.clone(),
            map: self.map.clone(),
            materials: self.materials.clone(),
            payments: self.payments.clone(),
        }
    }
}

fn clean_materials(materials: &[String]) -> Vec<String> {
    materials
        .iter()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

impl AggregateRoot for ProcessingCarpet {
    type Id = ProcessingCarpetId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "processing_carpet"
    }

    fn element_name() -> &'static str {
        "قالین تحت کار"
    }

    fn list_name() -> &'static str {
        "قالین های تحت کار"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProcessingCarpetDto {
    pub id: Option<String>,
    pub worker_id: String,
    pub width: String,
    pub length: String,
    pub map: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub payments: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_paid_and_material_cleanup() {
        let dto = ProcessingCarpetDto {
            id: None,
            worker_id: "w-1".into(),
            width: "2".into(),
            length: "3".into(),
            map: "افغانی".into(),
            materials: vec!["پشم".into(), "  ".into(), " رنگ ".into()],
            payments: vec![1000.0, 2500.5],
        };
        let carpet = ProcessingCarpet::new_for_insert(&dto);
        assert_eq!(carpet.materials, vec!["پشم".to_string(), "رنگ".to_string()]);
        assert_eq!(carpet.total_paid(), 3500.5);
        assert!(carpet.validate().is_ok());
    }

    #[test]
    fn test_negative_payment_rejected() {
        let dto = ProcessingCarpetDto {
            worker_id: "w-1".into(),
            width: "2".into(),
            length: "3".into(),
            payments: vec![-5.0],
            ..Default::default()
        };
        assert!(ProcessingCarpet::new_for_insert(&dto).validate().is_err());
    }
}

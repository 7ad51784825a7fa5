use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Unique staff member identifier
    StaffId
);

/// Office employee paid a monthly salary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    #[serde(flatten)]
    pub base: BaseAggregate<StaffId>,

    pub name: String,
    pub father_name: String,
    pub position: String,
    pub phone: String,
    pub base_salary: f64,
    /// Date in format "YYYY-MM-DD"
    pub hire_date: Option<String>,
    pub is_active: bool,
}

impl Staff {
    pub fn new_for_insert(dto: &StaffDto) -> Self {
        Self {
            base: BaseAggregate::new(StaffId::new_v4()),
            name: dto.name.clone(),
            father_name: dto.father_name.clone(),
            position: dto.position.clone(),
            phone: dto.phone.clone(),
            base_salary: dto.base_salary,
            hire_date: dto.hire_date.clone().filter(|d| !d.trim().is_empty()),
            is_active: dto.is_active,
        }
    }

    pub fn update(&mut self, dto: &StaffDto) {
        self.name = dto.name.clone();
        self.father_name = dto.father_name.clone();
        self.position = dto.position.clone();
        self.phone = dto.phone.clone();
        self.base_salary = dto.base_salary;
        self.hire_date = dto.hire_date.clone().filter(|d| !d.trim().is_empty());
        self.is_active = dto.is_active;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("نام نمی‌تواند خالی باشد".into());
        }
        if self.position.trim().is_empty() {
            return Err("وظیفه نمی‌تواند خالی باشد".into());
        }
        if !(self.base_salary >= 0.0) {
            return Err("معاش نمی‌تواند منفی باشد".into());
        }
        if let Some(date) = &self.hire_date {
            if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                return Err("تاریخ استخدام نامعتبر است".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }

    pub fn to_dto(&self) -> StaffDto {
        StaffDto {
            id: Some(self.base.id.as_string()),
            name: self.name.clone(),
            father_name: self.father_name.clone(),
            position: self.position.clone(),
            phone: self.phone.clone(),
            base_salary: self.base_salary,
            hire_date: self.hire_date.clone(),
            is_active: self.is_active,
        }
    }
}

impl AggregateRoot for Staff {
    type Id = StaffId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "staff"
    }

    fn element_name() -> &'static str {
        "کارمند"
    }

    fn list_name() -> &'static str {
        "کارمندان"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffDto {
    pub id: Option<String>,
    pub name: String,
    pub father_name: String,
    pub position: String,
    pub phone: String,
    pub base_salary: f64,
    pub hire_date: Option<String>,
    pub is_active: bool,
}

impl Default for StaffDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            father_name: String::new(),
            position: String::new(),
            phone: String::new(),
            base_salary: 0.0,
            hire_date: None,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hire_date_must_be_iso() {
        let mut dto = StaffDto {
            name: "کریم".into(),
            position: "محاسب".into(),
            base_salary: 15000.0,
            hire_date: Some("2024-03-21".into()),
            ..Default::default()
        };
        assert!(Staff::new_for_insert(&dto).validate().is_ok());

        dto.hire_date = Some("21/03/2024".into());
        assert!(Staff::new_for_insert(&dto).validate().is_err());
    }

    #[test]
    fn test_blank_hire_date_is_none() {
        let dto = StaffDto {
            name: "کریم".into(),
            position: "محاسب".into(),
            hire_date: Some("  ".into()),
            ..Default::default()
        };
        assert!(Staff::new_for_insert(&dto).hire_date.is_none());
    }
}

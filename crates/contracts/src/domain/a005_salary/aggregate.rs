use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::solar_month::{is_valid_year, SolarMonth};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Unique salary record identifier
    SalaryId
);

/// Salary of one staff member for one solar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salary {
    #[serde(flatten)]
    pub base: BaseAggregate<SalaryId>,

    /// Reference to a004_staff
    pub staff_id: String,
    /// Denormalized staff name for list display
    pub staff_name: Option<String>,
    pub year: String,
    pub month: SolarMonth,
    pub amount: f64,
    pub paid: f64,
    /// Always `amount - paid`
    pub remainder: f64,
    pub description: String,
}

impl Salary {
    pub fn new_for_insert(dto: &SalaryDto) -> Result<Self, String> {
        let mut salary = Self {
            base: BaseAggregate::new(SalaryId::new_v4()),
            staff_id: dto.staff_id.clone(),
            staff_name: None,
            year: dto.year.trim().to_string(),
            month: SolarMonth::from_number(dto.month)?,
            amount: dto.amount,
            paid: dto.paid,
            remainder: 0.0,
            description: dto.description.clone(),
        };
        salary.recalculate();
        Ok(salary)
    }

    pub fn update(&mut self, dto: &SalaryDto) -> Result<(), String> {
        self.staff_id = dto.staff_id.clone();
        self.year = dto.year.trim().to_string();
        self.month = SolarMonth::from_number(dto.month)?;
        self.amount = dto.amount;
        self.paid = dto.paid;
        self.description = dto.description.clone();
        self.recalculate();
        Ok(())
    }

    pub fn recalculate(&mut self) {
        self.remainder = self.amount - self.paid;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.staff_id.trim().is_empty() {
            return Err("کارمند انتخاب نشده است".into());
        }
        if !is_valid_year(&self.year) {
            return Err("سال باید چهار رقم باشد".into());
        }
        if !(self.amount >= 0.0) || !(self.paid >= 0.0) {
            return Err("مبالغ نمی‌تواند منفی باشد".into());
        }
        if self.paid > self.amount {
            return Err("مبلغ پرداخت شده بیشتر از معاش است".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.recalculate();
        self.base.before_write();
    }

    pub fn to_dto(&self) -> SalaryDto {
        SalaryDto {
            id: Some(self.base.id.as_string()),
            staff_id: self.staff_id.clone(),
            year: self.year.clone(),
            month: self.month.number(),
            amount: self.amount,
            paid: self.paid,
            description: self.description.clone(),
        }
    }
}

impl AggregateRoot for Salary {
    type Id = SalaryId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "salary"
    }

    fn element_name() -> &'static str {
        "معاش"
    }

    fn list_name() -> &'static str {
        "معاشات"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryDto {
    pub id: Option<String>,
    pub staff_id: String,
    pub year: String,
    pub month: u8,
    pub amount: f64,
    pub paid: f64,
    pub description: String,
}

impl Default for SalaryDto {
    fn default() -> Self {
        Self {
            id: None,
            staff_id: String::new(),
            year: String::new(),
            month: 1,
            amount: 0.0,
            paid: 0.0,
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> SalaryDto {
        SalaryDto {
            staff_id: "s-1".into(),
            year: "1403".into(),
            month: 5,
            amount: 12000.0,
            paid: 7000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_remainder() {
        let salary = Salary::new_for_insert(&dto()).unwrap();
        assert_eq!(salary.remainder, 5000.0);
        assert_eq!(salary.month, SolarMonth::Asad);
        assert!(salary.validate().is_ok());
    }

    #[test]
    fn test_overpaid_rejected() {
        let mut d = dto();
        d.paid = 13000.0;
        assert!(Salary::new_for_insert(&d).unwrap().validate().is_err());
    }

    #[test]
    fn test_invalid_month_rejected() {
        let mut d = dto();
        d.month = 0;
        assert!(Salary::new_for_insert(&d).is_err());
    }

    #[test]
    fn test_update_recalculates() {
        let mut salary = Salary::new_for_insert(&dto()).unwrap();
        let mut d = dto();
        d.paid = 12000.0;
        salary.update(&d).unwrap();
        assert_eq!(salary.remainder, 0.0);
    }
}

use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::solar_month::{is_valid_year, SolarMonth};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Unique expenditure identifier
    ExpenditureId
);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expenditure {
    #[serde(flatten)]
    pub base: BaseAggregate<ExpenditureId>,

    pub category: String,
    pub amount: f64,
    pub description: String,
    pub year: String,
    pub month: SolarMonth,
    /// Person who spent the money
    pub spender: String,
}

impl Expenditure {
    pub fn new_for_insert(dto: &ExpenditureDto) -> Result<Self, String> {
        Ok(Self {
            base: BaseAggregate::new(ExpenditureId::new_v4()),
            category: dto.category.trim().to_string(),
            amount: dto.amount,
            description: dto.description.clone(),
            year: dto.year.trim().to_string(),
            month: SolarMonth::from_number(dto.month)?,
            spender: dto.spender.trim().to_string(),
        })
    }

    pub fn update(&mut self, dto: &ExpenditureDto) -> Result<(), String> {
        self.month = SolarMonth::from_number(dto.month)?;
        self.category = dto.category.trim().to_string();
        self.amount = dto.amount;
        self.description = dto.description.clone();
        self.year = dto.year.trim().to_string();
        self.spender = dto.spender.trim().to_string();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.category.is_empty() {
            return Err("نوع مصرف نمی‌تواند خالی باشد".into());
        }
        if !(self.amount > 0.0) {
            return Err("مبلغ باید بیشتر از صفر باشد".into());
        }
        if !is_valid_year(&self.year) {
            return Err("سال باید چهار رقم باشد".into());
        }
        if self.spender.is_empty() {
            return Err("مصرف کننده نمی‌تواند خالی باشد".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }

    pub fn to_dto(&self) -> ExpenditureDto {
        ExpenditureDto {
            id: Some(self.base.id.as_string()),
            category: self.category.clone(),
            amount: self.amount,
            description: self.description.clone(),
            year: self.year.clone(),
            month: self.month.number(),
            spender: self.spender.clone(),
        }
    }
}

impl AggregateRoot for Expenditure {
    type Id = ExpenditureId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "expenditure"
    }

    fn element_name() -> &'static str {
        "مصرف"
    }

    fn list_name() -> &'static str {
        "مصارف"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenditureDto {
    pub id: Option<String>,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub year: String,
    pub month: u8,
    pub spender: String,
}

impl Default for ExpenditureDto {
    fn default() -> Self {
        Self {
            id: None,
            category: String::new(),
            amount: 0.0,
            description: String::new(),
            year: String::new(),
            month: 1,
            spender: String::new(),
        }
    }
}

/// List response: records plus the sum over all of them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenditureList {
    pub items: Vec<Expenditure>,
    pub total_amount: f64,
}

impl ExpenditureList {
    pub fn new(items: Vec<Expenditure>) -> Self {
        let total_amount = items.iter().map(|e| e.amount).sum();
        Self {
            items,
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(amount: f64) -> ExpenditureDto {
        ExpenditureDto {
            category: "برق".into(),
            amount,
            year: "1403".into(),
            month: 2,
            spender: "احمد".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_total() {
        let items = vec![
            Expenditure::new_for_insert(&dto(1500.0)).unwrap(),
            Expenditure::new_for_insert(&dto(250.5)).unwrap(),
        ];
        assert_eq!(ExpenditureList::new(items).total_amount, 1750.5);
        assert_eq!(ExpenditureList::new(vec![]).total_amount, 0.0);
    }

    #[test]
    fn test_validation() {
        assert!(Expenditure::new_for_insert(&dto(10.0)).unwrap().validate().is_ok());
        assert!(Expenditure::new_for_insert(&dto(0.0)).unwrap().validate().is_err());

        let mut bad_year = dto(10.0);
        bad_year.year = "03".into();
        assert!(Expenditure::new_for_insert(&bad_year).unwrap().validate().is_err());
    }
}

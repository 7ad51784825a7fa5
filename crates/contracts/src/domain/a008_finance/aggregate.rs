use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Unique finance transfer identifier
    FinanceId
);

/// Money handed from one person to another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finance {
    #[serde(flatten)]
    pub base: BaseAggregate<FinanceId>,

    pub from_person: String,
    pub to_person: String,
    pub amount: f64,
    pub description: String,
    /// Date in format "YYYY-MM-DD"
    pub issue_date: String,
}

impl Finance {
    pub fn new_for_insert(dto: &FinanceDto) -> Self {
        Self {
            base: BaseAggregate::new(FinanceId::new_v4()),
            from_person: dto.from_person.trim().to_string(),
            to_person: dto.to_person.trim().to_string(),
            amount: dto.amount,
            description: dto.description.clone(),
            issue_date: dto.issue_date.trim().to_string(),
        }
    }

    pub fn update(&mut self, dto: &FinanceDto) {
        self.from_person = dto.from_person.trim().to_string();
        self.to_person = dto.to_person.trim().to_string();
        self.amount = dto.amount;
        self.description = dto.description.clone();
        self.issue_date = dto.issue_date.trim().to_string();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.from_person.is_empty() || self.to_person.is_empty() {
            return Err("پرداخت کننده و دریافت کننده الزامی است".into());
        }
        if !(self.amount > 0.0) {
            return Err("مبلغ باید بیشتر از صفر باشد".into());
        }
        if NaiveDate::parse_from_str(&self.issue_date, "%Y-%m-%d").is_err() {
            return Err("تاریخ نامعتبر است".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }

    pub fn to_dto(&self) -> FinanceDto {
        FinanceDto {
            id: Some(self.base.id.as_string()),
            from_person: self.from_person.clone(),
            to_person: self.to_person.clone(),
            amount: self.amount,
            description: self.description.clone(),
            issue_date: self.issue_date.clone(),
        }
    }
}

impl AggregateRoot for Finance {
    type Id = FinanceId;

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
        "a008"
    }

    fn collection_name() -> &'static str {
        "finance"
    }

    fn element_name() -> &'static str {
        "برداشت"
    }

    fn list_name() -> &'static str {
        "برداشت ها"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceDto {
    pub id: Option<String>,
    pub from_person: String,
    pub to_person: String,
    pub amount: f64,
    pub description: String,
    pub issue_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_issue_date() {
        let mut dto = FinanceDto {
            from_person: "حاجی".into(),
            to_person: "بانک".into(),
            amount: 5000.0,
            issue_date: "2024-05-01".into(),
            ..Default::default()
        };
        assert!(Finance::new_for_insert(&dto).validate().is_ok());

        dto.issue_date = "".into();
        assert!(Finance::new_for_insert(&dto).validate().is_err());
    }
}

use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::solar_month::{is_valid_year, SolarMonth};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::aggregate_id!(
    /// Unique income identifier
    IncomeId
);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    #[serde(flatten)]
    pub base: BaseAggregate<IncomeId>,

    pub source: String,
    pub amount: f64,
    pub description: String,
    pub year: String,
    pub month: SolarMonth,
    /// Who received the money
    pub receiver: String,
    /// Who paid, if known
    pub consumer: Option<String>,
}

impl Income {
    pub fn new_for_insert(dto: &IncomeDto) -> Result<Self, String> {
        Ok(Self {
            base: BaseAggregate::new(IncomeId::new_v4()),
            source: dto.source.trim().to_string(),
            amount: dto.amount,
            description: dto.description.clone(),
            year: dto.year.trim().to_string(),
            month: SolarMonth::from_number(dto.month)?,
            receiver: dto.receiver.trim().to_string(),
            consumer: non_blank(&dto.consumer),
        })
    }

    pub fn update(&mut self, dto: &IncomeDto) -> Result<(), String> {
        self.month = SolarMonth::from_number(dto.month)?;
        self.source = dto.source.trim().to_string();
        self.amount = dto.amount;
        self.description = dto.description.clone();
        self.year = dto.year.trim().to_string();
        self.receiver = dto.receiver.trim().to_string();
        self.consumer = non_blank(&dto.consumer);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.source.is_empty() {
            return Err("منبع عاید نمی‌تواند خالی باشد".into());
        }
        if !(self.amount > 0.0) {
            return Err("مبلغ باید بیشتر از صفر باشد".into());
        }
        if !is_valid_year(&self.year) {
            return Err("سال باید چهار رقم باشد".into());
        }
        if self.receiver.is_empty() {
            return Err("دریافت کننده نمی‌تواند خالی باشد".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }

    pub fn to_dto(&self) -> IncomeDto {
        IncomeDto {
            id: Some(self.base.id.as_string()),
            source: self.source.clone(),
            amount: self.amount,
            description: self.description.clone(),
            year: self.year.clone(),
            month: self.month.number(),
            receiver: self.receiver.clone(),
            consumer: self.consumer.clone(),
        }
    }

    /// Newest period first: year desc, month desc, created_at desc
    pub fn list_order(a: &Income, b: &Income) -> Ordering {
        b.year
            .cmp(&a.year)
            .then(b.month.cmp(&a.month))
            .then(b.base.metadata.created_at.cmp(&a.base.metadata.created_at))
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl AggregateRoot for Income {
    type Id = IncomeId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "income"
    }

    fn element_name() -> &'static str {
        "عاید"
    }

    fn list_name() -> &'static str {
        "عواید"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeDto {
    pub id: Option<String>,
    pub source: String,
    pub amount: f64,
    pub description: String,
    pub year: String,
    pub month: u8,
    pub receiver: String,
    pub consumer: Option<String>,
}

impl Default for IncomeDto {
    fn default() -> Self {
        Self {
            id: None,
            source: String::new(),
            amount: 0.0,
            description: String::new(),
            year: String::new(),
            month: 1,
            receiver: String::new(),
            consumer: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeList {
    pub items: Vec<Income>,
    pub total_amount: f64,
}

impl IncomeList {
    /// Sorts by `Income::list_order` and sums the amounts
    pub fn new(mut items: Vec<Income>) -> Self {
        items.sort_by(Income::list_order);
        let total_amount = items.iter().map(|i| i.amount).sum();
        Self {
            items,
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(year: &str, month: u8, amount: f64) -> Income {
        Income::new_for_insert(&IncomeDto {
            source: "کرایه".into(),
            amount,
            year: year.into(),
            month,
            receiver: "حاجی".into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_list_is_newest_first() {
        let list = IncomeList::new(vec![
            income("1402", 12, 10.0),
            income("1403", 1, 20.0),
            income("1403", 7, 30.0),
        ]);
        let periods: Vec<_> = list
            .items
            .iter()
            .map(|i| (i.year.as_str(), i.month.number()))
            .collect();
        assert_eq!(periods, vec![("1403", 7), ("1403", 1), ("1402", 12)]);
        assert_eq!(list.total_amount, 60.0);
    }

    #[test]
    fn test_blank_consumer_is_none() {
        let dto = IncomeDto {
            consumer: Some("   ".into()),
            ..Default::default()
        };
        assert!(non_blank(&dto.consumer).is_none());
        assert_eq!(non_blank(&Some(" علی ".into())).as_deref(), Some("علی"));
    }
}

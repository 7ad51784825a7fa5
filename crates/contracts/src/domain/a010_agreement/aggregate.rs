use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::floor::Floor;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Unique agreement identifier
    AgreementId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgreementStatus {
    Active,
    InActive,
}

impl AgreementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementStatus::Active => "Active",
            AgreementStatus::InActive => "InActive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(AgreementStatus::Active),
            "InActive" => Some(AgreementStatus::InActive),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgreementStatus::Active => "فعال",
            AgreementStatus::InActive => "غیر فعال",
        }
    }
}

/// Rental agreement between the building and a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agreement {
    #[serde(flatten)]
    pub base: BaseAggregate<AgreementId>,

    /// Reference to a009_customer
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub status: AgreementStatus,
    /// Shop numbers covered by the agreement
    pub shops: Vec<String>,
    pub advance: f64,
    /// Monthly rent
    pub rent: f64,
    /// Monthly service fee
    pub service: f64,
    pub taken: f64,
    pub floor: Floor,
}

impl Agreement {
    pub fn new_for_insert(dto: &AgreementDto) -> Result<Self, String> {
        Ok(Self {
            base: BaseAggregate::new(AgreementId::new_v4()),
            customer_id: dto.customer_id.clone(),
            customer_name: None,
            status: dto.status,
            shops: clean_shops(&dto.shops),
            advance: dto.advance,
            rent: dto.rent,
            service: dto.service,
            taken: dto.taken,
            floor: Floor::from_number(dto.floor)?,
        })
    }

    pub fn update(&mut self, dto: &AgreementDto) -> Result<(), String> {
        self.floor = Floor::from_number(dto.floor)?;
        self.customer_id = dto.customer_id.clone();
        self.status = dto.status;
        self.shops = clean_shops(&dto.shops);
        self.advance = dto.advance;
        self.rent = dto.rent;
        self.service = dto.service;
        self.taken = dto.taken;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == AgreementStatus::Active
    }

    /// Shop numbers joined for display and rent sheets
    pub fn shops_label(&self) -> String {
        self.shops.join(", ")
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.customer_id.trim().is_empty() {
            return Err("دوکاندار انتخاب نشده است".into());
        }
        if self.shops.is_empty() {
            return Err("حداقل یک دوکان باید وارد شود".into());
        }
        for value in [self.advance, self.rent, self.service, self.taken] {
            if !(value >= 0.0) {
                return Err("مبالغ نمی‌تواند منفی باشد".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.before_write();
    }

    pub fn to_dto(&self) -> AgreementDto {
        AgreementDto {
            id: Some(self.base.id.as_string()),
            customer_id: self.customer_id.clone(),
            status: self.status,
            shops: self.shops.clone(),
            advance: self.advance,
            rent: self.rent,
            service: self.service,
            taken: self.taken,
            floor: self.floor.number(),
        }
    }
}

fn clean_shops(shops: &[String]) -> Vec<String> {
    shops
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl AggregateRoot for Agreement {
    type Id = AgreementId;

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
        "a010"
    }

    fn collection_name() -> &'static str {
        "agreement"
    }

    fn element_name() -> &'static str {
        "قرارداد"
    }

    fn list_name() -> &'static str {
        "قراردادها"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementDto {
    pub id: Option<String>,
    pub customer_id: String,
    pub status: AgreementStatus,
    #[serde(default)]
    pub shops: Vec<String>,
    pub advance: f64,
    pub rent: f64,
    pub service: f64,
    pub taken: f64,
    pub floor: u8,
}

impl Default for AgreementDto {
    fn default() -> Self {
        Self {
            id: None,
            customer_id: String::new(),
            status: AgreementStatus::Active,
            shops: Vec::new(),
            advance: 0.0,
            rent: 0.0,
            service: 0.0,
            taken: 0.0,
            floor: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_range() {
        let mut dto = AgreementDto {
            customer_id: "c-1".into(),
            shops: vec!["12".into(), " ".into(), "13 ".into()],
            rent: 4000.0,
            floor: 6,
            ..Default::default()
        };
        let agreement = Agreement::new_for_insert(&dto).unwrap();
        assert_eq!(agreement.floor, Floor::Underground);
        assert_eq!(agreement.shops_label(), "12, 13");
        assert!(agreement.validate().is_ok());

        dto.floor = 7;
        assert!(Agreement::new_for_insert(&dto).is_err());
    }

    #[test]
    fn test_requires_shop() {
        let dto = AgreementDto {
            customer_id: "c-1".into(),
            ..Default::default()
        };
        assert!(Agreement::new_for_insert(&dto).unwrap().validate().is_err());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AgreementStatus::InActive).unwrap(),
            "\"InActive\""
        );
        assert_eq!(AgreementStatus::parse("Active"), Some(AgreementStatus::Active));
    }
}

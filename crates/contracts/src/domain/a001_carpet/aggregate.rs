use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::aggregate_id!(
    /// Unique carpet identifier
    CarpetId
);

// ============================================================================
// Enums
// ============================================================================

/// Whether the carpet was received into stock or sent out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarpetDirection {
    Import,
    Export,
}

impl CarpetDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarpetDirection::Import => "import",
            CarpetDirection::Export => "export",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "import" => Some(CarpetDirection::Import),
            "export" => Some(CarpetDirection::Export),
            _ => None,
        }
    }
}

/// Supplier the carpet comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarpetSource {
    #[serde(rename = "حاجی تقی")]
    HajiTaqi,
    #[serde(rename = "جعفر")]
    Jafar,
    #[serde(rename = "اسحاق")]
    Ishaq,
}

impl CarpetSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            CarpetSource::HajiTaqi => "حاجی تقی",
            CarpetSource::Jafar => "جعفر",
            CarpetSource::Ishaq => "اسحاق",
        }
    }

    pub fn all() -> Vec<CarpetSource> {
        vec![CarpetSource::HajiTaqi, CarpetSource::Jafar, CarpetSource::Ishaq]
    }

    pub fn from_display_name(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.display_name() == s)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carpet {
    #[serde(flatten)]
    pub base: BaseAggregate<CarpetId>,

    pub direction: CarpetDirection,
    pub source: CarpetSource,
    pub description: String,
    pub quality: String,
    pub length: f64,
    pub width: f64,
    pub rate: f64,
    /// Always `length * width * rate`, computed on write
    pub price: f64,
    pub weight: String,
    pub degree: Option<String>,
}

impl Carpet {
    pub fn new_for_insert(dto: &CarpetDto) -> Result<Self, String> {
        let mut carpet = Self {
            base: BaseAggregate::new(CarpetId::new_v4()),
            direction: dto.direction,
            source: dto.source.ok_or("منبع قالین انتخاب نشده است")?,
            description: dto.description.clone(),
            quality: dto.quality.clone(),
            length: dto.length,
            width: dto.width,
            rate: dto.rate,
            price: 0.0,
            weight: dto.weight.clone(),
            degree: dto.degree.clone(),
        };
        carpet.recalculate_price();
        Ok(carpet)
    }

    /// Apply an edit. The direction of an existing carpet never changes.
    pub fn update(&mut self, dto: &CarpetDto) -> Result<(), String> {
        self.source = dto.source.ok_or("منبع قالین انتخاب نشده است")?;
        self.description = dto.description.clone();
        self.quality = dto.quality.clone();
        self.length = dto.length;
        self.width = dto.width;
        self.rate = dto.rate;
        self.weight = dto.weight.clone();
        self.degree = dto.degree.clone();
        self.recalculate_price();
        Ok(())
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    pub fn recalculate_price(&mut self) {
        self.price = round2(self.area() * self.rate);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("توضیحات نمی‌تواند خالی باشد".into());
        }
        if self.quality.trim().is_empty() {
            return Err("کیفیت نمی‌تواند خالی باشد".into());
        }
        if self.weight.trim().is_empty() {
            return Err("وزن نمی‌تواند خالی باشد".into());
        }
        if !(self.length > 0.0) || !(self.width > 0.0) {
            return Err("طول و عرض باید بزرگتر از صفر باشد".into());
        }
        if !(self.rate > 0.0) {
            return Err("نرخ باید بزرگتر از صفر باشد".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.recalculate_price();
        self.base.before_write();
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl AggregateRoot for Carpet {
    type Id = CarpetId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "carpet"
    }

    fn element_name() -> &'static str {
        "قالین"
    }

    fn list_name() -> &'static str {
        "قالین ها"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload. Price is not part of it: the server computes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarpetDto {
    pub id: Option<String>,
    pub direction: CarpetDirection,
    pub source: Option<CarpetSource>,
    pub description: String,
    pub quality: String,
    pub length: f64,
    pub width: f64,
    pub rate: f64,
    pub weight: String,
    pub degree: Option<String>,
}

impl CarpetDto {
    pub fn empty(direction: CarpetDirection) -> Self {
        Self {
            id: None,
            direction,
            source: None,
            description: String::new(),
            quality: String::new(),
            length: 0.0,
            width: 0.0,
            rate: 0.0,
            weight: String::new(),
            degree: None,
        }
    }
}

impl From<&Carpet> for CarpetDto {
    fn from(c: &Carpet) -> Self {
        Self {
            id: Some(c.base.id.as_string()),
            direction: c.direction,
            source: Some(c.source),
            description: c.description.clone(),
            quality: c.quality.clone(),
            length: c.length,
            width: c.width,
            rate: c.rate,
            weight: c.weight.clone(),
            degree: c.degree.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> CarpetDto {
        CarpetDto {
            id: None,
            direction: CarpetDirection::Import,
            source: Some(CarpetSource::Jafar),
            description: "قالین ابریشمی".into(),
            quality: "اعلی".into(),
            length: 3.0,
            width: 2.5,
            rate: 120.0,
            weight: "12".into(),
            degree: None,
        }
    }

    #[test]
    fn test_price_is_area_times_rate() {
        let carpet = Carpet::new_for_insert(&sample_dto()).unwrap();
        assert_eq!(carpet.area(), 7.5);
        assert_eq!(carpet.price, 900.0);
    }

    #[test]
    fn test_update_recomputes_price_and_keeps_direction() {
        let mut carpet = Carpet::new_for_insert(&sample_dto()).unwrap();
        let mut dto = sample_dto();
        dto.direction = CarpetDirection::Export;
        dto.rate = 100.0;
        carpet.update(&dto).unwrap();
        assert_eq!(carpet.price, 750.0);
        assert_eq!(carpet.direction, CarpetDirection::Import);
    }

    #[test]
    fn test_missing_source_rejected() {
        let mut dto = sample_dto();
        dto.source = None;
        assert!(Carpet::new_for_insert(&dto).is_err());
    }

    #[test]
    fn test_validation() {
        let carpet = Carpet::new_for_insert(&sample_dto()).unwrap();
        assert!(carpet.validate().is_ok());

        let mut dto = sample_dto();
        dto.width = 0.0;
        assert!(Carpet::new_for_insert(&dto).unwrap().validate().is_err());

        let mut dto = sample_dto();
        dto.description = "  ".into();
        assert!(Carpet::new_for_insert(&dto).unwrap().validate().is_err());
    }

    #[test]
    fn test_source_serializes_as_supplier_name() {
        let json = serde_json::to_string(&CarpetSource::HajiTaqi).unwrap();
        assert_eq!(json, "\"حاجی تقی\"");
        assert_eq!(
            CarpetSource::from_display_name("اسحاق"),
            Some(CarpetSource::Ishaq)
        );
    }
}

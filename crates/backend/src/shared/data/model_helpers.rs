//! Conversions shared by the sea-orm repositories.

use chrono::{DateTime, Utc};
use contracts::domain::common::EntityMetadata;
use contracts::enums::floor::Floor;
use contracts::enums::solar_month::SolarMonth;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

pub fn metadata_from_row(
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    is_deleted: bool,
    version: i32,
) -> EntityMetadata {
    EntityMetadata {
        created_at: created_at.unwrap_or_else(Utc::now),
        updated_at: updated_at.unwrap_or_else(Utc::now),
        is_deleted,
        version,
    }
}

pub fn parse_uuid(id: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(id).map_err(|e| anyhow::anyhow!("Invalid id {} in database: {}", id, e))
}

pub fn month_from_column(raw: i32) -> anyhow::Result<SolarMonth> {
    u8::try_from(raw)
        .map_err(|_| anyhow::anyhow!("Invalid month {} in database", raw))
        .and_then(|n| SolarMonth::from_number(n).map_err(anyhow::Error::msg))
}

pub fn floor_from_column(raw: i32) -> anyhow::Result<Floor> {
    u8::try_from(raw)
        .map_err(|_| anyhow::anyhow!("Invalid floor {} in database", raw))
        .and_then(|n| Floor::from_number(n).map_err(anyhow::Error::msg))
}

/// JSON text column -> value
pub fn from_json_column<T: DeserializeOwned>(column: &str, raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).map_err(|e| anyhow::anyhow!("Invalid JSON in column {}: {}", column, e))
}

/// value -> JSON text column
pub fn to_json_column<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_column() {
        let raw = to_json_column(&vec!["پشم".to_string(), "رنگ".to_string()]).unwrap();
        let back: Vec<String> = from_json_column("materials", &raw).unwrap();
        assert_eq!(back, vec!["پشم", "رنگ"]);
        assert!(from_json_column::<Vec<String>>("materials", "{oops").is_err());
    }

    #[test]
    fn test_month_and_floor_columns() {
        assert_eq!(month_from_column(12).unwrap(), SolarMonth::Hut);
        assert!(month_from_column(13).is_err());
        assert!(month_from_column(-1).is_err());
        assert_eq!(floor_from_column(6).unwrap(), Floor::Underground);
        assert!(floor_from_column(0).is_err());
    }

    #[test]
    fn test_metadata_defaults_missing_timestamps() {
        let meta = metadata_from_row(None, None, true, 4);
        assert!(meta.is_deleted);
        assert_eq!(meta.version, 4);
    }
}

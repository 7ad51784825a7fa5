use serde::{Deserialize, Serialize};

/// Month of the solar Hijri calendar used for all bookkeeping periods.
///
/// Serialized as its number (1..=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SolarMonth {
    Hamal = 1,
    Sawr = 2,
    Jawza = 3,
    Saratan = 4,
    Asad = 5,
    Sonbola = 6,
    Mizan = 7,
    Aqrab = 8,
    Qaws = 9,
    Jadi = 10,
    Dalw = 11,
    Hut = 12,
}

impl SolarMonth {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Dari month name
    pub fn display_name(&self) -> &'static str {
        match self {
            SolarMonth::Hamal => "حمل",
            SolarMonth::Sawr => "ثور",
            SolarMonth::Jawza => "جوزا",
            SolarMonth::Saratan => "سرطان",
            SolarMonth::Asad => "اسد",
            SolarMonth::Sonbola => "سنبله",
            SolarMonth::Mizan => "میزان",
            SolarMonth::Aqrab => "عقرب",
            SolarMonth::Qaws => "قوس",
            SolarMonth::Jadi => "جدی",
            SolarMonth::Dalw => "دلو",
            SolarMonth::Hut => "حوت",
        }
    }

    pub fn all() -> Vec<SolarMonth> {
        (1..=12).filter_map(|n| SolarMonth::from_number(n).ok()).collect()
    }

    pub fn from_number(n: u8) -> Result<Self, String> {
        match n {
            1 => Ok(SolarMonth::Hamal),
            2 => Ok(SolarMonth::Sawr),
            3 => Ok(SolarMonth::Jawza),
            4 => Ok(SolarMonth::Saratan),
            5 => Ok(SolarMonth::Asad),
            6 => Ok(SolarMonth::Sonbola),
            7 => Ok(SolarMonth::Mizan),
            8 => Ok(SolarMonth::Aqrab),
            9 => Ok(SolarMonth::Qaws),
            10 => Ok(SolarMonth::Jadi),
            11 => Ok(SolarMonth::Dalw),
            12 => Ok(SolarMonth::Hut),
            other => Err(format!("Invalid month: {}", other)),
        }
    }
}

impl TryFrom<u8> for SolarMonth {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SolarMonth::from_number(value)
    }
}

impl From<SolarMonth> for u8 {
    fn from(value: SolarMonth) -> Self {
        value.number()
    }
}

impl std::fmt::Display for SolarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A year field is valid when it is exactly four digits.
pub fn is_valid_year(year: &str) -> bool {
    let year = year.trim();
    year.len() == 4 && year.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers() {
        assert_eq!(SolarMonth::all().len(), 12);
        assert_eq!(SolarMonth::Hamal.number(), 1);
        assert_eq!(SolarMonth::Hut.number(), 12);
        assert!(SolarMonth::from_number(0).is_err());
        assert!(SolarMonth::from_number(13).is_err());
    }

    #[test]
    fn test_month_serializes_as_number() {
        assert_eq!(serde_json::to_string(&SolarMonth::Mizan).unwrap(), "7");
        let m: SolarMonth = serde_json::from_str("10").unwrap();
        assert_eq!(m, SolarMonth::Jadi);
        assert!(serde_json::from_str::<SolarMonth>("13").is_err());
    }

    #[test]
    fn test_year_validation() {
        assert!(is_valid_year("1403"));
        assert!(is_valid_year(" 1403 "));
        assert!(!is_valid_year("140"));
        assert!(!is_valid_year("14a3"));
        assert!(!is_valid_year(""));
    }
}

use serde::{Deserialize, Serialize};

/// Building floor of a rented shop. Serialized as its number (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Floor {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
    Underground = 6,
}

impl Floor {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Floor::First => "منزل اول",
            Floor::Second => "منزل دوم",
            Floor::Third => "منزل سوم",
            Floor::Fourth => "منزل چهارم",
            Floor::Fifth => "منزل پنجم",
            Floor::Underground => "زیرزمین",
        }
    }

    pub fn all() -> Vec<Floor> {
        vec![
            Floor::First,
            Floor::Second,
            Floor::Third,
            Floor::Fourth,
            Floor::Fifth,
            Floor::Underground,
        ]
    }

    pub fn from_number(n: u8) -> Result<Self, String> {
        match n {
            1 => Ok(Floor::First),
            2 => Ok(Floor::Second),
            3 => Ok(Floor::Third),
            4 => Ok(Floor::Fourth),
            5 => Ok(Floor::Fifth),
            6 => Ok(Floor::Underground),
            other => Err(format!("Invalid floor: {}", other)),
        }
    }
}

impl TryFrom<u8> for Floor {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Floor::from_number(value)
    }
}

impl From<Floor> for u8 {
    fn from(value: Floor) -> Self {
        value.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_from_number() {
        assert_eq!(Floor::from_number(6).unwrap(), Floor::Underground);
        assert!(Floor::from_number(7).is_err());
        assert_eq!(Floor::all().len(), 6);
    }
}

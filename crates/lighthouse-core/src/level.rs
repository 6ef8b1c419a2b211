//! Severity levels
//!
//! A level states how internal an error layer is: the larger the level, the
//! more sensitive its content and the smaller the audience allowed to see it.
//! Levels are compared with plain ordering; the power-of-two values are only
//! spacing, never bit flags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::LighthouseError;

/// Totally ordered severity/sensitivity level of an error layer
///
/// Variants are declared in ascending order so that the derived `Ord`
/// matches the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Discloses nothing; spinning at this level always yields nothing
    Noop = 0,
    HighUser = 1,
    MediumUser = 2,
    LowUser = 4,
    Info = 8,
    Warn = 16,
    #[default]
    Error = 32,
    HighDebug = 64,
    MediumDebug = 128,
    /// Everything, down to the root cause
    DeepDebug = 255,
}

impl Level {
    /// All levels, ascending
    pub const ALL: [Level; 10] = [
        Level::Noop,
        Level::HighUser,
        Level::MediumUser,
        Level::LowUser,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::HighDebug,
        Level::MediumDebug,
        Level::DeepDebug,
    ];

    /// Numeric value of the level
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// snake_case name of the level
    pub fn name(self) -> &'static str {
        match self {
            Level::Noop => "noop",
            Level::HighUser => "high_user",
            Level::MediumUser => "medium_user",
            Level::LowUser => "low_user",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::HighDebug => "high_debug",
            Level::MediumDebug => "medium_debug",
            Level::DeepDebug => "deep_debug",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LighthouseError;

    fn try_from(value: u8) -> Result<Self, LighthouseError> {
        Level::ALL
            .into_iter()
            .find(|lvl| lvl.as_u8() == value)
            .ok_or(LighthouseError::UnknownLevel {
                value: value.to_string(),
            })
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

/// Accepts either the integer value or the snake_case name
impl FromStr for Level {
    type Err = LighthouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<u8>() {
            return Level::try_from(value);
        }
        let lowered = s.to_ascii_lowercase().replace('-', "_");
        Level::ALL
            .into_iter()
            .find(|lvl| lvl.name() == lowered)
            .ok_or(LighthouseError::UnknownLevel {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(u8),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(value) => Level::try_from(value),
            Repr::Name(name) => name.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_follows_numeric_value() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].as_u8() < pair[1].as_u8());
        }
    }

    #[test]
    fn test_try_from_rejects_unnamed_values() {
        assert_eq!(Level::try_from(128).unwrap(), Level::MediumDebug);
        assert!(Level::try_from(3).is_err());
        assert!(Level::try_from(200).is_err());
    }

    #[test]
    fn test_try_into_every_named_value() {
        for level in Level::ALL {
            let converted: Result<Level, LighthouseError> = level.as_u8().try_into();
            assert_eq!(converted, Ok(level));
        }
        let rejected: Result<Level, LighthouseError> = 5u8.try_into();
        assert_eq!(rejected.unwrap_err().code(), "ERR_UNKNOWN_LEVEL");
    }

    #[test]
    fn test_parse_by_name_or_number() {
        assert_eq!("deep_debug".parse::<Level>().unwrap(), Level::DeepDebug);
        assert_eq!("High-User".parse::<Level>().unwrap(), Level::HighUser);
        assert_eq!("64".parse::<Level>().unwrap(), Level::HighDebug);
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn test_display_is_numeric() {
        assert_eq!(Level::DeepDebug.to_string(), "255");
        assert_eq!(Level::Noop.to_string(), "0");
    }

    #[test]
    fn test_serde_accepts_int_and_name() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "16");
        let from_int: Level = serde_json::from_str("8").unwrap();
        let from_name: Level = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(from_int, Level::Info);
        assert_eq!(from_name, Level::Info);
        assert!(serde_json::from_str::<Level>("7").is_err());
    }
}

//! Season type in the NHL API's `YYYYYYYY` form.

use crate::error::{NhlError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An NHL season, identified by the year it starts in.
///
/// Rendered the way the API expects it: both years concatenated, so the
/// season starting in autumn 2016 is `20162017`.
///
/// # Examples
///
/// ```rust
/// use nhl_stats::Season;
///
/// let season: Season = "20162017".parse().unwrap();
/// assert_eq!(season, Season::new(2016).unwrap());
/// assert_eq!(season.to_string(), "20162017");
/// assert!(Season::new(9999).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(u16);

impl Season {
    /// Last start year whose end year still fits in four digits.
    pub const MAX_START_YEAR: u16 = 9998;

    pub fn new(start_year: u16) -> Result<Self> {
        if start_year > Self::MAX_START_YEAR {
            return Err(NhlError::InvalidSeason {
                value: start_year.to_string(),
            });
        }
        Ok(Self(start_year))
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    pub fn end_year(&self) -> u16 {
        self.0 + 1
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:04}", self.start_year(), self.end_year())
    }
}

impl FromStr for Season {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NhlError::InvalidSeason {
            value: s.to_string(),
        };

        let s = s.trim();
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let start: u16 = s[..4].parse().map_err(|_| invalid())?;
        let end: u16 = s[4..].parse().map_err(|_| invalid())?;
        if start.checked_add(1) != Some(end) {
            return Err(invalid());
        }

        Self::new(start).map_err(|_| invalid())
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

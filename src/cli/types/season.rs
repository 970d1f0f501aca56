//! Season strings of the form "YYYY-YYYY".

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use crate::error::{Result, UnderstatError};
use crate::MIN_SEASON_YEAR;

/// A football season, stored as its calendar start year.
///
/// Displays as "2021-2022"; parses only strings of that exact shape where
/// the second year is the first plus one and the first year is at least
/// [`MIN_SEASON_YEAR`]. Validation happens here, before any I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season(u16);

impl Season {
    /// Build from a start year without range checking (callers that loop
    /// over the supported window already stay within it).
    pub fn from_start_year(year: u16) -> Self {
        Self(year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// The key the remote source uses for this season ("2021").
    pub fn year_label(&self) -> String {
        self.0.to_string()
    }

    /// The season currently being played: from August onwards the season
    /// starting this calendar year, before August the one starting last year.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::current_for(today.year() as u16, today.month())
    }

    /// August-boundary rule, split out so tests can pin the date.
    pub fn current_for(year: u16, month: u32) -> Self {
        if month >= 8 {
            Self(year)
        } else {
            Self(year - 1)
        }
    }

    fn invalid(s: &str, reason: &str) -> UnderstatError {
        UnderstatError::InvalidSeason {
            season: s.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.0 + 1)
    }
}

impl FromStr for Season {
    type Err = UnderstatError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(Self::invalid(s, "expected the form YYYY-YYYY"));
        }
        if parts
            .iter()
            .any(|p| p.len() != 4 || !p.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(Self::invalid(s, "both years must be four digits"));
        }
        let start: u16 = parts[0].parse()?;
        let end: u16 = parts[1].parse()?;
        if end != start + 1 {
            return Err(Self::invalid(s, "the years must be consecutive"));
        }
        if start < MIN_SEASON_YEAR {
            return Err(Self::invalid(s, "data is unavailable before 2014"));
        }
        Ok(Self(start))
    }
}

//! Heuristics used to clean readings and select storms.

use chrono::{Datelike, FixedOffset, Offset, Utc};
use thiserror::Error;

/// Hourly totals above this many millimetres are treated as sensor artifacts.
pub const DEFAULT_MAX_HOURLY_MM: f64 = 150.0;
/// Storms must last strictly fewer hours than this.
pub const DEFAULT_MAX_HOURS: usize = 3;
pub const DEFAULT_FIRST_YEAR: i32 = 1980;
pub const DEFAULT_LAST_YEAR: i32 = 2025;
/// Fixed "MST" display offset. No daylight saving.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -6;
pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("First year {first} is after last year {last}")]
    InvertedYearRange { first: i32, last: i32 },
    #[error("Number of storms to keep must be at least one")]
    ZeroTop,
    #[error("Maximum storm length must be at least one hour")]
    ZeroMaxHours,
    #[error("Hourly ceiling must be positive, got {0}")]
    NonPositiveCeiling(f64),
    #[error("UTC offset of {0} hours is out of range")]
    OffsetOutOfRange(i32),
}

/// A calendar window by month and day, independent of year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonWindow {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl SeasonWindow {
    /// June 1 through September 15.
    pub const SUMMER: SeasonWindow = SeasonWindow {
        start: (6, 1),
        end: (9, 15),
    };

    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        let day = (date.month(), date.day());
        self.start <= day && day <= self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StormConfig {
    pub max_hourly_mm: f64,
    pub max_hours: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub season: SeasonWindow,
    pub utc_offset_hours: i32,
    pub top: usize,
}

impl Default for StormConfig {
    fn default() -> Self {
        StormConfig {
            max_hourly_mm: DEFAULT_MAX_HOURLY_MM,
            max_hours: DEFAULT_MAX_HOURS,
            first_year: DEFAULT_FIRST_YEAR,
            last_year: DEFAULT_LAST_YEAR,
            season: SeasonWindow::SUMMER,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            top: DEFAULT_TOP,
        }
    }
}

impl StormConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.first_year > self.last_year {
            return Err(ConfigError::InvertedYearRange {
                first: self.first_year,
                last: self.last_year,
            });
        }
        if self.top == 0 {
            return Err(ConfigError::ZeroTop);
        }
        if self.max_hours == 0 {
            return Err(ConfigError::ZeroMaxHours);
        }
        if !(self.max_hourly_mm > 0.0) {
            return Err(ConfigError::NonPositiveCeiling(self.max_hourly_mm));
        }
        if self.utc_offset_hours.abs() > 23 {
            return Err(ConfigError::OffsetOutOfRange(self.utc_offset_hours));
        }

        Ok(self)
    }

    /// The display offset. `validate` guarantees it is in range.
    pub fn display_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .unwrap_or_else(|| Utc.fix())
    }
}

// -- Tests -------------------------------------------------------------------

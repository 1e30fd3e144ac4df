use chrono::Datelike;

use super::Storm;
use crate::config::{SeasonWindow, StormConfig};

/// Keeps short storms that start in season within a span of years.
#[derive(Debug, Clone, PartialEq)]
pub struct StormFilter {
    pub max_hours: usize,
    pub season: SeasonWindow,
    pub first_year: i32,
    pub last_year: i32,
}

impl Default for StormFilter {
    fn default() -> Self {
        StormFilter::from(&StormConfig::default())
    }
}

impl From<&StormConfig> for StormFilter {
    fn from(config: &StormConfig) -> Self {
        StormFilter {
            max_hours: config.max_hours,
            season: config.season,
            first_year: config.first_year,
            last_year: config.last_year,
        }
    }
}

impl StormFilter {
    pub fn accepts(&self, storm: &Storm) -> bool {
        let year = storm.start.year();

        storm.hours < self.max_hours
            && self.season.contains(&storm.start)
            && (self.first_year..=self.last_year).contains(&year)
    }
}

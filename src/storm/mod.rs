//! Storm extraction: segment a station series, filter, rank across stations.

pub mod filter;
pub mod rank;
pub mod segment;

use chrono::{DateTime, Utc};

use crate::reading::{hourly::Coordinates, HourlyReading};

pub use filter::StormFilter;
pub use rank::rank;
pub use segment::segment;

/// A run of consecutive wet hours at one station.
#[derive(Debug, Clone, PartialEq)]
pub struct Storm {
    pub station: String,
    /// Position of the first hour.
    pub coordinates: Coordinates,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub total_mm: f64,
    pub hours: usize,
}

impl Storm {
    /// Returns `None` for an empty run.
    pub fn from_run(station: &str, run: &[HourlyReading]) -> Option<Self> {
        let first = run.first()?;
        let last = run.last()?;

        Some(Storm {
            station: station.to_string(),
            coordinates: first.coordinates.clone(),
            start: first.hour,
            end: last.hour,
            total_mm: run.iter().map(|r| r.value_mm).sum(),
            hours: run.len(),
        })
    }
}

/// Segments and filters one station's series.
pub fn find_storms(station: &str, readings: &[HourlyReading], filter: &StormFilter) -> Vec<Storm> {
    segment(station, readings)
        .into_iter()
        .filter(|storm| filter.accepts(storm))
        .collect()
}

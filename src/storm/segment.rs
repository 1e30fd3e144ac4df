use chrono::Duration;

use super::Storm;
use crate::reading::HourlyReading;

/// Largest gap, in hours, between two readings of the same storm.
const MAX_GAP_HOURS: i64 = 1;

/// Splits an hour-ordered series into maximal runs of wet hours.
///
/// A run ends on a dry hour, on a gap longer than an hour, or at the end of
/// the series.
pub fn segment(station: &str, readings: &[HourlyReading]) -> Vec<Storm> {
    let max_gap = Duration::hours(MAX_GAP_HOURS);
    let mut storms = Vec::new();
    let mut run: Vec<HourlyReading> = Vec::new();

    for reading in readings {
        if reading.value_mm > 0.0 {
            let continues = run
                .last()
                .map_or(true, |prev| reading.hour - prev.hour <= max_gap);

            if !continues {
                storms.extend(Storm::from_run(station, &run));
                run.clear();
            }
            run.push(reading.clone());
        } else if !run.is_empty() {
            storms.extend(Storm::from_run(station, &run));
            run.clear();
        }
    }

    storms.extend(Storm::from_run(station, &run));

    storms
}

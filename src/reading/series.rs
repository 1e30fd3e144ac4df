//! Loads one station file into a cleaned, hour-ordered series.

use std::{collections::BTreeMap, io::Read};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{
    error::LoadError,
    hourly::{parse_hour, Coordinates, HourlyReading, RawObservation},
    precipitation::Precipitation,
    station_file::StationFile,
};

/// Row counts gathered while cleaning a station.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LoadSummary {
    pub rows: u64,
    pub implausible: u64,
    pub malformed: u64,
    pub bad_coordinates: u64,
    pub hours: u64,
}

impl LoadSummary {
    pub fn add(&mut self, other: &LoadSummary) {
        self.rows += other.rows;
        self.implausible += other.implausible;
        self.malformed += other.malformed;
        self.bad_coordinates += other.bad_coordinates;
        self.hours += other.hours;
    }
}

#[derive(Debug)]
pub struct StationSeries {
    pub station: String,
    pub readings: Vec<HourlyReading>,
    pub summary: LoadSummary,
}

pub fn load_station(file: &StationFile, ceiling_mm: f64) -> Result<StationSeries, LoadError> {
    let reader = csv::Reader::from_path(&file.path)
        .map_err(|e| LoadError::Open(file.path.clone(), e))?;

    let series = clean(&file.station, reader, ceiling_mm)?;
    debug!(station = %series.station, summary = ?series.summary, "Loaded station");

    Ok(series)
}

/// Deduplicates rows per clock hour, keeping the largest value.
pub fn clean<R: Read>(
    station: &str,
    mut reader: csv::Reader<R>,
    ceiling_mm: f64,
) -> Result<StationSeries, LoadError> {
    let mut summary = LoadSummary::default();
    let mut hourly: BTreeMap<DateTime<Utc>, HourlyReading> = BTreeMap::new();

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Row {
            station: station.to_string(),
            line: 1,
            source,
        })?
        .clone();

    for record in reader.records() {
        let row_error = |source: csv::Error| LoadError::Row {
            station: station.to_string(),
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        };
        let record = record.map_err(row_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawObservation = record.deserialize(Some(&headers)).map_err(row_error)?;
        summary.rows += 1;

        let precipitation = Precipitation::parse(&raw.precip, ceiling_mm);
        let Some(value_mm) = precipitation.amount() else {
            summary.implausible += 1;
            continue;
        };
        if precipitation == Precipitation::Malformed {
            summary.malformed += 1;
        }

        let hour = parse_hour(&raw.datetime).map_err(|source| LoadError::DateTime {
            station: station.to_string(),
            line,
            value: raw.datetime.clone(),
            source,
        })?;

        let coordinates = Coordinates::new(&raw.lat, &raw.lon);
        if coordinates.point().is_none() {
            summary.bad_coordinates += 1;
        }

        let keep = match hourly.get(&hour) {
            Some(existing) => value_mm > existing.value_mm,
            None => true,
        };
        if keep {
            hourly.insert(
                hour,
                HourlyReading {
                    hour,
                    value_mm,
                    coordinates,
                },
            );
        }
    }

    let readings: Vec<HourlyReading> = hourly.into_values().collect();
    summary.hours = readings.len() as u64;

    Ok(StationSeries {
        station: station.to_string(),
        readings,
        summary,
    })
}

// -- Tests -------------------------------------------------------------------

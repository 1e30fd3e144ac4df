//! Formats the ranked storms and writes them as CSV and GeoJSON.

pub mod geojson;
pub mod table;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use tempfile::NamedTempFile;

use crate::storm::Storm;

pub const TABLE_FILE_NAME: &str = "top_storms.csv";
pub const GEOJSON_FILE_NAME: &str = "top_storms.geojson";

const MM_PER_INCH: f64 = 25.4;
const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One ranked storm with its display fields resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub site: String,
    /// `[longitude, latitude]`, absent when the source text is not numeric.
    pub point: Option<[f64; 2]>,
    pub location: String,
    pub date: String,
    pub hour_range: String,
    pub length: usize,
    pub mm: f64,
    pub inches: f64,
    pub start_utc: String,
    pub end_utc: String,
}

impl ReportEntry {
    pub fn new(storm: &Storm, offset: &FixedOffset) -> Self {
        let start = storm.start.with_timezone(offset);
        let end = storm.end.with_timezone(offset);

        ReportEntry {
            site: storm.station.clone(),
            point: storm.coordinates.point(),
            location: storm.coordinates.label(),
            date: start.format("%m-%d-%Y").to_string(),
            hour_range: format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")),
            length: storm.hours,
            mm: round2(storm.total_mm),
            inches: round2(storm.total_mm / MM_PER_INCH),
            start_utc: format_utc(&storm.start),
            end_utc: format_utc(&storm.end),
        }
    }
}

pub fn entries(storms: &[Storm], offset: &FixedOffset) -> Vec<ReportEntry> {
    storms.iter().map(|s| ReportEntry::new(s, offset)).collect()
}

/// Rounds to two decimals, exact ties to even.
fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format(UTC_FORMAT).to_string()
}

#[derive(Debug)]
pub struct ReportPaths {
    pub table: PathBuf,
    pub geojson: PathBuf,
}

/// Writes both artifacts into `output_dir`.
///
/// Each file is staged in a temporary file and both are only moved into place
/// once both have been written. If the second move fails the first file is
/// removed again.
pub fn write_reports(entries: &[ReportEntry], output_dir: &Path) -> Result<ReportPaths> {
    let mut table_tmp = NamedTempFile::new_in(output_dir)
        .with_context(|| format!("Cannot create files in `{}`", output_dir.display()))?;
    table::write_table(entries, table_tmp.as_file_mut())?;
    table_tmp.as_file_mut().flush()?;

    let mut geojson_tmp = NamedTempFile::new_in(output_dir)?;
    geojson::write_geojson(entries, geojson_tmp.as_file_mut())?;
    geojson_tmp.as_file_mut().flush()?;

    let paths = ReportPaths {
        table: output_dir.join(TABLE_FILE_NAME),
        geojson: output_dir.join(GEOJSON_FILE_NAME),
    };
    table_tmp.persist(&paths.table)?;
    if let Err(err) = geojson_tmp.persist(&paths.geojson) {
        let _ = fs::remove_file(&paths.table);
        return Err(err).with_context(|| format!("Cannot write `{}`", paths.geojson.display()));
    }

    Ok(paths)
}

// -- Tests -------------------------------------------------------------------

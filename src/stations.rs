//! Runs the load, segment and filter steps for every station file in parallel.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::{
    cli::create_progress_bar,
    reading::{load_station, LoadError, LoadSummary, StationFile},
    storm::{find_storms, Storm, StormFilter},
};

/// Storms found at one station.
#[derive(Debug)]
pub struct StationStorms {
    pub station: String,
    pub storms: Vec<Storm>,
    pub summary: LoadSummary,
}

/// Processes every file on the blocking pool and joins before returning.
///
/// A station that fails to load contributes no storms. The combined list
/// keeps the order of `files`, then the order storms were found.
pub async fn find_all_storms(
    files: Vec<StationFile>,
    filter: StormFilter,
    ceiling_mm: f64,
) -> Vec<Storm> {
    let progress_bar = create_progress_bar(files.len() as u64, "Scanning stations".to_string());
    let filter = Arc::new(filter);

    let tasks: Vec<_> = files
        .into_iter()
        .map(|file| {
            let filter = Arc::clone(&filter);
            let pb = progress_bar.clone();
            tokio::task::spawn_blocking(move || {
                let result = process_station(&file, &filter, ceiling_mm);
                pb.inc(1);
                (file, result)
            })
        })
        .collect();

    let mut storms = Vec::new();
    let mut totals = LoadSummary::default();
    let mut failed = 0;

    for result in join_all(tasks).await {
        match result {
            Ok((_, Ok(found))) => {
                debug!(station = %found.station, storms = found.storms.len(), "Station scanned");
                totals.add(&found.summary);
                storms.extend(found.storms);
            }
            Ok((file, Err(e))) => {
                failed += 1;
                warn!(station = %file.station, error = %e, "Skipping station");
            }
            Err(e) => {
                failed += 1;
                error!("Task join error: {:?}", e);
            }
        }
    }
    progress_bar.finish_with_message("Stations scanned");

    info!(
        rows = totals.rows,
        hours = totals.hours,
        implausible = totals.implausible,
        malformed = totals.malformed,
        bad_coordinates = totals.bad_coordinates,
        failed,
        candidates = storms.len(),
        "Scanned stations"
    );

    storms
}

pub fn process_station(
    file: &StationFile,
    filter: &StormFilter,
    ceiling_mm: f64,
) -> Result<StationStorms, LoadError> {
    let series = load_station(file, ceiling_mm)?;
    let storms = find_storms(&series.station, &series.readings, filter);

    Ok(StationStorms {
        station: series.station,
        storms,
        summary: series.summary,
    })
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use super::*;
    use crate::{config::StormConfig, reading::list_station_files, report::ReportEntry};

    const HEADER: &str = "station,datetime,lon,lat,elev,precip\n";

    fn write_station(dir: &Path, station: &str, rows: &[(&str, &str)]) {
        let mut body = HEADER.to_string();
        for (datetime, precip) in rows {
            body.push_str(&format!("{station},{datetime},-108.5,45.8,1000,{precip}\n"));
        }
        fs::write(dir.join(format!("{station}.csv")), body).unwrap();
    }

    #[tokio::test]
    async fn should_combine_stations_in_file_order() {
        let dir = TempDir::new().unwrap();
        write_station(
            dir.path(),
            "BBB",
            &[("1995-07-04 01:00", "4"), ("1995-07-04 02:00", "0")],
        );
        write_station(
            dir.path(),
            "AAA",
            &[
                ("1995-07-04 00:00", "0"),
                ("1995-07-04 01:00", "5"),
                ("1995-07-04 02:00", "10"),
                ("1995-07-04 03:00", "0"),
            ],
        );
        let files = list_station_files(dir.path()).unwrap();

        let storms = find_all_storms(files, StormFilter::default(), 150.0).await;

        assert_eq!(storms.len(), 2);
        assert_eq!(storms[0].station, "AAA");
        assert_eq!(storms[0].total_mm, 15.0);
        assert_eq!(storms[1].station, "BBB");
    }

    #[tokio::test]
    async fn should_isolate_failing_station() {
        let dir = TempDir::new().unwrap();
        write_station(dir.path(), "AAA", &[("1995-07-04 01:00", "5")]);
        write_station(dir.path(), "BAD", &[("not a date", "5")]);
        let mut files = list_station_files(dir.path()).unwrap();
        files.push(StationFile {
            station: "GONE".to_string(),
            path: dir.path().join("GONE.csv"),
        });

        let storms = find_all_storms(files, StormFilter::default(), 150.0).await;

        assert_eq!(storms.len(), 1);
        assert_eq!(storms[0].station, "AAA");
    }

    #[test]
    fn should_not_count_implausible_row() {
        let dir = TempDir::new().unwrap();
        write_station(
            dir.path(),
            "AAA",
            &[
                ("1995-07-04 01:00", "5"),
                ("1995-07-04 02:00", "210"),
                ("1995-07-04 03:00", "0"),
            ],
        );
        let file = StationFile::from_path(&dir.path().join("AAA.csv")).unwrap();

        let result = process_station(&file, &StormFilter::default(), 150.0).unwrap();

        assert_eq!(result.storms.len(), 1);
        assert_eq!(result.storms[0].hours, 1);
        assert_eq!(result.storms[0].total_mm, 5.0);
        assert_eq!(result.summary.implausible, 1);
    }

    #[test]
    fn should_report_source_coordinates_and_round_half_even() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AAA.csv");
        fs::write(
            &path,
            format!("{HEADER}AAA,1995-07-04 01:00,-108.50,46.00,1000,2.125\n"),
        )
        .unwrap();
        let file = StationFile::from_path(&path).unwrap();

        let result = process_station(&file, &StormFilter::default(), 150.0).unwrap();
        let entry = ReportEntry::new(&result.storms[0], &StormConfig::default().display_offset());

        assert_eq!(entry.location, "46.00 -108.50");
        assert_eq!(entry.point, Some([-108.5, 46.0]));
        assert_eq!(entry.mm, 2.12);
    }
}

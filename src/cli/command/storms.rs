//! Find the top storms across all station files and save the reports.

use anyhow::Result;
use tracing::info;

use crate::{
    cli::{create_spinner, StormsArgs},
    reading::list_station_files,
    report::{self, ReportPaths},
    stations::find_all_storms,
    storm::{rank, StormFilter},
};

pub async fn storms(args: &StormsArgs) -> Result<ReportPaths> {
    let config = args.config().validate()?;
    let files = list_station_files(&args.data_dir)?;
    info!(
        stations = files.len(),
        data_dir = %args.data_dir.display(),
        "Found station files"
    );

    let candidates = find_all_storms(files, StormFilter::from(&config), config.max_hourly_mm).await;
    let top = rank(candidates, config.top);

    let bar = create_spinner("Writing reports...".to_string());
    let entries = report::entries(&top, &config.display_offset());
    let paths = report::write_reports(&entries, &args.output_dir)?;
    bar.finish_with_message("Reports written");

    info!(storms = entries.len(), "Ranked storms");

    Ok(paths)
}

// -- Tests -------------------------------------------------------------------

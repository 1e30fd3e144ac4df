//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    StormConfig, DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR, DEFAULT_MAX_HOURLY_MM, DEFAULT_MAX_HOURS,
    DEFAULT_TOP, DEFAULT_UTC_OFFSET_HOURS,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the heaviest short summer storms across all stations
    Storms(StormsArgs),
}

#[derive(Args, Debug)]
pub struct StormsArgs {
    /// Directory of per-station hourly CSV files
    #[arg(long, default_value = "asos-noaa-hourly-split")]
    pub data_dir: PathBuf,

    /// Directory the reports are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of storms to report
    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Hourly readings above this many millimetres are discarded
    #[arg(long, default_value_t = DEFAULT_MAX_HOURLY_MM)]
    pub max_hourly_mm: f64,

    /// Storms must last fewer than this many hours
    #[arg(long, default_value_t = DEFAULT_MAX_HOURS)]
    pub max_hours: usize,

    /// Earliest storm start year
    #[arg(long, default_value_t = DEFAULT_FIRST_YEAR)]
    pub first_year: i32,

    /// Latest storm start year
    #[arg(long, default_value_t = DEFAULT_LAST_YEAR)]
    pub last_year: i32,

    /// Fixed offset from UTC used for report dates and hours
    #[arg(long, default_value_t = DEFAULT_UTC_OFFSET_HOURS, allow_negative_numbers = true)]
    pub utc_offset_hours: i32,
}

impl StormsArgs {
    pub fn config(&self) -> StormConfig {
        StormConfig {
            max_hourly_mm: self.max_hourly_mm,
            max_hours: self.max_hours,
            first_year: self.first_year,
            last_year: self.last_year,
            utc_offset_hours: self.utc_offset_hours,
            top: self.top,
            ..StormConfig::default()
        }
    }
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    let style = ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");

    ProgressBar::new(size).with_message(message).with_style(style)
}

// -- Tests -------------------------------------------------------------------

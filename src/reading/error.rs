use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open station file '{0}'")]
    Open(PathBuf, #[source] csv::Error),

    #[error("Failed to read line {line} of station '{station}'")]
    Row {
        station: String,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid datetime '{value}' on line {line} of station '{station}'")]
    DateTime {
        station: String,
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

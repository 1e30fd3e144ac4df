pub mod error;
pub mod hourly;
pub mod precipitation;
pub mod series;
pub mod station_file;

pub use error::LoadError;
pub use hourly::HourlyReading;
pub use series::{load_station, LoadSummary};
pub use station_file::{list_station_files, StationFile};

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::Deserialize;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One row of a split station file. `station` and `elev` are not needed.
#[derive(Debug, Deserialize)]
pub struct RawObservation {
    pub datetime: String,
    pub precip: String,
    pub lat: String,
    pub lon: String,
}

/// The cleaned reading for one clock hour at one station.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyReading {
    pub hour: DateTime<Utc>,
    pub value_mm: f64,
    pub coordinates: Coordinates,
}

/// Station position as written in the source row, trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

impl Coordinates {
    pub fn new(lat: &str, lon: &str) -> Self {
        Coordinates {
            lat: lat.trim().to_string(),
            lon: lon.trim().to_string(),
        }
    }

    /// `"<lat> <lon>"`, verbatim.
    pub fn label(&self) -> String {
        format!("{} {}", self.lat, self.lon)
    }

    /// `[longitude, latitude]` in decimal degrees, if both parse.
    pub fn point(&self) -> Option<[f64; 2]> {
        Some([parse_coordinate(&self.lon)?, parse_coordinate(&self.lat)?])
    }
}

/// Parses a UTC `YYYY-MM-DD HH:MM` timestamp and drops the minutes.
pub fn parse_hour(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let dt = NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)?;
    let hour = dt.date().and_time(dt.time().with_minute(0).unwrap_or(dt.time()));

    Ok(hour.and_utc())
}

pub fn parse_coordinate(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn should_truncate_to_hour() {
        let hour = parse_hour("1995-07-04 13:53").unwrap();

        assert_eq!(hour, Utc.with_ymd_and_hms(1995, 7, 4, 13, 0, 0).unwrap());
    }

    #[test]
    fn should_reject_bad_datetime() {
        assert!(parse_hour("07/04/1995 13:53").is_err());
        assert!(parse_hour("").is_err());
    }

    #[test]
    fn should_parse_coordinates() {
        assert_eq!(parse_coordinate(" 45.8069 "), Some(45.8069));
        assert_eq!(parse_coordinate("-108.5422"), Some(-108.5422));
        assert_eq!(parse_coordinate("M"), None);
        assert_eq!(parse_coordinate("inf"), None);
    }

    #[test]
    fn should_keep_coordinate_text() {
        let coords = Coordinates::new(" 46.00", "-108.50 ");

        assert_eq!(coords.label(), "46.00 -108.50");
        assert_eq!(coords.point(), Some([-108.5, 46.0]));
    }

    #[test]
    fn should_have_no_point_for_bad_coordinates() {
        assert_eq!(Coordinates::new("M", "-108.5").point(), None);
        assert_eq!(Coordinates::new("46.0", "").point(), None);
        assert_eq!(Coordinates::new("M", "").label(), "M ");
    }
}

//! Classification of the raw `precip` column.

/// What a single `precip` cell turned out to hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precipitation {
    Blank,
    /// "T": too little to measure.
    Trace,
    Measured(f64),
    /// Above the hourly ceiling. The whole row is discarded.
    Implausible(f64),
    /// Anything else. Counted as no rain.
    Malformed,
}

impl Precipitation {
    pub fn parse(raw: &str, ceiling_mm: f64) -> Self {
        let raw = raw.trim();

        if raw.is_empty() {
            return Precipitation::Blank;
        }
        if raw == "T" {
            return Precipitation::Trace;
        }

        match raw.parse::<f64>() {
            Ok(v) if v.is_nan() => Precipitation::Malformed,
            Ok(v) if v > ceiling_mm => Precipitation::Implausible(v),
            Ok(v) if v < 0.0 => Precipitation::Malformed,
            Ok(v) => Precipitation::Measured(v),
            Err(_) => Precipitation::Malformed,
        }
    }

    /// Millimetres contributed to the hour, or `None` if the row must be dropped.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Precipitation::Measured(v) => Some(*v),
            Precipitation::Implausible(_) => None,
            Precipitation::Blank | Precipitation::Trace | Precipitation::Malformed => Some(0.0),
        }
    }
}

// -- Tests -------------------------------------------------------------------

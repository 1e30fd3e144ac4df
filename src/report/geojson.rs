//! GeoJSON `FeatureCollection` of storm points.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::ReportEntry;

#[derive(Debug, Serialize)]
pub struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature<'a>>,
}

#[derive(Debug, Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Option<Point>,
    properties: Properties<'a>,
}

#[derive(Debug, Serialize)]
struct Point {
    #[serde(rename = "type")]
    kind: &'static str,
    /// `[longitude, latitude]`
    coordinates: [f64; 2],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Properties<'a> {
    site: &'a str,
    location: &'a str,
    date: &'a str,
    hour_range: &'a str,
    length: usize,
    mm: f64,
    #[serde(rename = "in")]
    inches: f64,
    #[serde(rename = "start_utc")]
    start_utc: &'a str,
    #[serde(rename = "end_utc")]
    end_utc: &'a str,
}

impl<'a> FeatureCollection<'a> {
    pub fn new(entries: &'a [ReportEntry]) -> Self {
        let features = entries
            .iter()
            .map(|e| Feature {
                kind: "Feature",
                geometry: e.point.map(|coordinates| Point {
                    kind: "Point",
                    coordinates,
                }),
                properties: Properties {
                    site: &e.site,
                    location: &e.location,
                    date: &e.date,
                    hour_range: &e.hour_range,
                    length: e.length,
                    mm: e.mm,
                    inches: e.inches,
                    start_utc: &e.start_utc,
                    end_utc: &e.end_utc,
                },
            })
            .collect();

        FeatureCollection {
            kind: "FeatureCollection",
            features,
        }
    }
}

pub fn write_geojson<W: Write>(entries: &[ReportEntry], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &FeatureCollection::new(entries))?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        config::StormConfig, reading::hourly::Coordinates, report::tests::storm_fixture,
    };

    #[test]
    fn should_write_point_features() {
        let entry = ReportEntry::new(&storm_fixture(), &StormConfig::default().display_offset());
        let mut buf = Vec::new();

        write_geojson(&[entry], &mut buf).unwrap();

        let doc: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            doc,
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [-108.5422, 45.8069]
                    },
                    "properties": {
                        "site": "AAA",
                        "location": "45.8069 -108.5422",
                        "date": "07-03-1995",
                        "hourRange": "19:00-20:00",
                        "length": 2,
                        "mm": 15.0,
                        "in": 0.59,
                        "start_utc": "1995-07-04T01:00:00",
                        "end_utc": "1995-07-04T02:00:00"
                    }
                }]
            })
        );
    }

    #[test]
    fn should_write_null_geometry_without_coordinates() {
        let mut storm = storm_fixture();
        storm.coordinates = Coordinates::new("", "-108.5422");
        let entry = ReportEntry::new(&storm, &StormConfig::default().display_offset());
        let mut buf = Vec::new();

        write_geojson(&[entry], &mut buf).unwrap();

        let doc: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(doc["features"][0]["geometry"], Value::Null);
        assert_eq!(doc["features"][0]["properties"]["location"], " -108.5422");
    }

    #[test]
    fn should_write_empty_collection() {
        let mut buf = Vec::new();

        write_geojson(&[], &mut buf).unwrap();

        let doc: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(doc, json!({"type": "FeatureCollection", "features": []}));
    }
}

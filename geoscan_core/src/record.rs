//! Scan records and coordinate formatting

use serde::Serialize;
use std::path::Path;

/// A decoded GPS position in signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One image that yielded GPS coordinates
///
/// Coordinates are kept pre-formatted so every report renders the exact same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Path as produced by the directory walk, including the root prefix
    pub path: String,
    pub latitude: String,
    pub longitude: String,
}

impl Record {
    /// Build a record for `path` from a decoded position
    pub fn from_point(path: &Path, point: GeoPoint) -> Self {
        Self {
            path: path.to_string_lossy().into_owned(),
            latitude: format_coordinate(point.latitude),
            longitude: format_coordinate(point.longitude),
        }
    }

    /// Fields in report column order
    pub fn as_row(&self) -> [&str; 3] {
        [&self.path, &self.latitude, &self.longitude]
    }
}

/// Format a coordinate in shortest round-trip form
///
/// `f64`'s `Display` never switches to exponent notation and emits the fewest
/// digits that parse back to the same value, so `51.5074` stays `51.5074`.
pub fn format_coordinate(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinate_shortest_form() {
        assert_eq!(format_coordinate(51.5074), "51.5074");
        assert_eq!(format_coordinate(0.1278), "0.1278");
        assert_eq!(format_coordinate(-33.8688), "-33.8688");
        assert_eq!(format_coordinate(10.0), "10");
        assert_eq!(format_coordinate(0.5), "0.5");
    }

    #[test]
    fn test_format_coordinate_never_uses_exponent() {
        assert_eq!(format_coordinate(0.000001), "0.000001");
        assert!(!format_coordinate(1e-7).contains('e'));
    }

    #[test]
    fn test_format_coordinate_round_trips() {
        for value in [51.50740000001, -122.4194155, 1.0 / 3.0, 179.999999] {
            let text = format_coordinate(value);
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn test_record_from_point() {
        let record = Record::from_point(
            Path::new("images/trip/a.jpg"),
            GeoPoint::new(51.5074, -0.1278),
        );

        assert_eq!(record.path, "images/trip/a.jpg");
        assert_eq!(record.latitude, "51.5074");
        assert_eq!(record.longitude, "-0.1278");
        assert_eq!(record.as_row(), ["images/trip/a.jpg", "51.5074", "-0.1278"]);
    }
}

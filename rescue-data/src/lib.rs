//! Rescue-point datasets for the rescue engine.
//!
//! Two sources are supported: the bundled station list the companion app
//! ships with, and JSON files supplied at runtime. Loaded coordinates are
//! validated through [`GeoPoint::new`]; a file containing one bad record
//! fails the whole load, matching the engine's atomic-failure posture.

#![forbid(unsafe_code)]

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use rescue_core::{CoordinateError, GeoPoint, RescuePoint};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod bundled;

pub use bundled::bundled_points;

/// One rescue point as stored in a JSON points file.
///
/// `address` and `phone` are optional and carried into the point's
/// metadata map untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescuePointRecord {
    /// Opaque identifier.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Optional street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Optional contact number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RescuePointRecord {
    /// Validate the record's coordinates and convert it into a
    /// [`RescuePoint`].
    ///
    /// # Errors
    /// Returns [`CoordinateError`] for a non-finite or out-of-domain
    /// coordinate.
    pub fn into_point(self) -> Result<RescuePoint, CoordinateError> {
        let location = GeoPoint::new(self.latitude, self.longitude)?;
        let mut point = RescuePoint::with_empty_metadata(self.id, self.name, location);
        if let Some(address) = self.address {
            point.metadata.insert("address".to_owned(), address);
        }
        if let Some(phone) = self.phone {
            point.metadata.insert("phone".to_owned(), phone);
        }
        Ok(point)
    }
}

/// Errors from [`load_points`].
#[derive(Debug, Error)]
pub enum PointsFileError {
    /// The points file could not be opened.
    #[error("failed to open points file {path}")]
    Open {
        /// The offending path.
        path: Utf8PathBuf,
        /// The underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The points file was not a valid JSON array of records.
    #[error("failed to parse points file {path}")]
    Parse {
        /// The offending path.
        path: Utf8PathBuf,
        /// The underlying deserialisation failure.
        #[source]
        source: serde_json::Error,
    },
    /// A record carried an invalid coordinate.
    #[error("rescue point {id} in {path} has an invalid coordinate")]
    InvalidPoint {
        /// Identifier of the offending record.
        id: String,
        /// The offending path.
        path: Utf8PathBuf,
        /// The underlying coordinate failure.
        #[source]
        source: CoordinateError,
    },
}

/// Load rescue points from a JSON file.
///
/// The file holds a JSON array of [`RescuePointRecord`] objects. Every
/// record's coordinates are validated; the load fails on the first
/// invalid record, naming it.
///
/// # Errors
/// Returns [`PointsFileError`] when the file cannot be opened or parsed,
/// or when a record's coordinates are invalid.
pub fn load_points(path: &Utf8Path) -> Result<Vec<RescuePoint>, PointsFileError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        PointsFileError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let records: Vec<RescuePointRecord> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| PointsFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut points = Vec::with_capacity(records.len());
    for record in records {
        let id = record.id.clone();
        let point = record
            .into_point()
            .map_err(|source| PointsFileError::InvalidPoint {
                id,
                path: path.to_path_buf(),
                source,
            })?;
        points.push(point);
    }
    log::debug!("loaded {} rescue points from {path}", points.len());
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn record_conversion_carries_metadata() {
        let record = RescuePointRecord {
            id: "1".into(),
            name: "Cairo Central Rescue Station".into(),
            latitude: 30.0444,
            longitude: 31.2357,
            address: Some("Downtown Cairo, Egypt".into()),
            phone: Some("+20 2 1234 5678".into()),
        };
        let point = record.into_point().expect("valid record");
        assert_eq!(
            point.metadata.get("address"),
            Some(&"Downtown Cairo, Egypt".to_owned())
        );
        assert_eq!(
            point.metadata.get("phone"),
            Some(&"+20 2 1234 5678".to_owned())
        );
    }

    #[rstest]
    fn record_without_contact_details_has_empty_metadata() {
        let record = RescuePointRecord {
            id: "9".into(),
            name: "Field Tent".into(),
            latitude: 30.0,
            longitude: 31.0,
            address: None,
            phone: None,
        };
        let point = record.into_point().expect("valid record");
        assert!(point.metadata.is_empty());
    }

    #[rstest]
    fn record_with_bad_latitude_fails_conversion() {
        let record = RescuePointRecord {
            id: "bad".into(),
            name: "Nowhere".into(),
            latitude: 91.0,
            longitude: 0.0,
            address: None,
            phone: None,
        };
        assert!(record.into_point().is_err());
    }
}

//! Coordinate and rescue-point domain types.
//!
//! Coordinates are WGS84 degrees. The `geo` interop helpers use the
//! crate-wide convention `x = longitude` and `y = latitude`.

use std::collections::HashMap;

use geo::Coord;
use thiserror::Error;

/// Inclusive latitude domain in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Inclusive longitude domain in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Errors describing an out-of-domain or non-finite coordinate.
///
/// Each variant carries the offending value so callers can report
/// precisely which input was bad.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude fell outside `[-90, 90]` degrees.
    #[error("latitude {value} is outside [-90, 90] degrees")]
    LatitudeOutOfRange {
        /// The rejected latitude in degrees.
        value: f64,
    },
    /// Longitude fell outside `[-180, 180]` degrees.
    #[error("longitude {value} is outside [-180, 180] degrees")]
    LongitudeOutOfRange {
        /// The rejected longitude in degrees.
        value: f64,
    },
    /// A coordinate component was NaN or infinite.
    #[error("{axis} {value} is not finite")]
    NotFinite {
        /// Which component was non-finite: `"latitude"` or `"longitude"`.
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// A validated location on Earth's surface.
///
/// # Examples
/// ```
/// use rescue_core::GeoPoint;
///
/// # fn main() -> Result<(), rescue_core::CoordinateError> {
/// let cairo = GeoPoint::new(30.0444, 31.2357)?;
/// assert_eq!(cairo.latitude, 30.0444);
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub longitude: f64,
}

impl GeoPoint {
    /// Validate and construct a [`GeoPoint`].
    ///
    /// # Errors
    /// Returns [`CoordinateError`] when either component is non-finite or
    /// outside its domain.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// Re-check the coordinate domains.
    ///
    /// Fields are public, so a struct literal can bypass [`GeoPoint::new`];
    /// operations that consume points call this before computing.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] for non-finite or out-of-domain values.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude.is_finite() {
            return Err(CoordinateError::NotFinite {
                axis: "latitude",
                value: self.latitude,
            });
        }
        if !self.longitude.is_finite() {
            return Err(CoordinateError::NotFinite {
                axis: "longitude",
                value: self.longitude,
            });
        }
        if !LATITUDE_RANGE.contains(&self.latitude) {
            return Err(CoordinateError::LatitudeOutOfRange {
                value: self.latitude,
            });
        }
        if !LONGITUDE_RANGE.contains(&self.longitude) {
            return Err(CoordinateError::LongitudeOutOfRange {
                value: self.longitude,
            });
        }
        Ok(())
    }

    /// Convert to a `geo` coordinate (`x = longitude`, `y = latitude`).
    ///
    /// # Examples
    /// ```
    /// use rescue_core::GeoPoint;
    ///
    /// # fn main() -> Result<(), rescue_core::CoordinateError> {
    /// let point = GeoPoint::new(30.0, 31.0)?;
    /// let coord = point.to_coord();
    /// assert_eq!(coord.x, 31.0);
    /// assert_eq!(coord.y, 30.0);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub const fn to_coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Validate and construct from a `geo` coordinate.
    ///
    /// # Errors
    /// Returns [`CoordinateError`] for non-finite or out-of-domain values.
    pub fn from_coord(coord: Coord<f64>) -> Result<Self, CoordinateError> {
        Self::new(coord.y, coord.x)
    }
}

/// A named rescue station that can be ranked by proximity.
///
/// The `id` is opaque and only needs to be unique within a single ranking
/// call. `metadata` is free-form pass-through; the companion app stores
/// `address` and `phone` keys there. Ranking never inspects either.
///
/// # Examples
/// ```
/// use rescue_core::{GeoPoint, RescuePoint};
///
/// # fn main() -> Result<(), rescue_core::CoordinateError> {
/// let station = RescuePoint::with_empty_metadata(
///     "1",
///     "Cairo Central Rescue Station",
///     GeoPoint::new(30.0444, 31.2357)?,
/// );
/// assert_eq!(station.id, "1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RescuePoint {
    /// Opaque identifier, unique within one ranking call.
    pub id: String,
    /// Display label; never interpreted.
    pub name: String,
    /// Geospatial position.
    pub location: GeoPoint,
    /// Free-form pass-through metadata such as `address` or `phone`.
    pub metadata: HashMap<String, String>,
}

impl RescuePoint {
    /// Construct a rescue point with the provided metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: GeoPoint,
        metadata: HashMap<String, String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            metadata,
        }
    }

    /// Construct a rescue point without metadata.
    ///
    /// # Examples
    /// ```
    /// use rescue_core::{GeoPoint, RescuePoint};
    ///
    /// let point = RescuePoint::with_empty_metadata(
    ///     "7",
    ///     "Zamalek Emergency Unit",
    ///     GeoPoint { latitude: 30.0618, longitude: 31.2194 },
    /// );
    /// assert!(point.metadata.is_empty());
    /// ```
    pub fn with_empty_metadata(
        id: impl Into<String>,
        name: impl Into<String>,
        location: GeoPoint,
    ) -> Self {
        Self::new(id, name, location, HashMap::new())
    }
}

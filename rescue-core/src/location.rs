//! Device-location capability.
//!
//! The engine never requests or caches location itself; it receives one
//! snapshot per call from a [`LocationProvider`]. Availability is an
//! explicit `Result`, never inferred from a sentinel distance.

use thiserror::Error;

use crate::point::GeoPoint;

/// One observation of the device's position.
///
/// # Examples
/// ```
/// use rescue_core::{GeoPoint, LocationSnapshot};
///
/// let snapshot = LocationSnapshot {
///     point: GeoPoint { latitude: 30.0444, longitude: 31.2357 },
///     accuracy_m: Some(12.0),
/// };
/// assert!(snapshot.accuracy_m.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationSnapshot {
    /// The observed position.
    pub point: GeoPoint,
    /// Reported horizontal accuracy in metres, when the platform provides
    /// one.
    pub accuracy_m: Option<f64>,
}

/// Errors from [`LocationProvider::current_location`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user declined the platform's location permission prompt.
    #[error("location permission denied")]
    PermissionDenied,
    /// Permission was granted but no position fix could be obtained.
    #[error("current position unavailable")]
    PositionUnavailable,
}

/// Supply the observer position for proximity ranking.
///
/// Real implementations wrap a platform location service; the engine only
/// consumes the snapshot. Implementations must be `Send + Sync` so a
/// provider can be shared with background tasks.
///
/// # Examples
/// ```
/// use rescue_core::{GeoPoint, LocationError, LocationProvider, LocationSnapshot};
///
/// struct Pinned;
///
/// impl LocationProvider for Pinned {
///     fn current_location(&self) -> Result<LocationSnapshot, LocationError> {
///         Ok(LocationSnapshot {
///             point: GeoPoint { latitude: 30.0444, longitude: 31.2357 },
///             accuracy_m: None,
///         })
///     }
/// }
///
/// let snapshot = Pinned.current_location()?;
/// assert_eq!(snapshot.point.latitude, 30.0444);
/// # Ok::<(), LocationError>(())
/// ```
pub trait LocationProvider: Send + Sync {
    /// Return the current position, or why it is unavailable.
    ///
    /// # Errors
    /// Returns [`LocationError`] when permission is denied or no fix is
    /// available; callers decide whether to fall back to an unranked list.
    fn current_location(&self) -> Result<LocationSnapshot, LocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DeniedLocationProvider, FixedLocationProvider};
    use rstest::rstest;

    #[rstest]
    fn fixed_provider_returns_its_snapshot() {
        let point = GeoPoint::new(30.0444, 31.2357).expect("valid point");
        let provider = FixedLocationProvider::new(point);
        let snapshot = provider.current_location().expect("fixed provider");
        assert_eq!(snapshot.point, point);
    }

    #[rstest]
    fn denied_provider_reports_permission_denied() {
        let err = DeniedLocationProvider
            .current_location()
            .expect_err("denied provider");
        assert_eq!(err, LocationError::PermissionDenied);
    }
}

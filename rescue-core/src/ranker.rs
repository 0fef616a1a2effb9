//! Rank rescue points by proximity to an observer.
//!
//! The companion app previously recomputed distances in every screen and
//! inferred "location available" from a possibly-zero distance. Ranking is
//! consolidated here as a pure function with explicit validation.

use thiserror::Error;

use crate::distance::haversine_km;
use crate::point::{CoordinateError, GeoPoint, RescuePoint};

/// A rescue point together with its distance from the observer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedPoint {
    /// The candidate, fields preserved unchanged.
    pub point: RescuePoint,
    /// Great-circle distance from the observer in kilometres.
    pub distance_km: f64,
}

/// Errors returned by [`rank_by_distance`] and [`nearest`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// The observer coordinate failed validation.
    #[error("observer coordinate is invalid")]
    InvalidObserver(#[source] CoordinateError),
    /// A candidate coordinate failed validation.
    #[error("rescue point {id} has an invalid coordinate")]
    InvalidPoint {
        /// Identifier of the offending candidate.
        id: String,
        /// The underlying coordinate failure.
        #[source]
        source: CoordinateError,
    },
}

/// Rank `points` by ascending great-circle distance from `observer`.
///
/// The sort is stable: candidates at exactly equal distance keep their
/// input order. That guarantee is deliberate, not an accident of the
/// algorithm, so callers may rely on it.
///
/// The call fails atomically: one invalid candidate fails the whole batch
/// and no partial result is returned. Callers needing best-effort
/// behaviour should pre-filter their input.
///
/// # Errors
/// Returns [`RankError`] when the observer or any candidate has a
/// non-finite or out-of-domain coordinate, naming the offending candidate.
///
/// # Examples
/// ```
/// use rescue_core::{GeoPoint, RescuePoint, rank_by_distance};
///
/// # fn main() -> Result<(), rescue_core::RankError> {
/// let observer = GeoPoint { latitude: 30.0444, longitude: 31.2357 };
/// let stations = vec![
///     RescuePoint::with_empty_metadata(
///         "6",
///         "Alexandria Rescue Point",
///         GeoPoint { latitude: 31.2001, longitude: 29.9187 },
///     ),
///     RescuePoint::with_empty_metadata(
///         "1",
///         "Cairo Central Rescue Station",
///         GeoPoint { latitude: 30.0444, longitude: 31.2357 },
///     ),
/// ];
///
/// let ranked = rank_by_distance(&observer, &stations)?;
/// assert_eq!(ranked[0].point.id, "1");
/// assert!(ranked[0].distance_km < ranked[1].distance_km);
/// # Ok(())
/// # }
/// ```
pub fn rank_by_distance(
    observer: &GeoPoint,
    points: &[RescuePoint],
) -> Result<Vec<RankedPoint>, RankError> {
    observer.validate().map_err(RankError::InvalidObserver)?;
    for point in points {
        point
            .location
            .validate()
            .map_err(|source| RankError::InvalidPoint {
                id: point.id.clone(),
                source,
            })?;
    }

    let mut ranked: Vec<RankedPoint> = points
        .iter()
        .map(|point| RankedPoint {
            distance_km: haversine_km(observer, &point.location),
            point: point.clone(),
        })
        .collect();
    // `sort_by` is stable; ties keep input order. Distances are validated
    // finite above, so `total_cmp` agrees with numeric ordering.
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    Ok(ranked)
}

/// Return the nearest rescue point, or `None` for an empty slice.
///
/// Equivalent to the first element of [`rank_by_distance`], with the same
/// validation and atomic-failure semantics.
///
/// # Errors
/// Returns [`RankError`] when the observer or any candidate is invalid.
///
/// # Examples
/// ```
/// use rescue_core::{GeoPoint, nearest};
///
/// let observer = GeoPoint { latitude: 30.0444, longitude: 31.2357 };
/// assert_eq!(nearest(&observer, &[]), Ok(None));
/// ```
pub fn nearest(
    observer: &GeoPoint,
    points: &[RescuePoint],
) -> Result<Option<RankedPoint>, RankError> {
    Ok(rank_by_distance(observer, points)?.into_iter().next())
}

//! Great-circle distance via the haversine formula.
//!
//! The companion app measures how far a user is from each rescue station,
//! so the spherical approximation with a mean Earth radius of 6371 km is
//! sufficient; ellipsoidal accuracy is not required.

use crate::point::{CoordinateError, GeoPoint};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Compute the great-circle distance between two points in kilometres.
///
/// Both inputs are validated first; invalid coordinates fail the call
/// instead of propagating NaN into the result. The result is symmetric,
/// zero for identical points, and satisfies the triangle inequality
/// (within floating-point tolerance).
///
/// # Errors
/// Returns [`CoordinateError`] when either point is non-finite or outside
/// the coordinate domains.
///
/// # Examples
/// ```
/// use rescue_core::{GeoPoint, distance_km};
///
/// # fn main() -> Result<(), rescue_core::CoordinateError> {
/// let cairo = GeoPoint::new(30.0444, 31.2357)?;
/// let alexandria = GeoPoint::new(31.2001, 29.9187)?;
///
/// let km = distance_km(&cairo, &alexandria)?;
/// assert!((179.0..182.0).contains(&km));
/// # Ok(())
/// # }
/// ```
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> Result<f64, CoordinateError> {
    a.validate()?;
    b.validate()?;
    Ok(haversine_km(a, b))
}

/// Haversine kernel; callers must have validated both points.
pub(crate) fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * central_angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE_KM: f64 = 1e-9;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).expect("valid test point")
    }

    #[rstest]
    #[case(point(30.0444, 31.2357))]
    #[case(point(0.0, 0.0))]
    #[case(point(-90.0, 180.0))]
    fn distance_to_self_is_zero(#[case] p: GeoPoint) {
        let km = distance_km(&p, &p).expect("valid points");
        assert!(km.abs() < TOLERANCE_KM);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let cairo = point(30.0444, 31.2357);
        let alexandria = point(31.2001, 29.9187);
        let there = distance_km(&cairo, &alexandria).expect("valid points");
        let back = distance_km(&alexandria, &cairo).expect("valid points");
        assert!((there - back).abs() < TOLERANCE_KM);
    }

    #[rstest]
    fn cairo_to_alexandria_matches_reference() {
        let cairo = point(30.0444, 31.2357);
        let alexandria = point(31.2001, 29.9187);
        let km = distance_km(&cairo, &alexandria).expect("valid points");
        // Haversine reference value for these coordinates is ~181 km.
        assert!((179.0..182.0).contains(&km), "got {km} km");
    }

    #[rstest]
    fn triangle_inequality_holds() {
        let cairo = point(30.0444, 31.2357);
        let giza = point(30.0131, 31.2089);
        let alexandria = point(31.2001, 29.9187);
        let direct = distance_km(&cairo, &alexandria).expect("valid points");
        let via = distance_km(&cairo, &giza).expect("valid points")
            + distance_km(&giza, &alexandria).expect("valid points");
        assert!(direct <= via + TOLERANCE_KM);
    }

    #[rstest]
    fn antipodal_points_are_half_the_circumference() {
        let km = distance_km(&point(0.0, 0.0), &point(0.0, 180.0)).expect("valid points");
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((km - half_circumference).abs() < 1e-6);
    }

    #[rstest]
    fn invalid_latitude_fails_instead_of_returning_nan() {
        let bad = GeoPoint {
            latitude: 91.0,
            longitude: 0.0,
        };
        let err = distance_km(&bad, &point(0.0, 0.0)).expect_err("invalid latitude");
        assert!(matches!(err, CoordinateError::LatitudeOutOfRange { .. }));
    }

    #[rstest]
    fn nan_longitude_fails_validation() {
        let bad = GeoPoint {
            latitude: 0.0,
            longitude: f64::NAN,
        };
        let err = distance_km(&point(0.0, 0.0), &bad).expect_err("non-finite longitude");
        assert!(matches!(err, CoordinateError::NotFinite { .. }));
    }
}

//! Data access trait for rescue points.
//!
//! The `RescuePointStore` trait defines a read-only interface for the
//! candidate list consumed by ranking. The engine treats the list as
//! opaque input; it never fetches or persists it.

use geo::{Intersects, Rect};

use crate::point::RescuePoint;

/// Read-only access to the rescue-point candidate set.
///
/// Bounding boxes use WGS84 coordinates (`x = longitude`,
/// `y = latitude`).
///
/// # Examples
///
/// ```rust
/// use geo::{Coord, Rect};
/// use rescue_core::{GeoPoint, RescuePoint, RescuePointStore};
///
/// struct MemoryStore {
///     points: Vec<RescuePoint>,
/// }
///
/// impl RescuePointStore for MemoryStore {
///     fn all_points(&self) -> Box<dyn Iterator<Item = RescuePoint> + Send + '_> {
///         Box::new(self.points.iter().cloned())
///     }
/// }
///
/// let station = RescuePoint::with_empty_metadata(
///     "1",
///     "Cairo Central Rescue Station",
///     GeoPoint { latitude: 30.0444, longitude: 31.2357 },
/// );
/// let store = MemoryStore { points: vec![station.clone()] };
///
/// let bbox = Rect::new(Coord { x: 31.0, y: 29.5 }, Coord { x: 31.5, y: 30.5 });
/// assert_eq!(store.points_in_bbox(&bbox), vec![station]);
/// ```
pub trait RescuePointStore {
    /// Return every rescue point in the store.
    fn all_points(&self) -> Box<dyn Iterator<Item = RescuePoint> + Send + '_>;

    /// Return the rescue points that fall within the provided bounding
    /// box, preserving store order.
    ///
    /// Containment includes boundary points.
    ///
    /// Antimeridian note: this method does not model regions that cross
    /// the antimeridian. Callers that need such queries MUST split the
    /// area into two `Rect` ranges and invoke this method for each range.
    fn points_in_bbox(&self, bbox: &Rect<f64>) -> Vec<RescuePoint> {
        self.all_points()
            // `Intersects` treats boundary points as inside the rectangle.
            .filter(|point| bbox.intersects(&point.location.to_coord()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::RescuePointStore;
    use crate::point::{GeoPoint, RescuePoint};
    use crate::test_support::MemoryStore;
    use geo::{Coord, Rect};
    use rstest::rstest;

    fn station(id: &str, latitude: f64, longitude: f64) -> RescuePoint {
        RescuePoint::with_empty_metadata(
            id,
            format!("Station {id}"),
            GeoPoint::new(latitude, longitude).expect("valid test point"),
        )
    }

    fn unit_bbox() -> Rect<f64> {
        Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 })
    }

    #[rstest]
    fn returns_points_inside_bbox() {
        let inside = station("in", 0.0, 0.0);
        let outside = station("out", 30.0, 31.0);
        let store = MemoryStore::with_points([inside.clone(), outside]);
        assert_eq!(store.points_in_bbox(&unit_bbox()), vec![inside]);
    }

    #[rstest]
    fn returns_empty_when_store_is_empty() {
        let store = MemoryStore::default();
        assert!(store.points_in_bbox(&unit_bbox()).is_empty());
    }

    #[rstest]
    #[case(0.0, -1.0)] // left edge
    #[case(0.0, 1.0)] // right edge
    #[case(-1.0, 0.0)] // bottom edge
    #[case(1.0, 0.0)] // top edge
    #[case(-1.0, -1.0)] // bottom-left corner
    #[case(1.0, 1.0)] // top-right corner
    fn includes_point_on_bbox_boundary(#[case] latitude: f64, #[case] longitude: f64) {
        let point = station("edge", latitude, longitude);
        let store = MemoryStore::with_point(point.clone());
        assert_eq!(store.points_in_bbox(&unit_bbox()), vec![point]);
    }

    #[rstest]
    #[case(0.0, -1.0000001)]
    #[case(0.0, 1.0000001)]
    #[case(-1.0000001, 0.0)]
    #[case(1.0000001, 0.0)]
    fn excludes_point_just_outside_bbox(#[case] latitude: f64, #[case] longitude: f64) {
        let store = MemoryStore::with_point(station("near-miss", latitude, longitude));
        assert!(store.points_in_bbox(&unit_bbox()).is_empty());
    }
}

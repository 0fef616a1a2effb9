//! The station list bundled with the companion app.

use rescue_core::{GeoPoint, RescuePoint};

/// Station rows: id, name, latitude, longitude, address, phone.
const STATIONS: [(&str, &str, f64, f64, &str, &str); 8] = [
    (
        "1",
        "Cairo Central Rescue Station",
        30.0444,
        31.2357,
        "Downtown Cairo, Egypt",
        "+20 2 1234 5678",
    ),
    (
        "2",
        "Giza Emergency Center",
        30.0131,
        31.2089,
        "Giza District, Egypt",
        "+20 2 2345 6789",
    ),
    (
        "3",
        "Nasr City Quick Response",
        30.0626,
        31.3549,
        "Nasr City, Cairo",
        "+20 2 3456 7890",
    ),
    (
        "4",
        "Heliopolis Medical Response",
        30.0808,
        31.3239,
        "Heliopolis, Cairo",
        "+20 2 4567 8901",
    ),
    (
        "5",
        "Maadi Emergency Services",
        29.9602,
        31.2569,
        "Maadi, Cairo",
        "+20 2 5678 9012",
    ),
    (
        "6",
        "Alexandria Rescue Point",
        31.2001,
        29.9187,
        "Alexandria, Egypt",
        "+20 3 6789 0123",
    ),
    (
        "7",
        "Zamalek Emergency Unit",
        30.0618,
        31.2194,
        "Zamalek, Cairo",
        "+20 2 7890 1234",
    ),
    (
        "8",
        "6th October City Response",
        29.9668,
        30.9376,
        "6th October City, Giza",
        "+20 2 8901 2345",
    ),
];

/// Return the eight stations bundled with the app.
///
/// All coordinates are compile-time constants within the valid domains,
/// so construction cannot fail.
///
/// # Examples
/// ```
/// let points = rescue_data::bundled_points();
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[0].name, "Cairo Central Rescue Station");
/// ```
#[must_use]
pub fn bundled_points() -> Vec<RescuePoint> {
    STATIONS
        .iter()
        .map(|&(id, name, latitude, longitude, address, phone)| {
            let mut point = RescuePoint::with_empty_metadata(
                id,
                name,
                GeoPoint {
                    latitude,
                    longitude,
                },
            );
            point.metadata.insert("address".to_owned(), address.to_owned());
            point.metadata.insert("phone".to_owned(), phone.to_owned());
            point
        })
        .collect()
}

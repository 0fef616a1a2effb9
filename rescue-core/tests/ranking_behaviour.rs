use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

use rescue_core::{GeoPoint, RankedPoint, RescuePoint, RescuePointStore, nearest};

struct MemoryStore {
    points: Vec<RescuePoint>,
}

impl RescuePointStore for MemoryStore {
    fn all_points(&self) -> Box<dyn Iterator<Item = RescuePoint> + Send + '_> {
        Box::new(self.points.iter().cloned())
    }
}

fn station(id: &str, name: &str, latitude: f64, longitude: f64) -> RescuePoint {
    RescuePoint::with_empty_metadata(
        id,
        name,
        GeoPoint::new(latitude, longitude).expect("valid station"),
    )
}

fn zamalek() -> GeoPoint {
    GeoPoint::new(30.0618, 31.2194).expect("valid observer")
}

thread_local! { static RESULT: RefCell<Option<Option<RankedPoint>>> = const { RefCell::new(None) }; }
thread_local! { static STORE: RefCell<Vec<RescuePoint>> = const { RefCell::new(Vec::new()) }; }

#[given("a store containing three Cairo-area stations")]
fn populated_store() {
    let points = vec![
        station("1", "Cairo Central Rescue Station", 30.0444, 31.2357),
        station("7", "Zamalek Emergency Unit", 30.0618, 31.2194),
        station("5", "Maadi Emergency Services", 29.9602, 31.2569),
    ];
    STORE.with(|cell| cell.replace(points));
}

#[given("an empty store")]
fn empty_store() {
    STORE.with(|cell| cell.replace(Vec::new()));
}

#[when("I ask for the nearest station to the Zamalek coordinate")]
fn query_nearest() {
    let store = MemoryStore {
        points: STORE.with(|cell| cell.borrow().clone()),
    };
    let points: Vec<RescuePoint> = store.all_points().collect();
    let best = nearest(&zamalek(), &points).expect("stations are valid");
    RESULT.with(|cell| cell.replace(Some(best)));
}

#[then("the Zamalek station is returned at distance zero")]
fn zamalek_wins() {
    RESULT.with(|cell| {
        let result = cell.borrow();
        let best = result
            .as_ref()
            .expect("query ran")
            .as_ref()
            .expect("store was populated");
        assert_eq!(best.point.id, "7");
        assert!(best.distance_km.abs() < 1e-9);
    });
}

#[then("no station is returned")]
fn nothing_returned() {
    RESULT.with(|cell| {
        let result = cell.borrow();
        assert!(result.as_ref().expect("query ran").is_none());
    });
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn nearest_station_found() {}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn nearest_of_empty_store_is_none() {}

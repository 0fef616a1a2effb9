//! Core domain types and proximity ranking for the rescue engine.
//!
//! The one algorithmic responsibility here is the geodesic ranker:
//! haversine distance from an observer to a set of rescue points, sorted
//! nearest-first with validated input. Everything the hosting app
//! delegates to hosted services (device location, rescue dispatch,
//! payments, subscriptions) appears only as a capability trait with typed
//! errors, never as an implementation.
//!
//! Constructors and operations return `Result` to surface invalid input
//! early; the engine never computes a distance from a coordinate it has
//! not validated.

#![forbid(unsafe_code)]

mod dispatch;
mod distance;
mod location;
mod payment;
mod point;
mod ranker;
mod store;
mod subscription;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dispatch::{DispatchError, RescueDispatcher, RescueRequest, RescueTicket};
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use location::{LocationError, LocationProvider, LocationSnapshot};
pub use payment::{PaymentError, PaymentIntent, PaymentIntentStatus, PaymentProcessor};
pub use point::{CoordinateError, GeoPoint, LATITUDE_RANGE, LONGITUDE_RANGE, RescuePoint};
pub use ranker::{RankError, RankedPoint, nearest, rank_by_distance};
pub use store::RescuePointStore;
pub use subscription::{
    BackendError, BillingInterval, Subscription, SubscriptionBackend, SubscriptionPlan,
    SubscriptionStatus,
};

//! Facade crate for the rescue engine.
//!
//! This crate re-exports the core domain types, the proximity ranker, and
//! the capability traits the hosting app implements against its hosted
//! services.

#![forbid(unsafe_code)]

pub use rescue_core::{
    BackendError, BillingInterval, CoordinateError, DispatchError, EARTH_RADIUS_KM, GeoPoint,
    LocationError, LocationProvider, LocationSnapshot, PaymentError, PaymentIntent,
    PaymentIntentStatus, PaymentProcessor, RankError, RankedPoint, RescueDispatcher, RescuePoint,
    RescuePointStore, RescueRequest, RescueTicket, Subscription, SubscriptionBackend,
    SubscriptionPlan, SubscriptionStatus, distance_km, nearest, rank_by_distance,
};

#[cfg(feature = "test-support")]
pub use rescue_core::test_support;

//! Test-only, in-memory implementations of the capability traits, used by
//! unit and behaviour tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    BackendError, DispatchError, GeoPoint, LocationError, LocationProvider, LocationSnapshot,
    PaymentError, PaymentIntent, PaymentIntentStatus, PaymentProcessor, RescueDispatcher,
    RescuePoint, RescuePointStore, RescueRequest, RescueTicket, Subscription, SubscriptionBackend,
    SubscriptionPlan, SubscriptionStatus,
};

/// In-memory `RescuePointStore` used in tests.
///
/// The store performs a linear scan and is intended only for small
/// datasets.
#[derive(Default, Debug)]
pub struct MemoryStore {
    points: Vec<RescuePoint>,
}

impl MemoryStore {
    /// Create a store containing a single rescue point.
    pub fn with_point(point: RescuePoint) -> Self {
        Self::with_points(std::iter::once(point))
    }

    /// Create a store from a collection of rescue points.
    pub fn with_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = RescuePoint>,
    {
        Self {
            points: points.into_iter().collect(),
        }
    }
}

impl RescuePointStore for MemoryStore {
    fn all_points(&self) -> Box<dyn Iterator<Item = RescuePoint> + Send + '_> {
        Box::new(self.points.iter().cloned())
    }
}

/// `LocationProvider` pinned to a single snapshot.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    snapshot: LocationSnapshot,
}

impl FixedLocationProvider {
    /// Pin the provider to `point` with no accuracy estimate.
    #[must_use]
    pub const fn new(point: GeoPoint) -> Self {
        Self {
            snapshot: LocationSnapshot {
                point,
                accuracy_m: None,
            },
        }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn current_location(&self) -> Result<LocationSnapshot, LocationError> {
        Ok(self.snapshot)
    }
}

/// `LocationProvider` that always reports a denied permission prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeniedLocationProvider;

impl LocationProvider for DeniedLocationProvider {
    fn current_location(&self) -> Result<LocationSnapshot, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

/// `RescueDispatcher` that acknowledges every request with sequential
/// ticket ids.
#[derive(Debug, Default)]
pub struct MockDispatcher {
    counter: AtomicU64,
}

impl RescueDispatcher for MockDispatcher {
    fn dispatch(&self, _request: &RescueRequest) -> Result<RescueTicket, DispatchError> {
        let serial = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(RescueTicket {
            id: format!("ticket-{serial}"),
            acknowledged: true,
        })
    }
}

/// `PaymentProcessor` that settles every confirmed intent, except for
/// amounts configured to decline.
#[derive(Debug, Default)]
pub struct MockPaymentProcessor {
    counter: AtomicU64,
    intents: Mutex<HashMap<String, PaymentIntent>>,
    declined_amounts: Vec<i64>,
}

impl MockPaymentProcessor {
    /// Create a processor that declines the given minor-unit amounts on
    /// confirmation.
    pub fn declining<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self {
            declined_amounts: amounts.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl PaymentProcessor for MockPaymentProcessor {
    fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        if amount_minor <= 0 {
            return Err(PaymentError::InvalidAmount { amount_minor });
        }
        let serial = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let intent = PaymentIntent {
            id: format!("pi_{serial}"),
            client_secret: format!("pi_{serial}_secret"),
            amount_minor,
            currency: currency.to_owned(),
            status: PaymentIntentStatus::RequiresPaymentMethod,
        };
        let mut intents = self.intents.lock().expect("intent map poisoned");
        intents.insert(intent.id.clone(), intent.clone());
        Ok(intent)
    }

    fn confirm_intent(&self, intent_id: &str) -> Result<PaymentIntent, PaymentError> {
        let mut intents = self.intents.lock().expect("intent map poisoned");
        let intent = intents.get_mut(intent_id).ok_or(PaymentError::Backend {
            message: format!("unknown intent {intent_id}"),
        })?;
        if self.declined_amounts.contains(&intent.amount_minor) {
            intent.status = PaymentIntentStatus::Failed;
            return Err(PaymentError::Declined {
                reason: "card declined".to_owned(),
            });
        }
        intent.status = PaymentIntentStatus::Succeeded;
        Ok(intent.clone())
    }
}

/// In-memory `SubscriptionBackend` holding plans and one subscription per
/// user.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    plans: Vec<SubscriptionPlan>,
    counter: AtomicU64,
    subscriptions: Mutex<HashMap<String, Subscription>>,
}

impl MemoryBackend {
    /// Create a backend offering the given plans.
    pub fn with_plans<I>(plans: I) -> Self
    where
        I: IntoIterator<Item = SubscriptionPlan>,
    {
        Self {
            plans: plans.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl SubscriptionBackend for MemoryBackend {
    fn active_plans(&self) -> Result<Vec<SubscriptionPlan>, BackendError> {
        let mut plans: Vec<SubscriptionPlan> =
            self.plans.iter().filter(|p| p.active).cloned().collect();
        plans.sort_by_key(|p| p.price_minor);
        Ok(plans)
    }

    fn subscription_for(&self, user_id: &str) -> Result<Option<Subscription>, BackendError> {
        let subscriptions = self.subscriptions.lock().expect("subscription map poisoned");
        Ok(subscriptions.get(user_id).cloned())
    }

    fn create_subscription(
        &self,
        user_id: &str,
        plan_id: &str,
    ) -> Result<Subscription, BackendError> {
        if !self.plans.iter().any(|p| p.id == plan_id) {
            return Err(BackendError::NotFound);
        }
        let serial = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let subscription = Subscription {
            id: format!("sub_{serial}"),
            user_id: user_id.to_owned(),
            plan_id: plan_id.to_owned(),
            status: SubscriptionStatus::Active,
            cancel_at_period_end: false,
        };
        let mut subscriptions = self.subscriptions.lock().expect("subscription map poisoned");
        subscriptions.insert(user_id.to_owned(), subscription.clone());
        Ok(subscription)
    }

    fn cancel_subscription(
        &self,
        user_id: &str,
        immediately: bool,
    ) -> Result<Subscription, BackendError> {
        let mut subscriptions = self.subscriptions.lock().expect("subscription map poisoned");
        let subscription = subscriptions.get_mut(user_id).ok_or(BackendError::NotFound)?;
        if immediately {
            subscription.status = SubscriptionStatus::Canceled;
        } else {
            subscription.cancel_at_period_end = true;
        }
        Ok(subscription.clone())
    }
}

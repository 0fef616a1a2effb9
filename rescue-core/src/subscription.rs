//! Subscription-backend capability.
//!
//! Premium subscriptions live in a hosted backend-as-a-service; this
//! module defines the record shapes and the seam the app calls through.

use thiserror::Error;

/// Billing cadence of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BillingInterval {
    /// Billed monthly.
    Month,
    /// Billed yearly.
    Year,
}

/// A purchasable subscription plan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionPlan {
    /// Backend plan identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in minor units of `currency`.
    pub price_minor: i64,
    /// ISO 4217 currency code, lowercase.
    pub currency: String,
    /// Billing cadence.
    pub interval: BillingInterval,
    /// Marketing feature list; opaque to the engine.
    pub features: Vec<String>,
    /// Whether the plan is currently offered.
    pub active: bool,
}

/// Lifecycle states of a subscription record.
///
/// # Examples
/// ```
/// use rescue_core::SubscriptionStatus;
///
/// assert!(SubscriptionStatus::Trialing.is_premium());
/// assert!(!SubscriptionStatus::PastDue.is_premium());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SubscriptionStatus {
    /// Paid and current.
    Active,
    /// In a trial period.
    Trialing,
    /// A renewal payment failed.
    PastDue,
    /// Cancelled by the user.
    Canceled,
    /// Initial payment has not completed.
    Incomplete,
    /// Initial payment window expired.
    IncompleteExpired,
    /// The backend gave up collecting payment.
    Unpaid,
}

impl SubscriptionStatus {
    /// Whether this status grants premium entitlements.
    #[must_use]
    pub const fn is_premium(self) -> bool {
        matches!(self, Self::Active | Self::Trialing)
    }
}

/// A user's subscription record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subscription {
    /// Backend record identifier.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// The subscribed plan.
    pub plan_id: String,
    /// Current lifecycle state.
    pub status: SubscriptionStatus,
    /// Whether the subscription lapses at the end of the paid period
    /// instead of renewing.
    pub cancel_at_period_end: bool,
}

impl Subscription {
    /// Whether the record currently grants premium entitlements.
    #[must_use]
    pub const fn is_premium(&self) -> bool {
        self.status.is_premium()
    }
}

/// Errors from [`SubscriptionBackend`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The caller holds no valid session.
    #[error("not authenticated")]
    NotAuthenticated,
    /// The referenced plan or subscription does not exist.
    #[error("record not found")]
    NotFound,
    /// The hosted backend reported a failure.
    #[error("subscription backend error: {message}")]
    Backend {
        /// Backend-supplied diagnostic.
        message: String,
    },
}

/// Hosted subscription-record store.
///
/// Implementations wrap the backend-as-a-service and must be
/// `Send + Sync`. The engine holds no subscription state of its own.
pub trait SubscriptionBackend: Send + Sync {
    /// Return the currently offered plans, cheapest first.
    ///
    /// # Errors
    /// Returns [`BackendError`] when the hosted backend fails.
    fn active_plans(&self) -> Result<Vec<SubscriptionPlan>, BackendError>;

    /// Return `user_id`'s subscription, if any.
    ///
    /// # Errors
    /// Returns [`BackendError`] when the caller is unauthenticated or the
    /// hosted backend fails. A user without a subscription is `Ok(None)`,
    /// not an error.
    fn subscription_for(&self, user_id: &str) -> Result<Option<Subscription>, BackendError>;

    /// Subscribe `user_id` to `plan_id`.
    ///
    /// # Errors
    /// Returns [`BackendError::NotFound`] for an unknown plan.
    fn create_subscription(
        &self,
        user_id: &str,
        plan_id: &str,
    ) -> Result<Subscription, BackendError>;

    /// Cancel `user_id`'s subscription, either immediately or at period
    /// end.
    ///
    /// # Errors
    /// Returns [`BackendError::NotFound`] when the user has no
    /// subscription.
    fn cancel_subscription(
        &self,
        user_id: &str,
        immediately: bool,
    ) -> Result<Subscription, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryBackend;
    use rstest::rstest;

    fn monthly_plan() -> SubscriptionPlan {
        SubscriptionPlan {
            id: "plan_monthly".into(),
            name: "Premium Monthly".into(),
            price_minor: 499,
            currency: "usd".into(),
            interval: BillingInterval::Month,
            features: vec!["priority dispatch".into()],
            active: true,
        }
    }

    #[rstest]
    #[case(SubscriptionStatus::Active, true)]
    #[case(SubscriptionStatus::Trialing, true)]
    #[case(SubscriptionStatus::PastDue, false)]
    #[case(SubscriptionStatus::Canceled, false)]
    #[case(SubscriptionStatus::Incomplete, false)]
    #[case(SubscriptionStatus::IncompleteExpired, false)]
    #[case(SubscriptionStatus::Unpaid, false)]
    fn premium_truth_table(#[case] status: SubscriptionStatus, #[case] premium: bool) {
        assert_eq!(status.is_premium(), premium);
    }

    #[rstest]
    fn create_then_lookup_round_trips() {
        let backend = MemoryBackend::with_plans([monthly_plan()]);
        let created = backend
            .create_subscription("user-1", "plan_monthly")
            .expect("known plan");
        assert!(created.is_premium());

        let found = backend
            .subscription_for("user-1")
            .expect("backend available")
            .expect("subscription exists");
        assert_eq!(found, created);
    }

    #[rstest]
    fn user_without_subscription_is_none_not_an_error() {
        let backend = MemoryBackend::with_plans([monthly_plan()]);
        assert_eq!(backend.subscription_for("user-1"), Ok(None));
    }

    #[rstest]
    fn create_against_unknown_plan_fails() {
        let backend = MemoryBackend::default();
        let err = backend
            .create_subscription("user-1", "plan_missing")
            .expect_err("unknown plan");
        assert_eq!(err, BackendError::NotFound);
    }

    #[rstest]
    fn cancel_at_period_end_keeps_premium() {
        let backend = MemoryBackend::with_plans([monthly_plan()]);
        backend
            .create_subscription("user-1", "plan_monthly")
            .expect("known plan");

        let cancelled = backend
            .cancel_subscription("user-1", false)
            .expect("subscription exists");
        assert!(cancelled.cancel_at_period_end);
        assert!(cancelled.is_premium());
    }

    #[rstest]
    fn immediate_cancel_revokes_premium() {
        let backend = MemoryBackend::with_plans([monthly_plan()]);
        backend
            .create_subscription("user-1", "plan_monthly")
            .expect("known plan");

        let cancelled = backend
            .cancel_subscription("user-1", true)
            .expect("subscription exists");
        assert_eq!(cancelled.status, SubscriptionStatus::Canceled);
        assert!(!cancelled.is_premium());
    }
}

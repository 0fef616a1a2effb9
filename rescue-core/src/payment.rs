//! Payment-processing capability.
//!
//! One-time purchases go through a hosted payment processor; the app only
//! creates an intent, hands the client secret to the platform SDK, and
//! confirms. Amounts are integer minor units (cents); no floating-point
//! money anywhere.

use thiserror::Error;

/// Lifecycle states of a payment intent.
///
/// The set mirrors what the app's payment-status badge renders.
///
/// # Examples
/// ```
/// use rescue_core::PaymentIntentStatus;
///
/// assert_eq!(PaymentIntentStatus::RequiresAction.as_str(), "requires_action");
/// assert!(!PaymentIntentStatus::Processing.is_settled());
/// assert!(PaymentIntentStatus::Succeeded.is_settled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PaymentIntentStatus {
    /// No payment method attached yet.
    RequiresPaymentMethod,
    /// Additional customer action (e.g. 3-D Secure) is required.
    RequiresAction,
    /// The processor is settling the payment.
    Processing,
    /// Payment completed.
    Succeeded,
    /// The intent was cancelled before completion.
    Canceled,
    /// The processor rejected the payment.
    Failed,
}

impl PaymentIntentStatus {
    /// Return the processor's snake_case wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequiresPaymentMethod => "requires_payment_method",
            Self::RequiresAction => "requires_action",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Canceled => "canceled",
            Self::Failed => "failed",
        }
    }

    /// Whether the intent has reached a terminal state.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Succeeded | Self::Canceled | Self::Failed)
    }
}

impl std::fmt::Display for PaymentIntentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment intent as reported by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaymentIntent {
    /// Processor-assigned intent identifier.
    pub id: String,
    /// Secret the client SDK uses to confirm the intent.
    pub client_secret: String,
    /// Amount in minor units of `currency`.
    pub amount_minor: i64,
    /// ISO 4217 currency code, lowercase (e.g. `"usd"`).
    pub currency: String,
    /// Current lifecycle state.
    pub status: PaymentIntentStatus,
}

/// Errors from [`PaymentProcessor`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The amount was zero, negative, or otherwise unacceptable.
    #[error("invalid payment amount: {amount_minor} minor units")]
    InvalidAmount {
        /// The rejected amount in minor units.
        amount_minor: i64,
    },
    /// The processor declined the payment.
    #[error("payment declined: {reason}")]
    Declined {
        /// Processor-supplied decline reason.
        reason: String,
    },
    /// The hosted processor reported a failure.
    #[error("payment backend error: {message}")]
    Backend {
        /// Backend-supplied diagnostic.
        message: String,
    },
}

/// Hosted payment-intent flow.
///
/// The engine never talks to the processor itself; implementations wrap
/// the hosted API and must be `Send + Sync`.
pub trait PaymentProcessor: Send + Sync {
    /// Create an intent for `amount_minor` of `currency`.
    ///
    /// # Errors
    /// Returns [`PaymentError::InvalidAmount`] for non-positive amounts
    /// and [`PaymentError::Backend`] when the hosted processor fails.
    fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, PaymentError>;

    /// Confirm a previously created intent.
    ///
    /// # Errors
    /// Returns [`PaymentError::Declined`] when the processor refuses the
    /// payment and [`PaymentError::Backend`] for unknown intents or
    /// hosted failures.
    fn confirm_intent(&self, intent_id: &str) -> Result<PaymentIntent, PaymentError>;
}

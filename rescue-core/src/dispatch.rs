//! Rescue-request dispatch capability.
//!
//! "Sending" a rescue request is delegated to a hosted backend; this
//! module only defines the seam. The shipped app currently wires a mock
//! dispatcher that always acknowledges.

use thiserror::Error;

use crate::point::GeoPoint;

/// A rescue request raised by the user.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RescueRequest {
    /// The user's position at the time of the request.
    pub location: GeoPoint,
    /// Identifier of the nearest station, when ranking succeeded before
    /// dispatch.
    pub station_id: Option<String>,
    /// Optional free-text note for responders.
    pub note: Option<String>,
}

/// Acknowledgement returned by a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RescueTicket {
    /// Backend-assigned ticket identifier.
    pub id: String,
    /// Whether the backend acknowledged receipt.
    pub acknowledged: bool,
}

/// Errors from [`RescueDispatcher::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The dispatch backend could not be reached.
    #[error("rescue backend unreachable")]
    Unreachable,
    /// The backend refused the request.
    #[error("rescue request rejected: {reason}")]
    Rejected {
        /// Backend-supplied refusal reason.
        reason: String,
    },
}

/// Deliver a rescue request to the responding backend.
///
/// Implementations must be `Send + Sync`; a dispatcher may be invoked
/// from whichever task completed the location fetch.
///
/// # Examples
/// ```
/// use rescue_core::{
///     DispatchError, GeoPoint, RescueDispatcher, RescueRequest, RescueTicket,
/// };
///
/// struct AlwaysAck;
///
/// impl RescueDispatcher for AlwaysAck {
///     fn dispatch(&self, _request: &RescueRequest) -> Result<RescueTicket, DispatchError> {
///         Ok(RescueTicket { id: "ticket-1".into(), acknowledged: true })
///     }
/// }
///
/// let request = RescueRequest {
///     location: GeoPoint { latitude: 30.0444, longitude: 31.2357 },
///     station_id: Some("1".into()),
///     note: None,
/// };
/// assert!(AlwaysAck.dispatch(&request)?.acknowledged);
/// # Ok::<(), DispatchError>(())
/// ```
pub trait RescueDispatcher: Send + Sync {
    /// Send `request`, returning the backend's ticket.
    ///
    /// # Errors
    /// Returns [`DispatchError`] when the backend is unreachable or
    /// refuses the request; the engine never retries on the caller's
    /// behalf.
    fn dispatch(&self, request: &RescueRequest) -> Result<RescueTicket, DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockDispatcher;
    use rstest::rstest;

    fn request() -> RescueRequest {
        RescueRequest {
            location: GeoPoint::new(30.0444, 31.2357).expect("valid point"),
            station_id: Some("1".into()),
            note: Some("trapped near the river bank".into()),
        }
    }

    #[rstest]
    fn mock_dispatcher_acknowledges() {
        let dispatcher = MockDispatcher::default();
        let ticket = dispatcher.dispatch(&request()).expect("mock always accepts");
        assert!(ticket.acknowledged);
    }

    #[rstest]
    fn mock_dispatcher_issues_distinct_ticket_ids() {
        let dispatcher = MockDispatcher::default();
        let first = dispatcher.dispatch(&request()).expect("mock always accepts");
        let second = dispatcher.dispatch(&request()).expect("mock always accepts");
        assert_ne!(first.id, second.id);
    }
}

//! Application state for the Overtime Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::OvertimePolicy;
use crate::clock::{Clock, SystemClock};

/// Shared application state.
///
/// Holds the default aggregation policy and the clock used when a request
/// does not pin "now" itself.
#[derive(Clone)]
pub struct AppState {
    policy: OvertimePolicy,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates state that reads the system clock.
    pub fn new(policy: OvertimePolicy) -> Self {
        Self::with_clock(policy, SystemClock)
    }

    /// Creates state with a specific clock.
    pub fn with_clock<C: Clock + 'static>(policy: OvertimePolicy, clock: C) -> Self {
        Self {
            policy,
            clock: Arc::new(clock),
        }
    }

    /// Returns the default policy.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.policy
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{DateTime, Utc};

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_uses_given_clock() {
        let instant = DateTime::parse_from_rfc3339("2026-01-15T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let state = AppState::with_clock(OvertimePolicy::default(), FixedClock::new(instant));
        assert_eq!(state.clock().now(), instant);
    }
}

//! Access error types.

use crate::state::UpshotState;

/// Errors from requesting a payload the container does not hold.
///
/// These are local contract violations, not system faults: they are returned
/// to the immediate caller, never retried and never logged by the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The success value was requested outside the success state.
    #[error("value accessed in the {actual} state")]
    InvalidState {
        /// The state the container was actually in.
        actual: UpshotState,
    },

    /// An [`expect`](crate::Upshot::expect) with caller-supplied context
    /// found the container outside the success state.
    #[error("{message} (state was {actual})")]
    ExpectationFailed {
        /// Caller-supplied context for the failed expectation.
        message: String,
        /// The state the container was actually in.
        actual: UpshotState,
    },
}

impl AccessError {
    /// The state the failing access actually observed.
    pub const fn actual(&self) -> UpshotState {
        match self {
            Self::InvalidState { actual } | Self::ExpectationFailed { actual, .. } => *actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_display() {
        let err = AccessError::InvalidState {
            actual: UpshotState::Error,
        };
        assert_eq!(err.to_string(), "value accessed in the error state");
    }

    #[test]
    fn expectation_failed_display() {
        let err = AccessError::ExpectationFailed {
            message: "expected a parsed port".to_string(),
            actual: UpshotState::Empty,
        };
        assert_eq!(
            err.to_string(),
            "expected a parsed port (state was empty)"
        );
    }

    #[test]
    fn actual_reports_observed_state() {
        let err = AccessError::InvalidState {
            actual: UpshotState::Empty,
        };
        assert_eq!(err.actual(), UpshotState::Empty);

        let err = AccessError::ExpectationFailed {
            message: "context".to_string(),
            actual: UpshotState::Error,
        };
        assert_eq!(err.actual(), UpshotState::Error);
    }
}

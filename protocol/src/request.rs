//! Request lifecycle shared by every service call.
//!
//! `idle -> pending -> {succeeded, failed} -> idle`. The terminal states
//! linger so the UI can show the outcome, and fall back to idle on the next
//! user action. There is no cancellation: a pending request always ends in
//! one of the two terminal states.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::fmt;

use crate::wire::Endpoint;

/// A user-initiated service call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Classify,
    Save,
    Retrain,
    Version,
}

impl Operation {
    #[must_use]
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::Classify => Endpoint::Classify,
            Self::Save => Endpoint::Save,
            Self::Retrain => Endpoint::Retrain,
            Self::Version => Endpoint::Version,
        }
    }

    /// Message shown after the call succeeds, if the operation has one.
    #[must_use]
    pub fn success_notice(self) -> Option<&'static str> {
        match self {
            Self::Save => Some("Image saved successfully!"),
            Self::Retrain => Some("Model retrained and updated successfully!"),
            Self::Classify | Self::Version => None,
        }
    }

    /// Short, non-technical message shown after the call fails.
    #[must_use]
    pub fn failure_notice(self) -> &'static str {
        match self {
            Self::Classify => "Error occurred while processing image",
            Self::Save => "Error occurred while saving image",
            Self::Retrain => "Error occurred while retraining the model",
            Self::Version => "Could not load the model version",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Classify => "classify",
            Self::Save => "save",
            Self::Retrain => "retrain",
            Self::Version => "version",
        };
        f.write_str(name)
    }
}

/// Error returned by an illegal [`RequestState`] transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// A request is already in flight.
    #[error("{pending} request already in flight")]
    Busy { pending: Operation },
    /// Completion was reported with no matching request in flight.
    #[error("no {operation} request in flight")]
    NotPending { operation: Operation },
}

/// Where the current (or most recent) request stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending(Operation),
    Succeeded(Operation),
    Failed(Operation),
}

impl RequestState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The operation this state refers to, if any.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Idle => None,
            Self::Pending(op) | Self::Succeeded(op) | Self::Failed(op) => Some(*op),
        }
    }

    /// Move to `Pending(op)`. A finished request is settled first.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Busy`] while another request is pending.
    pub fn start(&mut self, op: Operation) -> Result<(), TransitionError> {
        if let Self::Pending(pending) = *self {
            return Err(TransitionError::Busy { pending });
        }
        *self = Self::Pending(op);
        Ok(())
    }

    /// Record the outcome of the pending `op`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotPending`] unless `op` is the pending operation.
    pub fn complete(&mut self, op: Operation, succeeded: bool) -> Result<(), TransitionError> {
        if *self != Self::Pending(op) {
            return Err(TransitionError::NotPending { operation: op });
        }
        *self = if succeeded { Self::Succeeded(op) } else { Self::Failed(op) };
        Ok(())
    }

    /// Return to idle after a finished request. Pending requests are left alone.
    pub fn settle(&mut self) {
        if !self.is_pending() {
            *self = Self::Idle;
        }
    }
}

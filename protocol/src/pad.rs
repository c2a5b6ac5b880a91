//! Controller state for one pad session.
//!
//! DESIGN
//! ======
//! Everything the UI shows besides the pixels lives in [`PadState`]: the
//! prediction, the correction workflow, the help overlay, the model version,
//! the last notice, and the request lifecycle. The top-level controller owns
//! one instance and passes it by reference to handlers; nothing here is
//! global. Outcome methods take the raw `Result` of a service call so the
//! success and failure branches are decided in one place; callers log the
//! error before handing it over.
//!
//! The version lookup runs in the background and is tracked apart from
//! `request`: it never disables input, and a user action may start while it
//! is still in flight.

#[cfg(test)]
#[path = "pad_test.rs"]
mod pad_test;

use crate::request::{Operation, RequestState, TransitionError};

/// Severity of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A short message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn info(text: &str) -> Self {
        Self { kind: NoticeKind::Info, text: text.to_owned() }
    }

    #[must_use]
    pub fn error(text: &str) -> Self {
        Self { kind: NoticeKind::Error, text: text.to_owned() }
    }
}

/// Version label used when the service cannot report one.
pub const UNKNOWN_VERSION: &str = "unknown";

/// UI state for the pad.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PadState {
    /// Label from the last successful classification.
    pub prediction: Option<String>,
    /// Label the user confirmed or picked as a correction.
    pub selected_symbol: String,
    /// Whether the "was it correct?" prompt is showing.
    pub show_correction: bool,
    /// Whether the help overlay is open.
    pub show_help: bool,
    /// Model version reported by the service.
    pub model_version: Option<String>,
    /// A version lookup is in flight.
    pub version_lookup: bool,
    /// Last message for the user.
    pub notice: Option<Notice>,
    /// Lifecycle of the current or most recent request.
    pub request: RequestState,
}

impl PadState {
    /// Drawing, clearing, and submitting are allowed only while nothing is in flight.
    #[must_use]
    pub fn inputs_enabled(&self) -> bool {
        !self.request.is_pending()
    }

    /// Saving also needs a label to save under.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.inputs_enabled() && !self.selected_symbol.trim().is_empty()
    }

    /// The line shown under the pad, e.g. `Symbol is: beta`.
    #[must_use]
    pub fn result_line(&self) -> Option<String> {
        self.prediction.as_ref().map(|p| format!("Symbol is: {p}"))
    }

    /// Note that the user did something: a finished request goes back to idle.
    pub fn touch(&mut self) {
        self.request.settle();
    }

    /// Start a request.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Busy`] while another request is in flight.
    pub fn begin(&mut self, op: Operation) -> Result<(), TransitionError> {
        self.request.start(op)?;
        self.notice = None;
        Ok(())
    }

    /// Reset for a blank pad. Refused while a request is in flight.
    pub fn clear(&mut self) -> bool {
        if !self.inputs_enabled() {
            return false;
        }
        self.touch();
        self.prediction = None;
        self.show_correction = false;
        self.notice = None;
        true
    }

    pub fn select_symbol(&mut self, code: &str) {
        self.selected_symbol = code.to_owned();
    }

    pub fn open_help(&mut self) {
        self.show_help = true;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    fn finish<T, E>(&mut self, op: Operation, outcome: &Result<T, E>) -> Result<(), TransitionError> {
        self.request.complete(op, outcome.is_ok())?;
        self.notice = match outcome {
            Ok(_) => op.success_notice().map(Notice::info),
            Err(_) => Some(Notice::error(op.failure_notice())),
        };
        Ok(())
    }

    /// Apply the outcome of a classify call.
    ///
    /// On success the prediction is shown, pre-selected as the correction
    /// label, and the correction prompt opens.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotPending`] if no classify was in flight.
    pub fn classified<E>(&mut self, outcome: Result<String, E>) -> Result<(), TransitionError> {
        self.finish(Operation::Classify, &outcome)?;
        match outcome {
            Ok(label) => {
                self.selected_symbol.clone_from(&label);
                self.prediction = Some(label);
                self.show_correction = true;
            }
            Err(_) => {
                self.prediction = None;
                self.show_correction = false;
            }
        }
        Ok(())
    }

    /// Apply the outcome of a save call.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotPending`] if no save was in flight.
    pub fn saved<E>(&mut self, outcome: Result<(), E>) -> Result<(), TransitionError> {
        self.finish(Operation::Save, &outcome)
    }

    /// Apply the outcome of a retrain call; success carries the new version.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotPending`] if no retrain was in flight.
    pub fn retrained<E>(&mut self, outcome: Result<String, E>) -> Result<(), TransitionError> {
        self.finish(Operation::Retrain, &outcome)?;
        if let Ok(version) = outcome {
            self.model_version = Some(version);
        }
        Ok(())
    }

    /// Start a background version lookup. Leaves `request` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Busy`] while another version lookup is in flight.
    pub fn begin_version_lookup(&mut self) -> Result<(), TransitionError> {
        if self.version_lookup {
            return Err(TransitionError::Busy { pending: Operation::Version });
        }
        self.version_lookup = true;
        Ok(())
    }

    /// Apply the outcome of a version lookup. Failure shows the version as unknown
    /// without a notice.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotPending`] if no version lookup was in flight.
    pub fn version_loaded<E>(&mut self, outcome: Result<String, E>) -> Result<(), TransitionError> {
        if !self.version_lookup {
            return Err(TransitionError::NotPending { operation: Operation::Version });
        }
        self.version_lookup = false;
        self.model_version = Some(outcome.unwrap_or_else(|_| UNKNOWN_VERSION.to_owned()));
        Ok(())
    }
}

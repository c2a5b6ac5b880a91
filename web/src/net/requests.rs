//! Start a service call from a UI event and fold its outcome into `PadState`.
//!
//! Every call runs the same way: move the pad to pending (refused if a request
//! is already in flight), await the call on the UI event loop, log a failure,
//! and apply the outcome. A button that is disabled while pending makes the
//! refusal unreachable in practice; it is logged rather than surfaced.

use leptos::prelude::*;
use protocol::{Operation, PadState, TransitionError};

use super::api;
use crate::state::config::PadConfig;
use crate::state::drawing::DrawingState;

fn begin(pad: RwSignal<PadState>, op: Operation) -> bool {
    let started = pad.try_update(|p| p.begin(op)).unwrap_or(Ok(()));
    report_transition(started)
}

fn report_transition(result: Result<(), TransitionError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            #[cfg(feature = "csr")]
            log::warn!("request refused: {e}");
            #[cfg(not(feature = "csr"))]
            let _ = e;
            false
        }
    }
}

fn log_failure<T>(op: Operation, outcome: &Result<T, String>) {
    if let Err(e) = outcome {
        #[cfg(feature = "csr")]
        log::warn!("{op} failed: {e}");
        #[cfg(not(feature = "csr"))]
        let _ = (op, e);
    }
}

/// Classify the drawing currently published by the canvas host.
pub fn classify(pad: RwSignal<PadState>, drawing: RwSignal<DrawingState>, config: RwSignal<PadConfig>) {
    let Some(image) = drawing.get_untracked().image else {
        return;
    };
    if !begin(pad, Operation::Classify) {
        return;
    }
    let base_url = config.get_untracked().api_base_url;
    leptos::task::spawn_local(async move {
        let outcome = api::classify(&base_url, &image).await;
        log_failure(Operation::Classify, &outcome);
        report_transition(pad.try_update(|p| p.classified(outcome)).unwrap_or(Ok(())));
    });
}

/// Save the drawing under the selected symbol.
pub fn save(pad: RwSignal<PadState>, drawing: RwSignal<DrawingState>, config: RwSignal<PadConfig>) {
    let Some(image) = drawing.get_untracked().image else {
        return;
    };
    let symbol = pad.get_untracked().selected_symbol;
    if symbol.trim().is_empty() || !begin(pad, Operation::Save) {
        return;
    }
    let base_url = config.get_untracked().api_base_url;
    leptos::task::spawn_local(async move {
        let outcome = api::save(&base_url, &image, &symbol).await;
        log_failure(Operation::Save, &outcome);
        report_transition(pad.try_update(|p| p.saved(outcome)).unwrap_or(Ok(())));
    });
}

/// Retrain the model.
pub fn retrain(pad: RwSignal<PadState>, config: RwSignal<PadConfig>) {
    if !begin(pad, Operation::Retrain) {
        return;
    }
    let base_url = config.get_untracked().api_base_url;
    leptos::task::spawn_local(async move {
        let outcome = api::retrain(&base_url).await;
        log_failure(Operation::Retrain, &outcome);
        report_transition(pad.try_update(|p| p.retrained(outcome)).unwrap_or(Ok(())));
    });
}

/// Load the model version for the status bar. Runs beside user requests
/// without disabling input.
pub fn load_version(pad: RwSignal<PadState>, config: RwSignal<PadConfig>) {
    if !report_transition(pad.try_update(PadState::begin_version_lookup).unwrap_or(Ok(()))) {
        return;
    }
    let base_url = config.get_untracked().api_base_url;
    leptos::task::spawn_local(async move {
        let outcome = api::fetch_version(&base_url).await;
        log_failure(Operation::Version, &outcome);
        report_transition(pad.try_update(|p| p.version_loaded(outcome)).unwrap_or(Ok(())));
    });
}

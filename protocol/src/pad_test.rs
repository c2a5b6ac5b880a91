use super::*;

fn pending(op: Operation) -> PadState {
    let mut pad = PadState::default();
    pad.begin(op).unwrap();
    pad
}

// =============================================================
// Defaults and enablement
// =============================================================

#[test]
fn default_pad_is_idle_and_interactive() {
    let pad = PadState::default();
    assert!(pad.request.is_idle());
    assert!(pad.inputs_enabled());
    assert!(pad.prediction.is_none());
    assert!(pad.result_line().is_none());
    assert!(!pad.show_help);
    assert!(!pad.show_correction);
}

#[test]
fn inputs_disabled_while_pending() {
    let pad = pending(Operation::Classify);
    assert!(!pad.inputs_enabled());
    assert!(!pad.can_save());
}

#[test]
fn can_save_requires_a_symbol() {
    let mut pad = PadState::default();
    assert!(!pad.can_save());
    pad.select_symbol("  ");
    assert!(!pad.can_save());
    pad.select_symbol("beta");
    assert!(pad.can_save());
}

#[test]
fn begin_while_pending_is_refused() {
    let mut pad = pending(Operation::Classify);
    assert!(pad.begin(Operation::Classify).is_err());
    assert_eq!(pad.request, RequestState::Pending(Operation::Classify));
}

#[test]
fn begin_clears_previous_notice() {
    let mut pad = PadState { notice: Some(Notice::error("old")), ..PadState::default() };
    pad.begin(Operation::Save).unwrap();
    assert!(pad.notice.is_none());
}

// =============================================================
// Classify
// =============================================================

#[test]
fn classify_success_shows_label_and_opens_correction() {
    let mut pad = pending(Operation::Classify);
    pad.classified::<()>(Ok("0".to_owned())).unwrap();

    assert_eq!(pad.request, RequestState::Succeeded(Operation::Classify));
    assert_eq!(pad.prediction.as_deref(), Some("0"));
    assert_eq!(pad.result_line().as_deref(), Some("Symbol is: 0"));
    assert_eq!(pad.selected_symbol, "0");
    assert!(pad.show_correction);
    assert!(pad.notice.is_none());
    assert!(pad.inputs_enabled());
}

#[test]
fn classify_failure_shows_generic_message_and_reenables() {
    let mut pad = pending(Operation::Classify);
    pad.classified(Err("HTTP 500")).unwrap();

    assert_eq!(pad.request, RequestState::Failed(Operation::Classify));
    assert_eq!(pad.notice, Some(Notice::error("Error occurred while processing image")));
    assert!(pad.prediction.is_none());
    assert!(!pad.show_correction);
    assert!(pad.inputs_enabled());
}

#[test]
fn classify_replaces_previous_prediction() {
    let mut pad = pending(Operation::Classify);
    pad.classified::<()>(Ok("+".to_owned())).unwrap();
    pad.begin(Operation::Classify).unwrap();
    pad.classified::<()>(Ok("beta".to_owned())).unwrap();
    assert_eq!(pad.prediction.as_deref(), Some("beta"));
}

#[test]
fn classified_without_pending_is_rejected() {
    let mut pad = PadState::default();
    assert!(pad.classified::<()>(Ok("0".to_owned())).is_err());
    assert!(pad.prediction.is_none());
}

// =============================================================
// Save / retrain / version
// =============================================================

#[test]
fn save_outcomes_set_notices() {
    let mut pad = pending(Operation::Save);
    pad.saved::<()>(Ok(())).unwrap();
    assert_eq!(pad.notice, Some(Notice::info("Image saved successfully!")));

    pad.begin(Operation::Save).unwrap();
    pad.saved(Err(())).unwrap();
    assert_eq!(pad.notice, Some(Notice::error("Error occurred while saving image")));
    assert_eq!(pad.request, RequestState::Failed(Operation::Save));
}

#[test]
fn retrain_success_updates_version() {
    let mut pad = pending(Operation::Retrain);
    pad.retrained::<()>(Ok("20240611093000".to_owned())).unwrap();
    assert_eq!(pad.model_version.as_deref(), Some("20240611093000"));
    assert_eq!(pad.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Info));
}

#[test]
fn retrain_failure_keeps_version() {
    let mut pad = PadState { model_version: Some("v1".to_owned()), ..PadState::default() };
    pad.begin(Operation::Retrain).unwrap();
    pad.retrained::<&str>(Err("boom")).unwrap();
    assert_eq!(pad.model_version.as_deref(), Some("v1"));
    assert_eq!(pad.notice, Some(Notice::error("Error occurred while retraining the model")));
}

fn looking_up_version() -> PadState {
    let mut pad = PadState::default();
    pad.begin_version_lookup().unwrap();
    pad
}

#[test]
fn version_failure_reads_unknown_without_notice() {
    let mut pad = looking_up_version();
    pad.version_loaded::<()>(Err(())).unwrap();
    assert_eq!(pad.model_version.as_deref(), Some(UNKNOWN_VERSION));
    assert!(pad.notice.is_none());
    assert!(pad.request.is_idle());
    assert!(!pad.version_lookup);
}

#[test]
fn version_success_sets_version() {
    let mut pad = looking_up_version();
    pad.version_loaded::<()>(Ok("20240101000000".to_owned())).unwrap();
    assert_eq!(pad.model_version.as_deref(), Some("20240101000000"));
}

#[test]
fn version_lookup_leaves_inputs_enabled() {
    let mut pad = looking_up_version();
    assert!(pad.inputs_enabled());
    assert!(pad.clear());
    pad.begin(Operation::Classify).unwrap();
    pad.classified::<()>(Ok("beta".to_owned())).unwrap();
    assert_eq!(pad.result_line().as_deref(), Some("Symbol is: beta"));

    pad.version_loaded::<()>(Ok("3".to_owned())).unwrap();
    assert_eq!(pad.model_version.as_deref(), Some("3"));
    assert_eq!(pad.request, RequestState::Succeeded(Operation::Classify));
}

#[test]
fn version_lookup_runs_once_at_a_time() {
    let mut pad = looking_up_version();
    assert_eq!(pad.begin_version_lookup(), Err(TransitionError::Busy { pending: Operation::Version }));
}

#[test]
fn version_loaded_without_lookup_is_rejected() {
    let mut pad = PadState::default();
    assert_eq!(
        pad.version_loaded::<()>(Ok("1".to_owned())),
        Err(TransitionError::NotPending { operation: Operation::Version })
    );
    assert!(pad.model_version.is_none());
}

// =============================================================
// Clear / touch / help
// =============================================================

#[test]
fn clear_drops_prediction_and_settles() {
    let mut pad = pending(Operation::Classify);
    pad.classified::<()>(Ok("0".to_owned())).unwrap();
    assert!(pad.clear());
    assert!(pad.prediction.is_none());
    assert!(!pad.show_correction);
    assert!(pad.request.is_idle());
}

#[test]
fn clear_refused_while_pending() {
    let mut pad = pending(Operation::Classify);
    assert!(!pad.clear());
    assert!(pad.request.is_pending());
}

#[test]
fn touch_returns_to_idle_after_failure() {
    let mut pad = pending(Operation::Classify);
    pad.classified(Err(())).unwrap();
    pad.touch();
    assert!(pad.request.is_idle());
}

#[test]
fn help_toggles() {
    let mut pad = PadState::default();
    pad.open_help();
    assert!(pad.show_help);
    pad.close_help();
    assert!(!pad.show_help);
}

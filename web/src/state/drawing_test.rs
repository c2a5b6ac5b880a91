use super::*;

#[test]
fn default_has_no_image() {
    let state = DrawingState::default();
    assert_eq!(state.image, None);
    assert!(!state.has_ink);
    assert_eq!(state.clear_seq, 0);
}

#[test]
fn publish_replaces_image() {
    let mut state = DrawingState::default();
    state.publish("blank".to_owned(), false);
    state.publish("inked".to_owned(), true);
    assert_eq!(state.image.as_deref(), Some("inked"));
    assert!(state.has_ink);
}

#[test]
fn request_clear_bumps_sequence() {
    let mut state = DrawingState::default();
    state.request_clear();
    state.request_clear();
    assert_eq!(state.clear_seq, 2);
}

#[test]
fn request_clear_saturates() {
    let mut state = DrawingState { clear_seq: u64::MAX, ..DrawingState::default() };
    state.request_clear();
    assert_eq!(state.clear_seq, u64::MAX);
}

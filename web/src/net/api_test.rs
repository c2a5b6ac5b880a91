use super::*;

// =============================================================
// read_reply
// =============================================================

#[test]
fn read_reply_decodes_classify_result() {
    let label = read_reply(200, r#"{"result":"beta"}"#, protocol::wire::decode_classify).unwrap();
    assert_eq!(label, "beta");
}

#[test]
fn read_reply_decodes_version() {
    let version = read_reply(200, r#"{"message":"ok","version":"3"}"#, protocol::wire::decode_version).unwrap();
    assert_eq!(version, "3");
}

#[test]
fn read_reply_rejects_server_error() {
    let err = read_reply(500, r#"{"error":"boom"}"#, protocol::wire::decode_classify).unwrap_err();
    assert!(err.contains("500"));
    assert!(err.contains("boom"));
}

#[test]
fn read_reply_rejects_missing_field() {
    let err = read_reply(200, r#"{"label":"x"}"#, protocol::wire::decode_classify).unwrap_err();
    assert!(err.contains("malformed"));
}

#[test]
fn read_reply_ignores_save_body() {
    assert!(read_reply(201, "not json at all", ignore_body).is_ok());
    assert!(read_reply(400, r#"{"error":"Invalid symbol"}"#, ignore_body).is_err());
}

// =============================================================
// Outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn calls_fail_without_browser() {
    let waker = std::task::Waker::noop();
    let mut cx = std::task::Context::from_waker(waker);
    let mut fut = std::pin::pin!(classify("http://localhost:5000", "iVBOR"));
    match fut.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(result) => assert!(result.is_err()),
        std::task::Poll::Pending => panic!("stub call should resolve immediately"),
    }
}

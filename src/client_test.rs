use super::*;
use crate::test_helpers::{Replies, Reply, StubService, unreachable_config};
use axum::http::StatusCode;
use surface::engine::SurfaceCore;
use surface::geometry::{DisplayRect, Point};

fn drawn_image() -> String {
    let mut core = SurfaceCore::new();
    let display = DisplayRect::sized(200.0, 200.0);
    core.begin(Point::new(40.0, 40.0), display);
    core.extend(Point::new(160.0, 160.0), display);
    core.end();
    core.export_encoded().unwrap()
}

#[tokio::test]
async fn classify_returns_label() {
    let stub = StubService::spawn(Replies::default()).await;
    let client = ClassifierClient::new(&stub.config()).unwrap();

    let blank = SurfaceCore::new().export_encoded().unwrap();
    assert_eq!(client.classify(&blank).await.unwrap(), "0");

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/classify");
    let body: serde_json::Value = serde_json::from_str(&calls[0].body).unwrap();
    assert_eq!(body["image"], blank);
}

#[tokio::test]
async fn classify_server_error_is_protocol_error() {
    let replies = Replies {
        classify: Reply::error(StatusCode::INTERNAL_SERVER_ERROR, "model exploded"),
        ..Replies::default()
    };
    let stub = StubService::spawn(replies).await;
    let client = ClassifierClient::new(&stub.config()).unwrap();

    let err = client.classify(&drawn_image()).await.unwrap_err();
    match err {
        ClientError::Protocol { endpoint, source: ProtocolError::Status { status, detail } } => {
            assert_eq!(endpoint, "/classify");
            assert_eq!(status, 500);
            assert_eq!(detail, "model exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn classify_without_result_field_is_decode_error() {
    let replies = Replies { classify: Reply::ok(serde_json::json!({ "label": "x" })), ..Replies::default() };
    let stub = StubService::spawn(replies).await;
    let client = ClassifierClient::new(&stub.config()).unwrap();

    let err = client.classify(&drawn_image()).await.unwrap_err();
    assert!(matches!(err, ClientError::Protocol { source: ProtocolError::Decode(_), .. }));
}

#[tokio::test]
async fn save_sends_bare_image_and_symbol() {
    let stub = StubService::spawn(Replies::default()).await;
    let client = ClassifierClient::new(&stub.config()).unwrap();
    let image = drawn_image();

    client.save(&image, "beta").await.unwrap();

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/save");
    let body: SaveRequest = serde_json::from_str(&calls[0].body).unwrap();
    assert_eq!(body.symbol, "beta");
    assert_eq!(body.image, image);
    assert!(!body.image.starts_with("data:"));
}

#[tokio::test]
async fn save_rejected_label_fails() {
    let replies = Replies { save: Reply::error(StatusCode::BAD_REQUEST, "Invalid symbol"), ..Replies::default() };
    let stub = StubService::spawn(replies).await;
    let client = ClassifierClient::new(&stub.config()).unwrap();

    let err = client.save(&drawn_image(), "?").await.unwrap_err();
    assert!(matches!(err, ClientError::Protocol { source: ProtocolError::Status { status: 400, .. }, .. }));
}

#[tokio::test]
async fn retrain_returns_new_version() {
    let stub = StubService::spawn(Replies::default()).await;
    let client = ClassifierClient::new(&stub.config()).unwrap();

    assert_eq!(client.retrain().await.unwrap(), "2");
    assert_eq!(stub.calls()[0].path, "/retrain");
}

#[tokio::test]
async fn version_reads_current_model() {
    let stub = StubService::spawn(Replies::default()).await;
    let client = ClassifierClient::new(&stub.config()).unwrap();

    assert_eq!(client.version().await.unwrap(), "1");
    assert_eq!(stub.calls()[0].path, "/version");
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let client = ClassifierClient::new(&unreachable_config()).unwrap();
    let err = client.version().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { endpoint: "/version", .. }));
}

#[test]
fn base_url_comes_from_config() {
    let config = ClientConfig::default().with_base_url("http://pad.test:8080/");
    let client = ClassifierClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "http://pad.test:8080");
}

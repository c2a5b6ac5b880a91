//! In-process stand-in for the classification service.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use crate::config::{ClientConfig, Timeouts};

/// Canned reply for one route.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self { status: StatusCode::OK, body: body.to_string() }
    }

    #[must_use]
    pub fn error(status: StatusCode, message: &str) -> Self {
        Self { status, body: serde_json::json!({ "error": message }).to_string() }
    }
}

/// One request the stub received.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub path: &'static str,
    pub body: String,
}

#[derive(Clone, Debug)]
pub struct Replies {
    pub classify: Reply,
    pub save: Reply,
    pub retrain: Reply,
    pub version: Reply,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            classify: Reply::ok(serde_json::json!({ "result": "0" })),
            save: Reply::ok(serde_json::json!({ "message": "Image saved successfully" })),
            retrain: Reply::ok(serde_json::json!({ "message": "Model retrained", "version": "2" })),
            version: Reply::ok(serde_json::json!({ "version": "1" })),
        }
    }
}

#[derive(Clone)]
struct Stub {
    replies: Arc<Replies>,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    fn answer(&self, path: &'static str, body: String, reply: &Reply) -> Response {
        self.calls.lock().unwrap().push(Recorded { path, body });
        (reply.status, [(header::CONTENT_TYPE, "application/json")], reply.body.clone()).into_response()
    }
}

async fn classify(State(stub): State<Stub>, body: String) -> Response {
    let reply = stub.replies.classify.clone();
    stub.answer("/classify", body, &reply)
}

async fn save(State(stub): State<Stub>, body: String) -> Response {
    let reply = stub.replies.save.clone();
    stub.answer("/save", body, &reply)
}

async fn retrain(State(stub): State<Stub>, body: String) -> Response {
    let reply = stub.replies.retrain.clone();
    stub.answer("/retrain", body, &reply)
}

async fn version(State(stub): State<Stub>) -> Response {
    let reply = stub.replies.version.clone();
    stub.answer("/version", String::new(), &reply)
}

/// A running stub bound to an ephemeral local port.
pub struct StubService {
    pub base_url: String,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

impl StubService {
    /// Bind `127.0.0.1:0` and serve `replies` until the test runtime shuts down.
    pub async fn spawn(replies: Replies) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub { replies: Arc::new(replies), calls: calls.clone() };
        let app = Router::new()
            .route("/classify", post(classify))
            .route("/save", post(save))
            .route("/retrain", post(retrain))
            .route("/version", get(version))
            .with_state(stub);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub service");
        let addr = listener.local_addr().expect("stub local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub service failed");
        });

        Self { base_url: format!("http://{addr}"), calls }
    }

    /// Config pointing at this stub with short timeouts.
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        ClientConfig { base_url: self.base_url.clone(), timeouts: Timeouts { request_secs: 5, connect_secs: 2 } }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }
}

/// Config for an address nothing listens on.
#[must_use]
pub fn unreachable_config() -> ClientConfig {
    ClientConfig { base_url: "http://127.0.0.1:9".to_owned(), timeouts: Timeouts { request_secs: 2, connect_secs: 1 } }
}

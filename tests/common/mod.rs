//! Shared utilities for integration testing.
//!
//! Provides a programmable mock upstream that records every request it
//! receives, and a helper that boots the portal against it on an ephemeral
//! port.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;

use user_portal::config::AppConfig;
use user_portal::http::HttpServer;
use user_portal::resource::UserRecord;
use user_portal::upstream::UpstreamClient;

/// One request as seen by the mock upstream.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub request_id: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    response: Arc<Mutex<(u16, String)>>,
}

/// A mock upstream API bound to an ephemeral local port.
#[derive(Clone)]
pub struct MockUpstream {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockUpstream {
    /// Start the mock; answers every route with the programmed response.
    pub async fn start() -> MockUpstream {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new((200, String::from("{}")))),
        };

        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockUpstream { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Program the status and body returned to subsequent requests.
    #[allow(dead_code)]
    pub fn set_response(&self, status: u16, body: &str) {
        *self.state.response.lock().unwrap() = (status, body.to_string());
    }

    /// Everything received so far, in arrival order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        request_id: header("x-request-id"),
        body: body.to_vec(),
    });

    let (status, body) = state.response.lock().unwrap().clone();
    (StatusCode::from_u16(status).unwrap(), body)
}

/// Configuration pointing the portal at the mock upstream.
pub fn test_config(mock: &MockUpstream) -> AppConfig {
    let mut config = AppConfig::default();
    config.upstream.base_url = mock.base_url();
    config.upstream.auth_token = "test-token".to_string();
    config
}

/// Boot the portal against the mock with a given snapshot; returns its
/// address.
#[allow(dead_code)]
pub async fn start_portal(mock: &MockUpstream, snapshot: Vec<UserRecord>) -> SocketAddr {
    let config = test_config(mock);
    let upstream = Arc::new(UpstreamClient::new(&config.upstream, &config.timeouts).unwrap());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(&config, upstream, snapshot);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}

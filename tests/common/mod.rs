//! Mock Appletree API for integration tests
//! 集成测试用的Appletree API模拟服务

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;

/// One request as the mock saw it / 模拟服务收到的一次请求
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    latency: Duration,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockApi {
    pub base_url: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().clone()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };
    state.recorded.lock().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type,
        body,
    });
    if !state.latency.is_zero() {
        tokio::time::sleep(state.latency).await;
    }
    (state.status, state.body.clone())
}

/// Answer every request with `status` and `body` / 对所有请求返回 `status` 与 `body`
pub async fn start_mock_api(status: u16, body: &str) -> MockApi {
    start_mock_api_with_latency(status, body, Duration::ZERO).await
}

pub async fn start_mock_api_with_latency(status: u16, body: &str, latency: Duration) -> MockApi {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        latency,
        recorded: recorded.clone(),
    };
    let app = Router::new().fallback(record).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{}", addr),
        recorded,
    }
}

/// Base URL of a port nothing listens on / 无服务监听端口的基础URL
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

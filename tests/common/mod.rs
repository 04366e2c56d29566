//! # Revenue Service Stub / 收入服务桩
//!
//! A small axum server standing in for the revenue endpoint. It runs on its
//! own thread and runtime so both `#[tokio::test]` and blocking CLI tests can
//! use it.
//!
//! 代替收入接口的小型 axum 服务器。它运行在独立的线程和运行时上，
//! 因此 `#[tokio::test]` 和阻塞式的 CLI 测试都可以使用它。

#![allow(dead_code)]

use std::net::TcpListener as StdTcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

pub const TOKEN: &str = "test-token";
pub const API_KEY: &str = "test-key";

/// Query fragments the stub has no data for.
const NO_DATA_MARKERS: [&str; 3] = ["nonexistent", "slot_id=999", "year=2020"];

const STUB_TIMEFRAMES: [&str; 5] = ["all", "daily", "weekly", "monthly", "yearly"];

/// How the stub answers a valid, non-empty query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StubMode {
    /// Well-formed bodies; empty results carry `groups: []`.
    Healthy,
    /// Empty results carry `groups: null`.
    NullGroups,
    /// Every 200 body is plain text.
    PlainText,
    /// Totals depend on which parameter comes first.
    OrderSensitive,
}

#[derive(Clone)]
struct StubState {
    mode: StubMode,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// What the stub saw for one request.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub query: String,
    pub authorized: bool,
}

/// Handle to a running stub. The server stops when the handle is dropped.
pub struct RevenueStub {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RevenueStub {
    pub fn start(mode: StubMode) -> Self {
        let listener = StdTcpListener::bind("127.0.0.1:0").expect("stub bind failed");
        listener.set_nonblocking(true).expect("stub nonblocking failed");
        let addr = listener.local_addr().expect("stub local addr failed");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            mode,
            requests: Arc::clone(&requests),
        };
        let app = Router::new()
            .route("/revenue", get(handle_revenue))
            .with_state(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let join = thread::spawn(move || {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime failed");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("stub listener failed");
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.await;
                    })
                    .await;
            });
        });

        Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(shutdown_tx),
            join: Some(join),
            requests,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map_or_else(|_| Vec::new(), |entries| entries.clone())
    }
}

impl Drop for RevenueStub {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

async fn handle_revenue(
    State(state): State<StubState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> impl IntoResponse {
    let raw = raw.unwrap_or_default();
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {TOKEN}").as_str())
        && headers.get("x-api-key").and_then(|v| v.to_str().ok()) == Some(API_KEY);

    if let Ok(mut entries) = state.requests.lock() {
        entries.push(RecordedRequest {
            query: raw.clone(),
            authorized,
        });
    }

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            json!({"status": "ERROR", "code": "UNAUTHORIZED"}).to_string(),
        );
    }

    if is_rejected(&raw) {
        return (
            StatusCode::BAD_REQUEST,
            json!({"status": "ERROR", "code": "INVALID_PARAMS"}).to_string(),
        );
    }

    if state.mode == StubMode::PlainText {
        return (StatusCode::OK, "revenue is fine".to_string());
    }

    let lowered = raw.to_lowercase();
    let matches_nothing = NO_DATA_MARKERS.iter().any(|m| lowered.contains(m));
    let body = if matches_nothing {
        let groups = match state.mode {
            StubMode::NullGroups => serde_json::Value::Null,
            _ => json!([]),
        };
        json!({"data": {"total_revenue": 0, "groups": groups}})
    } else {
        let total = if state.mode == StubMode::OrderSensitive && raw.starts_with("genre=") {
            999.0
        } else {
            1234.5
        };
        json!({
            "data": {
                "total_revenue": total,
                "groups": [{"key": "Crime", "revenue": total}]
            }
        })
    };
    (StatusCode::OK, body.to_string())
}

/// The service's own parameter rules, written out against the raw query.
fn is_rejected(raw: &str) -> bool {
    let Ok(url) = reqwest::Url::parse(&format!("http://stub/revenue?{raw}")) else {
        return true;
    };
    let mut has_timeframe = false;
    let mut has_period = false;
    for (key, value) in url.query_pairs() {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "timeframe" => {
                if !STUB_TIMEFRAMES.contains(&value.as_ref()) {
                    return true;
                }
                has_timeframe = true;
            }
            "month" => match value.parse::<i64>() {
                Ok(month) if (1..=12).contains(&month) => has_period = true,
                _ => return true,
            },
            "year" => {
                if value.parse::<i64>().is_err() {
                    return true;
                }
                has_period = true;
            }
            "slot_id" => {
                if value.parse::<i64>().is_err() {
                    return true;
                }
            }
            _ => {}
        }
    }
    has_timeframe && has_period
}

//! In-process stub of the upstream market-data API.
//!
//! Serves `/coins/markets` and `/global` on `127.0.0.1:0`, counts calls, and records
//! the query string and API-key header of every request.

#![allow(dead_code)]

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const START_MILLIS: i64 = 1_700_000_000_000;

pub struct StubState {
    markets: Mutex<Value>,
    global: Mutex<Value>,
    status: Mutex<StatusCode>,
    delay: Mutex<Duration>,
    markets_calls: AtomicUsize,
    global_calls: AtomicUsize,
    queries: Mutex<Vec<Option<String>>>,
    api_keys: Mutex<Vec<Option<String>>>,
}

impl StubState {
    fn record(&self, query: Option<String>, headers: &HeaderMap) {
        self.queries.lock().unwrap().push(query);
        let key = headers
            .get("x-cg-pro-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.api_keys.lock().unwrap().push(key);
    }

    async fn respond(&self, body: Value) -> Response {
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let status = *self.status.lock().unwrap();
        (status, Json(body)).into_response()
    }
}

pub struct StubUpstream {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubUpstream {
    pub async fn spawn() -> Self {
        let state = Arc::new(StubState {
            markets: Mutex::new(json!([])),
            global: Mutex::new(global_body()),
            status: Mutex::new(StatusCode::OK),
            delay: Mutex::new(Duration::ZERO),
            markets_calls: AtomicUsize::new(0),
            global_calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            api_keys: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/coins/markets", get(markets))
            .route("/global", get(global))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn set_markets(&self, body: Value) {
        *self.state.markets.lock().unwrap() = body;
    }

    pub fn set_global(&self, body: Value) {
        *self.state.global.lock().unwrap() = body;
    }

    pub fn set_status(&self, status: StatusCode) {
        *self.state.status.lock().unwrap() = status;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = delay;
    }

    pub fn markets_calls(&self) -> usize {
        self.state.markets_calls.load(Ordering::SeqCst)
    }

    pub fn global_calls(&self) -> usize {
        self.state.global_calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.state.queries.lock().unwrap().last().cloned().flatten()
    }

    pub fn api_keys(&self) -> Vec<Option<String>> {
        self.state.api_keys.lock().unwrap().clone()
    }
}

async fn markets(
    State(state): State<Arc<StubState>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    state.markets_calls.fetch_add(1, Ordering::SeqCst);
    state.record(query, &headers);
    let body = state.markets.lock().unwrap().clone();
    state.respond(body).await
}

async fn global(
    State(state): State<Arc<StubState>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    state.global_calls.fetch_add(1, Ordering::SeqCst);
    state.record(query, &headers);
    let body = state.global.lock().unwrap().clone();
    state.respond(body).await
}

pub fn bitcoin_only() -> Value {
    json!([{ "id": "bitcoin", "symbol": "btc", "current_price": 100, "market_cap_rank": 1 }])
}

pub fn top_three() -> Value {
    json!([
        {
            "id": "bitcoin", "name": "Bitcoin", "symbol": "btc",
            "current_price": 43782.45, "price_change_24h": 1356.78,
            "price_change_percentage_24h": 3.21, "market_cap": 892100000000.0,
            "total_volume": 28400000000.0, "market_cap_rank": 1
        },
        {
            "id": "ethereum", "name": "Ethereum", "symbol": "eth",
            "current_price": 2654.32, "price_change_24h": 48.72,
            "price_change_percentage_24h": 1.87, "market_cap": 319200000000.0,
            "total_volume": 12800000000.0, "market_cap_rank": 2
        },
        {
            "id": "mystery-coin", "name": "Mystery", "symbol": "mys",
            "current_price": 0.01, "price_change_24h": null,
            "price_change_percentage_24h": null, "market_cap": null,
            "total_volume": 1200.0, "market_cap_rank": null
        }
    ])
}

pub fn global_body() -> Value {
    json!({
        "data": {
            "active_cryptocurrencies": 13205,
            "total_market_cap": { "usd": 2310000000000.0 },
            "total_volume": { "usd": 89200000000.0 },
            "market_cap_percentage": { "btc": 52.3, "eth": 16.1 },
            "market_cap_change_percentage_24h_usd": 2.4
        }
    })
}

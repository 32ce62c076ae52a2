// Fake SummSync API for integration tests: a real HTTP server the blocking
// client talks to, with per-endpoint hit counters and per-test failure
// injection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use summsync::api::client::SummSyncClient;
use summsync::config::Config;

pub const SESSION_ID: &str = "sess-test-1";

#[derive(Default)]
pub struct ApiState {
    pub create_hits: AtomicUsize,
    pub stats_hits: AtomicUsize,
    pub mastery_hits: AtomicUsize,
    pub solo_hits: AtomicUsize,
    pub group_hits: AtomicUsize,

    /// Player name whose stats call answers HTTP 500.
    pub fail_stats_for: Option<String>,
    /// Overrides the create response entirely.
    pub create_response: Option<(u16, Value)>,
    /// Overrides the group-insight response entirely.
    pub group_response: Option<(u16, Value)>,
}

pub fn spawn_api(state: Arc<ApiState>) -> String {
    let (tx, rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();

            let app = Router::new()
                .route("/player/create", post(create))
                .route("/player/stats", post(stats))
                .route("/player/mastery", post(mastery))
                .route("/ai-insight/solo/player", post(solo_insight))
                .route("/ai-insight/group", post(group_insight))
                .with_state(state);

            axum::serve(listener, app).await.unwrap();
        });
    });

    let addr: SocketAddr = rx.recv().unwrap();
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str) -> SummSyncClient {
    SummSyncClient::new(Config {
        api_base: base_url.to_string(),
        timeout_secs: 5,
    })
}

fn status_of(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap()
}

async fn create(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.create_hits.fetch_add(1, Ordering::SeqCst);

    if let Some((code, body)) = &state.create_response {
        return (status_of(*code), Json(body.clone()));
    }

    let players = body["players"].as_array().cloned().unwrap_or_default();
    let results: Vec<Value> = players
        .iter()
        .map(|p| {
            json!({
                "playerName": p["playerName"],
                "gameTag": p["gameTag"],
                "stored": true,
                "fromCache": false,
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({ "sessionId": SESSION_ID, "results": results })),
    )
}

async fn stats(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.stats_hits.fetch_add(1, Ordering::SeqCst);

    let name = body["playerName"].as_str().unwrap_or_default();
    if state.fail_stats_for.as_deref() == Some(name) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "boom"})),
        );
    }

    // "Empty" exists but has no aggregates yet.
    let stats = if name == "Empty" {
        json!({})
    } else {
        json!({
            "kda": 4.52,
            "kp": 0.583,
            "goldPerMin": 402.1,
            "cs": 188.0,
            "csPerMin": 6.3,
            "visionScore": 21.5,
            "visionPerMin": 0.72,
            "wardsPlaced": 9.4,
            "wardsKilled": 3.1,
            "objDamage": 12845.0,
            "mostPlayedRole": "MIDDLE",
            "rankedSolo": {"tier": "CHALLENGER", "rank": "I"},
        })
    };

    (
        StatusCode::OK,
        Json(json!({
            "playerName": name,
            "gameTag": body["gameTag"],
            "stats": stats,
            "updatedAt": "2026-01-01T00:00:00Z",
        })),
    )
}

async fn mastery(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.mastery_hits.fetch_add(1, Ordering::SeqCst);

    (
        StatusCode::OK,
        Json(json!({
            "playerName": body["playerName"],
            "gameTag": body["gameTag"],
            "mastery": [
                {"championName": "Azir", "championLevel": 47, "championPoints": 490290},
                {"championName": "LeBlanc", "championLevel": 16, "championPoints": 160147},
                {"championName": "Ahri", "championLevel": 12, "championPoints": 120000},
            ],
            "updatedAt": "2026-01-01T00:00:00Z",
        })),
    )
}

async fn solo_insight(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.solo_hits.fetch_add(1, Ordering::SeqCst);

    let name = body["playerName"].as_str().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({"answer": format!("Keep **snowballing**, {}.", name)})),
    )
}

async fn group_insight(State(state): State<Arc<ApiState>>) -> (StatusCode, Json<Value>) {
    state.group_hits.fetch_add(1, Ordering::SeqCst);

    if let Some((code, body)) = &state.group_response {
        return (status_of(*code), Json(body.clone()));
    }

    (
        StatusCode::OK,
        Json(json!({"answer": "The team looks coordinated."})),
    )
}

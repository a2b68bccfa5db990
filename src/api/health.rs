use axum::extract::State;
use axum::Json;

use crate::api::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Ready once configured; reports how many pools the overview tracks.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ready",
        "trackedPools": state.config.tracked_pools.len(),
    }))
}

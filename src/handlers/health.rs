use axum::Json;
use serde_json::{Value, json};

/// GET /health -> liveness probe, no storage access.
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

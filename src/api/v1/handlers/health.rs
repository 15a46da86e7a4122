/*
 * Responsibility
 * - GET /health (疎通用)
 * - setup stage を通さない (platform credentials なしで叩ける)
 */
use axum::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
    }))
}

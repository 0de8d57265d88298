//! Service banner and health check

use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Travel Blog API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy"
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

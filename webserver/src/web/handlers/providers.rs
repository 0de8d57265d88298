//! Provider catalog and setup handlers

use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// Catalog of supported providers; static data, valid regardless of which
/// credentials are configured
pub async fn list_providers() -> Json<Value> {
    Json(json!(engine::available_providers()))
}

/// Report whether a provider is ready to use
pub async fn check_setup(State(state): State<AppState>, Path(provider): Path<String>) -> Json<Value> {
    Json(json!(state.factory.check_setup(&provider)))
}

//! Dashboard statistics handlers

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::ServerResult;
use crate::state::AppState;

/// Aggregate blog statistics
pub async fn get_stats(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    let total_posts = state.db.count_published_posts().await?;
    let total_views = state.db.total_post_views().await?;
    let total_subscribers = state.db.count_active_subscribers().await?;

    Ok(Json(json!({
        "total_posts": total_posts,
        "total_views": total_views,
        "total_subscribers": total_subscribers
    })))
}

/// Affiliate network tracking codes
pub async fn tracking_codes(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.affiliates.all_tracking_codes()))
}

//! HTTP routing

pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        // Content
        .route("/api/posts/generate", post(handlers::posts::generate_post))
        .route("/api/posts", get(handlers::posts::list_posts))
        .route("/api/posts/:slug", get(handlers::posts::get_post))
        // Email
        .route("/api/email/subscribe", post(handlers::subscribers::subscribe))
        .route("/api/email/send-newsletter", post(handlers::subscribers::send_newsletter))
        // Dashboard
        .route("/api/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/api/affiliates/tracking-codes", get(handlers::dashboard::tracking_codes))
        // Providers
        .route("/api/providers", get(handlers::providers::list_providers))
        .route("/api/providers/:provider/setup", get(handlers::providers::check_setup))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()).into_inner())
        .with_state(state)
}

//! Newsletter subscription handlers

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Subscribe an address to the newsletter. Idempotent: an existing address
/// reports `already_subscribed`.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> ServerResult<Json<Value>> {
    let email = request.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ServerError::InvalidRequest {
            message: "a valid email address is required".to_string(),
        });
    }

    if state.db.find_subscriber_by_email(&email).await?.is_some() {
        return Ok(Json(json!({ "status": "already_subscribed" })));
    }

    let name = email.split('@').next().unwrap_or_default();
    state.db.insert_subscriber(&email, name).await?;

    // Welcome email is best-effort; the subscription stands either way
    if let Some(mailer) = &state.mailer {
        mailer.send_welcome_email(&email).await;
    }

    Ok(Json(json!({ "status": "subscribed", "email": email })))
}

#[derive(Debug, Deserialize)]
pub struct NewsletterRequest {
    pub subject: String,
    pub html_body: String,
}

/// Send a newsletter to every active subscriber
pub async fn send_newsletter(
    State(state): State<AppState>,
    Json(request): Json<NewsletterRequest>,
) -> ServerResult<Json<Value>> {
    let Some(mailer) = &state.mailer else {
        return Err(ServerError::EmailNotConfigured);
    };

    let subscribers = state.db.list_active_subscriber_emails().await?;
    let summary = mailer
        .send_newsletter(&subscribers, &request.subject, &request.html_body)
        .await;

    Ok(Json(json!(summary)))
}

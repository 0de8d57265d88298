//! Content generation and retrieval handlers

use axum::extract::{Path, State};
use axum::response::Json;
use engine::ContentEngine;
use serde::Deserialize;
use serde_json::{json, Value};
use shared::GenerationRequest;
use uuid::Uuid;

use crate::db::models::NewPost;
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GeneratePostRequest {
    pub topic: String,
    /// Provider id; falls back to the configured default when omitted
    #[serde(default)]
    pub provider: Option<String>,
}

/// Generate a new blog post.
///
/// Orchestration: generate, persist the post and its monetization record,
/// then notify subscribers in the background. Notification failure never
/// rolls back the stored post.
pub async fn generate_post(
    State(state): State<AppState>,
    Json(request): Json<GeneratePostRequest>,
) -> ServerResult<Json<Value>> {
    if request.topic.trim().is_empty() {
        return Err(ServerError::InvalidRequest {
            message: "topic must not be empty".to_string(),
        });
    }

    let engine = state.factory.resolve(request.provider.as_deref())?;

    let generation_request = GenerationRequest::new(
        request.topic.clone(),
        state.site.niche.clone(),
        state.site.target_market.clone(),
        state.site.region.clone(),
    );

    tracing::info!(
        "generating post on '{}' via {}",
        request.topic,
        engine.provider()
    );
    let post = engine.generate_post(&generation_request).await?;

    let affiliate_links = state.affiliates.complete_links(&post.affiliate_suggestions, &state.site.region);

    let post_id = Uuid::new_v4().to_string();
    let new_post = NewPost {
        id: post_id.clone(),
        title: post.title.clone(),
        slug: post.slug.clone(),
        content: post.content.clone(),
        excerpt: post.meta_description.clone(),
        keywords: serde_json::to_string(&post.keywords)?,
        status: "draft".to_string(),
        published_at: None,
    };

    state.db.insert_post(&new_post).await?;
    state
        .db
        .insert_monetization(&post_id, &serde_json::to_string(&affiliate_links)?)
        .await?;

    let background_state = state.clone();
    let notification_id = post_id.clone();
    let notification_title = post.title.clone();
    tokio::spawn(async move {
        notify_subscribers_new_post(background_state, notification_id, notification_title).await;
    });

    Ok(Json(json!({
        "status": "success",
        "post_id": post_id,
        "title": post.title,
        "message": "Post generated successfully"
    })))
}

/// List published posts, newest first
pub async fn list_posts(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    let posts = state.db.list_published_posts().await?;
    Ok(Json(json!(posts)))
}

/// Fetch a single post by slug, counting the view
pub async fn get_post(State(state): State<AppState>, Path(slug): Path<String>) -> ServerResult<Json<Value>> {
    let Some(post) = state.db.find_post_by_slug(&slug).await? else {
        return Err(ServerError::NotFound {
            what: "post".to_string(),
        });
    };

    state.db.increment_post_views(&slug).await?;

    Ok(Json(json!({
        "id": post.id,
        "title": post.title,
        "slug": post.slug,
        "content": post.content,
        "views": post.views + 1,
        "published_at": post.published_at.map(|at| at.to_rfc3339()),
    })))
}

/// Background task: email active subscribers about a new post
async fn notify_subscribers_new_post(state: AppState, post_id: String, post_title: String) {
    let Some(mailer) = state.mailer else {
        tracing::debug!("email delivery not configured, skipping new-post notification");
        return;
    };

    let subscribers = match state.db.list_active_subscriber_emails().await {
        Ok(subscribers) => subscribers,
        Err(e) => {
            tracing::error!("failed to load subscribers for notification: {e}");
            return;
        }
    };

    if subscribers.is_empty() {
        return;
    }

    let post_url = state.site.post_url(&post_id);
    let summary = mailer
        .send_new_post_notification(&subscribers, &post_title, &post_url)
        .await;

    tracing::info!(
        "new-post notification for '{}': {} sent, {} failed",
        post_title,
        summary.sent,
        summary.failed
    );
}

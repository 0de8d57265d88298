//! Database row types

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Full blog post row
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub status: String,
    pub views: i64,
    /// JSON array of keyword strings
    pub keywords: Option<String>,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// Listing view of a post, without the content body
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub views: i64,
    pub published_at: Option<DateTime<Utc>>,
}

/// Insert payload for a new post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    /// JSON array of keyword strings
    pub keywords: String,
    pub status: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// Subscriber row
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmailSubscriber {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

/// Monetization row linked to a post
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonetizationRecord {
    pub id: String,
    pub blog_post_id: String,
    /// JSON array of affiliate suggestion objects
    pub affiliate_links: Option<String>,
    pub estimated_revenue: f64,
    pub actual_revenue: f64,
    pub clicks: i64,
    pub conversions: i64,
    pub created_at: DateTime<Utc>,
}

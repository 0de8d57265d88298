//! Persistence tests against a scratch SQLite database

use chrono::{Duration, Utc};
use tempfile::TempDir;

use webserver::db::models::NewPost;
use webserver::db::Database;

async fn scratch_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}/blog.db", dir.path().display());

    let db = Database::connect(&url).await.unwrap();
    db.run_migrations().await.unwrap();

    (dir, db)
}

fn draft_post(id: &str, slug: &str) -> NewPost {
    NewPost {
        id: id.to_string(),
        title: format!("Post {id}"),
        slug: slug.to_string(),
        content: "<h2>Heading</h2><p>Body</p>".to_string(),
        excerpt: "A short excerpt".to_string(),
        keywords: r#"["safari","kruger"]"#.to_string(),
        status: "draft".to_string(),
        published_at: None,
    }
}

#[tokio::test]
async fn insert_and_fetch_post_by_slug() {
    let (_dir, db) = scratch_db().await;

    db.insert_post(&draft_post("p1", "safari-lodges")).await.unwrap();

    let post = db.find_post_by_slug("safari-lodges").await.unwrap().unwrap();
    assert_eq!(post.id, "p1");
    assert_eq!(post.status, "draft");
    assert_eq!(post.views, 0);
    assert_eq!(post.keywords.as_deref(), Some(r#"["safari","kruger"]"#));

    assert!(db.find_post_by_slug("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn view_counts_accumulate() {
    let (_dir, db) = scratch_db().await;

    db.insert_post(&draft_post("p1", "winelands")).await.unwrap();

    db.increment_post_views("winelands").await.unwrap();
    db.increment_post_views("winelands").await.unwrap();

    let post = db.find_post_by_slug("winelands").await.unwrap().unwrap();
    assert_eq!(post.views, 2);
}

#[tokio::test]
async fn duplicate_slug_is_rejected() {
    let (_dir, db) = scratch_db().await;

    db.insert_post(&draft_post("p1", "garden-route")).await.unwrap();
    let result = db.insert_post(&draft_post("p2", "garden-route")).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn listing_returns_published_posts_newest_first() {
    let (_dir, db) = scratch_db().await;

    let mut older = draft_post("p1", "older");
    older.status = "published".to_string();
    older.published_at = Some(Utc::now() - Duration::days(2));

    let mut newer = draft_post("p2", "newer");
    newer.status = "published".to_string();
    newer.published_at = Some(Utc::now());

    db.insert_post(&older).await.unwrap();
    db.insert_post(&newer).await.unwrap();
    db.insert_post(&draft_post("p3", "still-draft")).await.unwrap();

    let posts = db.list_published_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].slug, "newer");
    assert_eq!(posts[1].slug, "older");
}

#[tokio::test]
async fn dashboard_aggregates_sum_views_of_published_posts() {
    let (_dir, db) = scratch_db().await;

    let mut published = draft_post("p1", "published");
    published.status = "published".to_string();
    published.published_at = Some(Utc::now());
    db.insert_post(&published).await.unwrap();
    db.insert_post(&draft_post("p2", "draft")).await.unwrap();

    db.increment_post_views("published").await.unwrap();
    db.increment_post_views("published").await.unwrap();
    db.increment_post_views("draft").await.unwrap();

    assert_eq!(db.count_published_posts().await.unwrap(), 1);
    assert_eq!(db.total_post_views().await.unwrap(), 2);
}

#[tokio::test]
async fn subscribers_round_trip() {
    let (_dir, db) = scratch_db().await;

    db.insert_subscriber("traveler@example.com", "traveler").await.unwrap();

    let subscriber = db
        .find_subscriber_by_email("traveler@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(subscriber.name.as_deref(), Some("traveler"));
    assert!(subscriber.is_active);

    assert_eq!(db.count_active_subscribers().await.unwrap(), 1);
    assert_eq!(
        db.list_active_subscriber_emails().await.unwrap(),
        vec!["traveler@example.com".to_string()]
    );
}

#[tokio::test]
async fn duplicate_subscriber_email_is_rejected() {
    let (_dir, db) = scratch_db().await;

    db.insert_subscriber("once@example.com", "once").await.unwrap();
    let result = db.insert_subscriber("once@example.com", "once").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn monetization_record_links_to_its_post() {
    let (_dir, db) = scratch_db().await;

    db.insert_post(&draft_post("p1", "kruger")).await.unwrap();

    let links = r#"[{"type":"hotel","name":"Singita","platform":"booking.com","link":"https://example.com"}]"#;
    db.insert_monetization("p1", links).await.unwrap();

    let record = db.monetization_for_post("p1").await.unwrap().unwrap();
    assert_eq!(record.blog_post_id, "p1");
    assert_eq!(record.affiliate_links.as_deref(), Some(links));
    assert_eq!(record.clicks, 0);

    assert!(db.monetization_for_post("p2").await.unwrap().is_none());
}

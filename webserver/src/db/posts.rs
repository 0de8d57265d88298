//! Blog post database operations

use chrono::Utc;

use super::models::{BlogPost, NewPost, PostSummary};
use super::Database;

impl Database {
    pub async fn insert_post(&self, post: &NewPost) -> Result<(), sqlx::Error> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO blog_posts
            (id, title, slug, content, excerpt, status, views, keywords, created_at, published_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, 0, ?, ?, ?, ?)
            "#,
        )
        .bind(&post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.status)
        .bind(&post.keywords)
        .bind(now)
        .bind(post.published_at)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Published posts, newest first
    pub async fn list_published_posts(&self) -> Result<Vec<PostSummary>, sqlx::Error> {
        sqlx::query_as::<_, PostSummary>(
            r#"
            SELECT id, title, slug, excerpt, views, published_at
            FROM blog_posts
            WHERE status = 'published'
            ORDER BY published_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn increment_post_views(&self, slug: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE blog_posts SET views = views + 1 WHERE slug = ?")
            .bind(slug)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count_published_posts(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blog_posts WHERE status = 'published'")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Total view count across published posts
    pub async fn total_post_views(&self) -> Result<i64, sqlx::Error> {
        let total: (i64,) =
            sqlx::query_as("SELECT COALESCE(SUM(views), 0) FROM blog_posts WHERE status = 'published'")
                .fetch_one(&self.pool)
                .await?;

        Ok(total.0)
    }
}

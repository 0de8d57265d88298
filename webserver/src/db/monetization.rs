//! Monetization database operations

use chrono::Utc;
use uuid::Uuid;

use super::models::MonetizationRecord;
use super::Database;

impl Database {
    /// Record the affiliate links attached to a freshly generated post
    pub async fn insert_monetization(&self, blog_post_id: &str, affiliate_links: &str) -> Result<String, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO monetization_data (id, blog_post_id, affiliate_links, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(blog_post_id)
        .bind(affiliate_links)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn monetization_for_post(&self, blog_post_id: &str) -> Result<Option<MonetizationRecord>, sqlx::Error> {
        sqlx::query_as::<_, MonetizationRecord>("SELECT * FROM monetization_data WHERE blog_post_id = ?")
            .bind(blog_post_id)
            .fetch_optional(&self.pool)
            .await
    }
}

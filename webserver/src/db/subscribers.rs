//! Email subscriber database operations

use chrono::Utc;
use uuid::Uuid;

use super::models::EmailSubscriber;
use super::Database;

impl Database {
    pub async fn insert_subscriber(&self, email: &str, name: &str) -> Result<String, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO email_subscribers (id, email, name, is_active, subscribed_at)
            VALUES (?, ?, ?, 1, ?)
            "#,
        )
        .bind(&id)
        .bind(email)
        .bind(name)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    pub async fn find_subscriber_by_email(&self, email: &str) -> Result<Option<EmailSubscriber>, sqlx::Error> {
        sqlx::query_as::<_, EmailSubscriber>("SELECT * FROM email_subscribers WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    /// Addresses of all active subscribers
    pub async fn list_active_subscriber_emails(&self) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT email FROM email_subscribers WHERE is_active = 1")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(email,)| email).collect())
    }

    pub async fn count_active_subscribers(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM email_subscribers WHERE is_active = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

//! SQLite persistence
//!
//! A thin pool wrapper plus per-area operation impls (posts, subscribers,
//! monetization). Schema setup is idempotent and runs at startup.

pub mod models;
pub mod monetization;
pub mod posts;
pub mod subscribers;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Idempotent schema statements, executed in order at startup
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS blog_posts (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        content TEXT NOT NULL,
        excerpt TEXT,
        status TEXT NOT NULL DEFAULT 'draft',
        views INTEGER NOT NULL DEFAULT 0,
        keywords TEXT,
        created_at TEXT NOT NULL,
        published_at TEXT,
        updated_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_posts_slug ON blog_posts (slug)",
    "CREATE INDEX IF NOT EXISTS idx_posts_status ON blog_posts (status)",
    "CREATE INDEX IF NOT EXISTS idx_posts_published_at ON blog_posts (published_at)",
    r#"
    CREATE TABLE IF NOT EXISTS monetization_data (
        id TEXT PRIMARY KEY,
        blog_post_id TEXT NOT NULL REFERENCES blog_posts (id),
        affiliate_links TEXT,
        estimated_revenue REAL NOT NULL DEFAULT 0,
        actual_revenue REAL NOT NULL DEFAULT 0,
        clicks INTEGER NOT NULL DEFAULT 0,
        conversions INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS email_subscribers (
        id TEXT PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        name TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        subscribed_at TEXT NOT NULL,
        unsubscribed_at TEXT
    )
    "#,
];

/// Handle to the SQLite pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (and if necessary create) the database at the given URL
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes if they do not exist yet
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        tracing::info!("database schema ready");
        Ok(())
    }
}

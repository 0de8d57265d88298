//! Blog backend HTTP server
//!
//! Exposes the content-generation pipeline over a JSON API and owns the
//! collaborators around it: SQLite persistence, SMTP notifications and
//! affiliate link building.

pub mod affiliate;
pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod state;
pub mod web;

pub use config::SiteConfig;
pub use error::{ServerError, ServerResult};
pub use state::AppState;

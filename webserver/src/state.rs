//! Shared application state for request handlers

use std::sync::Arc;

use engine::EngineFactory;

use crate::affiliate::AffiliateLinkBuilder;
use crate::config::SiteConfig;
use crate::db::Database;
use crate::email::EmailService;

/// State cloned into every handler.
///
/// The mailer is optional: when SMTP is not configured the server still
/// serves content, it just skips notifications.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub factory: Arc<EngineFactory>,
    pub mailer: Option<Arc<EmailService>>,
    pub affiliates: Arc<AffiliateLinkBuilder>,
    pub site: SiteConfig,
}

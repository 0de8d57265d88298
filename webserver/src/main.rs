//! Blog backend entry point

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use engine::{EngineConfig, EngineFactory};

use webserver::affiliate::AffiliateLinkBuilder;
use webserver::db::Database;
use webserver::email::EmailService;
use webserver::web::build_router;
use webserver::{AppState, ServerResult, SiteConfig};

#[derive(Parser)]
#[command(name = "webserver")]
#[command(about = "Content-publishing backend: generation, persistence, notifications")]
struct Args {
    /// Port for the HTTP API
    #[arg(long, default_value = "8080")]
    port: u16,

    /// SQLite database URL (falls back to DATABASE_URL, then a local file)
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    shared::logging::init_tracing(Some(&args.log_level));

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:blog.db".to_string());

    let db = Database::connect(&database_url).await?;
    db.run_migrations().await?;

    let factory = Arc::new(EngineFactory::new(EngineConfig::from_env()));
    tracing::info!("default provider: {}", factory.config().default_provider());

    let mailer = match EmailService::from_env() {
        Ok(service) => Some(Arc::new(service)),
        Err(e) => {
            tracing::warn!("email delivery disabled: {e}");
            None
        }
    };

    let state = AppState {
        db,
        factory,
        mailer,
        affiliates: Arc::new(AffiliateLinkBuilder::default()),
        site: SiteConfig::from_env(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🌐 Travel blog API listening on http://{addr}");
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}

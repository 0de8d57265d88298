//! Tracing setup shared by all binaries

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber with per-crate level directives.
///
/// Noisy transport dependencies are damped to `warn` so request logs stay
/// readable at `info`.
pub fn init_tracing(log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");

    let directives = format!(
        "webserver={base_level},engine={base_level},shared={base_level},\
         tower_http=warn,hyper=warn,reqwest=warn,sqlx=warn"
    );

    fmt()
        .with_env_filter(EnvFilter::new(&directives))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

//! Server error types and HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use engine::EngineError;
use serde_json::json;
use thiserror::Error;

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("email delivery is not configured")]
    EmailNotConfigured,

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Engine(e) => match e {
                EngineError::UnsupportedProvider { .. } => StatusCode::BAD_REQUEST,
                EngineError::MissingCredential { .. } | EngineError::ProviderUnavailable { .. } => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                EngineError::Backend { .. } | EngineError::ResponseParse { .. } => StatusCode::BAD_GATEWAY,
            },
            ServerError::EmailNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::InvalidRequest { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

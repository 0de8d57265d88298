//! Engine error types

use shared::{BackendFailure, ProviderId};
use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unsupported AI provider: {name}. Supported: gemini, anthropic, openai")]
    UnsupportedProvider { name: String },

    #[error("{credential} not set in environment")]
    MissingCredential { provider: ProviderId, credential: String },

    #[error("failed to initialize AI provider '{provider}': {message}")]
    ProviderUnavailable { provider: ProviderId, message: String },

    #[error("content generation request failed: {provider} - {reason:?}")]
    Backend { provider: ProviderId, reason: BackendFailure },

    #[error("failed to parse {provider} response as JSON: {raw}")]
    ResponseParse {
        provider: ProviderId,
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

//! Provider adapters
//!
//! Each adapter implements [`crate::ContentEngine`] and differs from the
//! others only in credential name, request construction and reply-text
//! extraction. Prompt text and payload parsing are shared.

pub mod anthropic;
pub mod gemini;
pub mod openai;

pub use anthropic::AnthropicEngine;
pub use gemini::GeminiEngine;
pub use openai::OpenAiEngine;

use std::time::Duration;

use shared::{BackendFailure, ProviderId};

use crate::error::{EngineError, EngineResult};

/// Per-request timeout applied to the shared HTTP client
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build the HTTP client an adapter holds for its lifetime
pub(crate) fn build_http_client(provider: &ProviderId) -> EngineResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| EngineError::ProviderUnavailable {
            provider: provider.clone(),
            message: e.to_string(),
        })
}

/// Map a non-success HTTP status to a backend failure kind
pub(crate) fn failure_from_status(status: reqwest::StatusCode) -> BackendFailure {
    match status.as_u16() {
        401 => BackendFailure::AuthenticationFailed,
        429 => BackendFailure::RateLimitExceeded,
        503 => BackendFailure::ServiceUnavailable,
        _ => BackendFailure::ServerError(status.to_string()),
    }
}

/// Look up the adapter's API key in the configuration
pub(crate) fn require_credential(
    config: &crate::EngineConfig,
    provider: &ProviderId,
) -> EngineResult<String> {
    let credential = provider.credential_name();
    config
        .credential(credential)
        .map(str::to_owned)
        .ok_or_else(|| EngineError::MissingCredential {
            provider: provider.clone(),
            credential: credential.to_string(),
        })
}

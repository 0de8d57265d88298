//! Content generation using Anthropic Claude

use async_trait::async_trait;
use shared::{BackendFailure, GeneratedPost, GenerationRequest, ProviderId};

use crate::error::{EngineError, EngineResult};
use crate::providers::{build_http_client, failure_from_status, require_credential};
use crate::traits::ContentEngine;
use crate::{config::EngineConfig, prompt, response};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4000;

/// Anthropic-backed content engine
pub struct AnthropicEngine {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl AnthropicEngine {
    /// Create an engine; fails immediately if `ANTHROPIC_API_KEY` is not configured
    pub fn new(config: &EngineConfig) -> EngineResult<Self> {
        let provider = ProviderId::Anthropic;
        let api_key = require_credential(config, &provider)?;
        let client = build_http_client(&provider)?;

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        })
    }

    /// Point the engine at a different API host (stub servers in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn request_completion(&self, prompt: &str) -> Result<String, BackendFailure> {
        let request_body = serde_json::json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "messages": [
                {"role": "user", "content": prompt}
            ]
        });

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BackendFailure::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(failure_from_status(response.status()));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| BackendFailure::InvalidReply(format!("failed to decode response body: {e}")))?;

        response_json
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|item| item.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_owned)
            .ok_or_else(|| BackendFailure::InvalidReply("no content in response".to_string()))
    }
}

#[async_trait]
impl ContentEngine for AnthropicEngine {
    fn provider(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    async fn generate_post(&self, request: &GenerationRequest) -> EngineResult<GeneratedPost> {
        let prompt = prompt::build_post_prompt(request);

        let reply = self
            .request_completion(&prompt)
            .await
            .map_err(|reason| EngineError::Backend {
                provider: self.provider(),
                reason,
            })?;

        response::parse_post_payload(&self.provider(), &reply)
    }
}

//! Content generation using OpenAI chat completions

use async_trait::async_trait;
use shared::{BackendFailure, GeneratedPost, GenerationRequest, ProviderId};

use crate::error::{EngineError, EngineResult};
use crate::providers::{build_http_client, failure_from_status, require_credential};
use crate::traits::ContentEngine;
use crate::{config::EngineConfig, prompt, response};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
const SYSTEM_PROMPT: &str =
    "You are a professional travel writer specializing in luxury travel content and SEO optimization.";
const MAX_TOKENS: u32 = 4000;
const TEMPERATURE: f32 = 0.7;

/// OpenAI-backed content engine
pub struct OpenAiEngine {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiEngine {
    /// Create an engine; fails immediately if `OPENAI_API_KEY` is not configured
    pub fn new(config: &EngineConfig) -> EngineResult<Self> {
        let provider = ProviderId::OpenAI;
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
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
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
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_owned)
            .ok_or_else(|| BackendFailure::InvalidReply("no content in response".to_string()))
    }
}

#[async_trait]
impl ContentEngine for OpenAiEngine {
    fn provider(&self) -> ProviderId {
        ProviderId::OpenAI
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

//! Content generation using Google Gemini

use async_trait::async_trait;
use shared::{BackendFailure, GeneratedPost, GenerationRequest, ProviderId};

use crate::error::{EngineError, EngineResult};
use crate::providers::{build_http_client, failure_from_status, require_credential};
use crate::traits::ContentEngine;
use crate::{config::EngineConfig, prompt, response};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";
const MAX_OUTPUT_TOKENS: u32 = 4000;
const TEMPERATURE: f32 = 0.7;

/// Gemini-backed content engine
pub struct GeminiEngine {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiEngine {
    /// Create an engine; fails immediately if `GEMINI_API_KEY` is not configured
    pub fn new(config: &EngineConfig) -> EngineResult<Self> {
        let provider = ProviderId::Gemini;
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
            "contents": [
                {"parts": [{"text": prompt}]}
            ],
            "generationConfig": {
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
                "temperature": TEMPERATURE
            }
        });

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
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
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_owned)
            .ok_or_else(|| BackendFailure::InvalidReply("no content in response".to_string()))
    }
}

#[async_trait]
impl ContentEngine for GeminiEngine {
    fn provider(&self) -> ProviderId {
        ProviderId::Gemini
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

//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for downstream LLM providers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    Gemini,
    Anthropic,
    OpenAI,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ProviderId {
    /// All supported providers, in catalog order
    pub const ALL: [ProviderId; 3] = [ProviderId::Gemini, ProviderId::Anthropic, ProviderId::OpenAI];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(ProviderId::Gemini),
            "anthropic" => Some(ProviderId::Anthropic),
            "openai" => Some(ProviderId::OpenAI),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Gemini => "gemini",
            ProviderId::Anthropic => "anthropic",
            ProviderId::OpenAI => "openai",
        }
    }

    /// Environment variable holding the provider's API key
    pub fn credential_name(&self) -> &'static str {
        match self {
            ProviderId::Gemini => "GEMINI_API_KEY",
            ProviderId::Anthropic => "ANTHROPIC_API_KEY",
            ProviderId::OpenAI => "OPENAI_API_KEY",
        }
    }
}

/// Static catalog metadata for a provider
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub env_var: &'static str,
    pub signup_url: &'static str,
    pub free_tier: &'static str,
    pub recommended: bool,
}

/// Input parameters for one content-generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub niche: String,
    pub target_market: String,
    pub region: String,
}

impl GenerationRequest {
    pub fn new(
        topic: impl Into<String>,
        niche: impl Into<String>,
        target_market: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            niche: niche.into(),
            target_market: target_market.into(),
            region: region.into(),
        }
    }
}

/// Structured result of one successful content-generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub title: String,
    pub slug: String,
    /// SEO description, intended to stay under 155 characters (not enforced)
    pub meta_description: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub affiliate_suggestions: Vec<AffiliateSuggestion>,
}

/// One affiliate recommendation embedded in a generated post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateSuggestion {
    /// Category of the recommendation, e.g. "hotel" or "tour"
    #[serde(rename = "type")]
    pub category: String,
    pub name: String,
    pub platform: String,
    #[serde(default)]
    pub link: String,
}

/// Result of a provider setup check
#[derive(Debug, Clone, Serialize)]
pub struct SetupStatus {
    pub valid: bool,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_url: Option<String>,
}

/// Failure reasons for LLM provider requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendFailure {
    /// Authentication failed (invalid API key)
    AuthenticationFailed,
    /// Rate limit exceeded
    RateLimitExceeded,
    /// Service temporarily unavailable
    ServiceUnavailable,
    /// Server error from provider
    ServerError(String),
    /// Network/connection error
    NetworkError(String),
    /// Reply body missing the expected content
    InvalidReply(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_id_round_trips_through_names() {
        for provider in ProviderId::ALL {
            let parsed = ProviderId::from_str(provider.as_str());
            assert_eq!(parsed, Some(provider));
        }
    }

    #[test]
    fn provider_id_parsing_is_case_insensitive() {
        assert_eq!(ProviderId::from_str("Gemini"), Some(ProviderId::Gemini));
        assert_eq!(ProviderId::from_str("OPENAI"), Some(ProviderId::OpenAI));
        assert_eq!(ProviderId::from_str("mistral"), None);
    }

    #[test]
    fn affiliate_suggestion_uses_type_field_on_the_wire() {
        let suggestion = AffiliateSuggestion {
            category: "hotel".to_string(),
            name: "Singita Lebombo".to_string(),
            platform: "booking.com".to_string(),
            link: String::new(),
        };

        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["type"], "hotel");
        assert!(json.get("category").is_none());
    }
}

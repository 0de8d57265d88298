//! Engine configuration
//!
//! The default provider and credential map are explicit values handed to the
//! factory at construction, so multiple configurations can coexist in one
//! process (tests exercise this directly).

use std::collections::HashMap;
use std::env;

use shared::ProviderId;

/// Configuration for the engine factory
#[derive(Debug, Clone)]
pub struct EngineConfig {
    default_provider: String,
    credentials: HashMap<String, String>,
}

impl EngineConfig {
    /// Create an empty configuration with the given default provider name
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            default_provider: default_provider.into().to_lowercase(),
            credentials: HashMap::new(),
        }
    }

    /// Build configuration from process environment.
    ///
    /// Reads `AI_PROVIDER` (defaults to `gemini`) and the API key variable of
    /// every supported provider that is present.
    pub fn from_env() -> Self {
        let default_provider = env::var("AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string());
        let mut config = Self::new(default_provider);

        for provider in ProviderId::ALL {
            if let Ok(value) = env::var(provider.credential_name()) {
                config.credentials.insert(provider.credential_name().to_string(), value);
            }
        }

        config
    }

    /// Add a credential (builder style, used by tests and embedders)
    pub fn with_credential(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.credentials.insert(name.into(), value.into());
        self
    }

    /// Replace the default provider name
    pub fn with_default_provider(mut self, provider: impl Into<String>) -> Self {
        self.default_provider = provider.into().to_lowercase();
        self
    }

    /// Look up a credential by name; `None` means not configured
    pub fn credential(&self, name: &str) -> Option<&str> {
        self.credentials.get(name).map(String::as_str)
    }

    pub fn default_provider(&self) -> &str {
        &self.default_provider
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new("gemini")
    }
}

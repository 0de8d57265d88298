//! Provider registry and engine factory
//!
//! Providers are functionally identical (one request/response call per post)
//! but differ in authentication and wire format; the factory isolates that
//! variance so callers depend only on [`ContentEngine`].

use shared::{ProviderId, ProviderInfo, SetupStatus};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::providers::{AnthropicEngine, GeminiEngine, OpenAiEngine};
use crate::traits::ContentEngine;

/// Static catalog of supported providers, in presentation order.
///
/// Pure data; valid regardless of which credentials are configured.
pub fn available_providers() -> Vec<ProviderInfo> {
    vec![
        ProviderInfo {
            id: "gemini",
            name: "Google Gemini",
            description: "Google's powerful AI model with free tier",
            env_var: "GEMINI_API_KEY",
            signup_url: "https://ai.google.dev",
            free_tier: "60 requests/minute",
            recommended: true,
        },
        ProviderInfo {
            id: "anthropic",
            name: "Anthropic Claude",
            description: "Advanced AI with excellent reasoning capabilities",
            env_var: "ANTHROPIC_API_KEY",
            signup_url: "https://console.anthropic.com",
            free_tier: "$5 credits",
            recommended: false,
        },
        ProviderInfo {
            id: "openai",
            name: "OpenAI GPT-4",
            description: "Popular AI model with strong performance",
            env_var: "OPENAI_API_KEY",
            signup_url: "https://platform.openai.com",
            free_tier: "Pay per use",
            recommended: false,
        },
    ]
}

fn provider_info(provider: &ProviderId) -> ProviderInfo {
    available_providers()
        .into_iter()
        .find(|info| info.id == provider.as_str())
        .unwrap_or_else(|| unreachable!("catalog covers every ProviderId"))
}

/// Factory resolving provider names to concrete engines
pub struct EngineFactory {
    config: EngineConfig,
}

impl EngineFactory {
    /// Create a factory around an explicit configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Resolve a provider name (or the configured default) to an engine.
    ///
    /// Fails with [`EngineError::UnsupportedProvider`] for unknown names and
    /// with the engine's construction error (missing credential, client
    /// build failure) otherwise.
    pub fn resolve(&self, requested: Option<&str>) -> EngineResult<Box<dyn ContentEngine>> {
        let name = requested.unwrap_or_else(|| self.config.default_provider());

        let provider = ProviderId::from_str(name).ok_or_else(|| EngineError::UnsupportedProvider {
            name: name.to_string(),
        })?;

        self.build(&provider)
    }

    /// Construct an engine for a known provider id
    pub fn build(&self, provider: &ProviderId) -> EngineResult<Box<dyn ContentEngine>> {
        match provider {
            ProviderId::Gemini => Ok(Box::new(GeminiEngine::new(&self.config)?)),
            ProviderId::Anthropic => Ok(Box::new(AnthropicEngine::new(&self.config)?)),
            ProviderId::OpenAI => Ok(Box::new(OpenAiEngine::new(&self.config)?)),
        }
    }

    /// Report whether a provider is ready to use, without retaining the
    /// constructed engine. Invalid results carry a remediation hint.
    pub fn check_setup(&self, requested: &str) -> SetupStatus {
        let Some(provider) = ProviderId::from_str(requested) else {
            return SetupStatus {
                valid: false,
                detail: format!("Unknown provider: {requested}"),
                setup_url: None,
            };
        };

        let info = provider_info(&provider);

        if self.config.credential(provider.credential_name()).is_none() {
            return SetupStatus {
                valid: false,
                detail: format!(
                    "Missing API key: {} not set in environment",
                    provider.credential_name()
                ),
                setup_url: Some(info.signup_url.to_string()),
            };
        }

        match self.build(&provider) {
            Ok(_) => SetupStatus {
                valid: true,
                detail: format!("{} is properly configured", info.name),
                setup_url: None,
            },
            Err(e) => SetupStatus {
                valid: false,
                detail: format!("Configuration error: {e}"),
                setup_url: Some(info.signup_url.to_string()),
            },
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory_with_all_credentials() -> EngineFactory {
        let config = EngineConfig::default()
            .with_credential("GEMINI_API_KEY", "g-key")
            .with_credential("ANTHROPIC_API_KEY", "a-key")
            .with_credential("OPENAI_API_KEY", "o-key");
        EngineFactory::new(config)
    }

    #[test]
    fn catalog_has_three_stable_entries() {
        let providers = available_providers();

        assert_eq!(providers.len(), 3);
        assert_eq!(providers[0].id, "gemini");
        assert_eq!(providers[1].id, "anthropic");
        assert_eq!(providers[2].id, "openai");
        assert!(providers[0].recommended);

        for info in &providers {
            assert!(!info.id.is_empty());
            assert!(!info.name.is_empty());
            assert!(!info.env_var.is_empty());
        }
    }

    #[test]
    fn resolve_rejects_unknown_providers() {
        let factory = factory_with_all_credentials();

        for name in ["mistral", "gpt4", "", "gemini-pro"] {
            let err = factory.resolve(Some(name)).err().expect("expected an error");
            assert!(
                matches!(err, EngineError::UnsupportedProvider { .. }),
                "expected UnsupportedProvider for {name:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn resolve_without_credential_fails_with_missing_credential() {
        let factory = EngineFactory::new(EngineConfig::default());

        for provider in ProviderId::ALL {
            let err = factory
                .resolve(Some(provider.as_str()))
                .err()
                .expect("expected an error");
            match err {
                EngineError::MissingCredential { credential, .. } => {
                    assert_eq!(credential, provider.credential_name());
                }
                other => panic!("expected MissingCredential for {provider}, got {other:?}"),
            }
        }
    }

    #[test]
    fn resolve_uses_configured_default_when_unspecified() {
        let config = EngineConfig::default()
            .with_default_provider("anthropic")
            .with_credential("ANTHROPIC_API_KEY", "a-key");
        let factory = EngineFactory::new(config);

        let engine = factory.resolve(None).unwrap();
        assert_eq!(engine.provider(), ProviderId::Anthropic);
    }

    #[test]
    fn resolve_builds_each_known_provider() {
        let factory = factory_with_all_credentials();

        for provider in ProviderId::ALL {
            let engine = factory.resolve(Some(provider.as_str())).unwrap();
            assert_eq!(engine.provider(), provider);
        }
    }

    #[test]
    fn check_setup_reports_missing_credential_with_hint() {
        let factory = EngineFactory::new(EngineConfig::default());

        let status = factory.check_setup("gemini");
        assert!(!status.valid);
        assert!(status.detail.contains("GEMINI_API_KEY"));
        assert_eq!(status.setup_url.as_deref(), Some("https://ai.google.dev"));
    }

    #[test]
    fn check_setup_succeeds_with_credential_present() {
        let factory = factory_with_all_credentials();

        let status = factory.check_setup("openai");
        assert!(status.valid);
        assert!(status.detail.contains("properly configured"));
    }

    #[test]
    fn check_setup_rejects_unknown_provider() {
        let factory = factory_with_all_credentials();

        let status = factory.check_setup("grok");
        assert!(!status.valid);
        assert!(status.detail.contains("Unknown provider"));
        assert!(status.setup_url.is_none());
    }
}

//! Engine trait definitions

use async_trait::async_trait;
use shared::{GeneratedPost, GenerationRequest, ProviderId};

use crate::error::EngineResult;

/// Common contract for all content-generation backends.
///
/// An engine is constructed with its credential already validated and holds
/// no mutable state; each `generate_post` call is one independent round-trip
/// to the provider. No retries, no streaming.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentEngine: Send + Sync {
    /// Which provider this engine talks to
    fn provider(&self) -> ProviderId;

    /// Generate a complete blog post for the given request
    async fn generate_post(&self, request: &GenerationRequest) -> EngineResult<GeneratedPost>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn engines_are_usable_as_trait_objects() {
        let mut mock = MockContentEngine::new();
        mock.expect_provider().return_const(ProviderId::Gemini);
        mock.expect_generate_post().returning(|request| {
            Ok(GeneratedPost {
                title: format!("All about {}", request.topic),
                slug: "all-about".to_string(),
                meta_description: String::new(),
                content: "<h2>Intro</h2>".to_string(),
                keywords: vec![],
                affiliate_suggestions: vec![],
            })
        });

        let engine: Box<dyn ContentEngine> = Box::new(mock);
        let request = GenerationRequest::new("Kruger", "luxury-resorts", "US-millennial", "Cape Town");

        let post = engine.generate_post(&request).await.unwrap();
        assert_eq!(engine.provider(), ProviderId::Gemini);
        assert_eq!(post.title, "All about Kruger");
    }
}

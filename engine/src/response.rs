//! Reply-text handling shared by all provider adapters
//!
//! Models frequently wrap their JSON payload in a markdown code fence; the
//! fence is stripped before structured parsing.

use serde::Deserialize;
use shared::{AffiliateSuggestion, GeneratedPost, ProviderId};

use crate::error::{EngineError, EngineResult};

const TAGGED_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Strip a markdown code-block wrapper from free text.
///
/// If a ```json-tagged fence is present, the payload is the text between that
/// delimiter and the next plain fence. Otherwise, if any fence is present,
/// the payload is the text between the first pair. With no fences the whole
/// reply is the payload.
pub fn strip_code_fence(text: &str) -> &str {
    if let Some(start) = text.find(TAGGED_FENCE) {
        let rest = &text[start + TAGGED_FENCE.len()..];
        match rest.find(FENCE) {
            Some(end) => rest[..end].trim(),
            None => rest.trim(),
        }
    } else if let Some(start) = text.find(FENCE) {
        let rest = &text[start + FENCE.len()..];
        match rest.find(FENCE) {
            Some(end) => rest[..end].trim(),
            None => rest.trim(),
        }
    } else {
        text.trim()
    }
}

/// Intermediate shape: affiliate entries are parsed individually so one
/// malformed entry does not reject the whole post.
#[derive(Deserialize)]
struct RawPost {
    title: String,
    slug: String,
    meta_description: String,
    content: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    affiliate_suggestions: Vec<serde_json::Value>,
}

/// Parse a raw provider reply into a [`GeneratedPost`].
///
/// The four top-level string fields are required; `keywords` and
/// `affiliate_suggestions` default to empty. Affiliate entries that do not
/// match the expected shape are skipped with a warning rather than failing
/// the call.
pub fn parse_post_payload(provider: &ProviderId, raw: &str) -> EngineResult<GeneratedPost> {
    let payload = strip_code_fence(raw);

    let parsed: RawPost = serde_json::from_str(payload).map_err(|source| EngineError::ResponseParse {
        provider: provider.clone(),
        raw: raw.to_string(),
        source,
    })?;

    let mut affiliate_suggestions = Vec::with_capacity(parsed.affiliate_suggestions.len());
    for entry in parsed.affiliate_suggestions {
        match serde_json::from_value::<AffiliateSuggestion>(entry) {
            Ok(suggestion) => affiliate_suggestions.push(suggestion),
            Err(e) => {
                tracing::warn!("skipping malformed affiliate suggestion from {provider}: {e}");
            }
        }
    }

    Ok(GeneratedPost {
        title: parsed.title,
        slug: parsed.slug,
        meta_description: parsed.meta_description,
        content: parsed.content,
        keywords: parsed.keywords,
        affiliate_suggestions,
    })
}

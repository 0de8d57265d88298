//! Site-wide content settings

use std::env;

/// Campaign parameters injected into every generation request, plus the
/// public URL used in notification emails.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub niche: String,
    pub target_market: String,
    pub region: String,
    pub public_base_url: String,
}

impl SiteConfig {
    /// Load settings from environment, falling back to the site defaults
    pub fn from_env() -> Self {
        Self {
            niche: env::var("NICHE").unwrap_or_else(|_| "luxury-resorts".to_string()),
            target_market: env::var("TARGET_MARKET").unwrap_or_else(|_| "US-millennial".to_string()),
            region: env::var("GEO_REGION").unwrap_or_else(|_| "Cape Town".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "https://yourblog.com".to_string()),
        }
    }

    /// Absolute URL for a post, used in subscriber notifications
    pub fn post_url(&self, post_id: &str) -> String {
        format!("{}/posts/{}", self.public_base_url.trim_end_matches('/'), post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_url_handles_trailing_slash() {
        let config = SiteConfig {
            niche: String::new(),
            target_market: String::new(),
            region: String::new(),
            public_base_url: "https://example.com/".to_string(),
        };

        assert_eq!(config.post_url("abc"), "https://example.com/posts/abc");
    }
}

//! Shared prompt template for blog-post generation
//!
//! Every provider sends the same prompt; only request framing differs per
//! adapter.

use shared::GenerationRequest;

/// Build the fixed blog-post prompt for one generation request.
///
/// Instructs length, SEO structure, tone, affiliate integration and the exact
/// JSON shape the response parser expects.
pub fn build_post_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Write a luxury travel blog post about {topic}.

Target Market: {target_market}
Region: {region}
Niche: {niche}

Requirements:
1. Length: 2000-2500 words
2. SEO optimized with H2/H3 headers
3. Engaging introduction and conclusion
4. Include 5-7 naturally integrated affiliate recommendations for:
   - Hotels/accommodation (Booking.com or other accommodation platforms)
   - Tours/activities (GetYourGuide or Viator)
5. Include practical information and insider tips
6. Professional tone for luxury audience

Return as JSON with these fields:
{{
    "title": "Post title",
    "slug": "url-slug",
    "meta_description": "SEO description (max 155 chars)",
    "content": "Full post content with HTML headers",
    "keywords": ["keyword1", "keyword2", ...],
    "affiliate_suggestions": [
        {{"type": "hotel", "name": "Hotel Name", "platform": "booking.com", "link": "..."}},
        ...
    ]
}}"#,
        topic = request.topic,
        target_market = request.target_market,
        region = request.region,
        niche = request.niche,
    )
}

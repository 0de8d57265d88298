//! Affiliate link building
//!
//! Generated posts suggest partner platforms but usually leave the link
//! field empty; this module fills in tracked URLs for the networks the site
//! has accounts with.

use std::collections::HashMap;

use shared::AffiliateSuggestion;
use url::form_urlencoded;

/// Supported affiliate networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffiliateNetwork {
    Booking,
    GetYourGuide,
    Viator,
}

impl AffiliateNetwork {
    pub const ALL: [AffiliateNetwork; 3] = [
        AffiliateNetwork::Booking,
        AffiliateNetwork::GetYourGuide,
        AffiliateNetwork::Viator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AffiliateNetwork::Booking => "booking",
            AffiliateNetwork::GetYourGuide => "getyourguide",
            AffiliateNetwork::Viator => "viator",
        }
    }
}

/// Builds tracked affiliate URLs for the site's partner accounts
#[derive(Debug, Clone)]
pub struct AffiliateLinkBuilder {
    tracking_ids: HashMap<AffiliateNetwork, String>,
}

impl Default for AffiliateLinkBuilder {
    fn default() -> Self {
        let mut tracking_ids = HashMap::new();
        tracking_ids.insert(AffiliateNetwork::Booking, "7777439".to_string());
        tracking_ids.insert(AffiliateNetwork::GetYourGuide, "OYSNX2E".to_string());
        tracking_ids.insert(AffiliateNetwork::Viator, "P00275646".to_string());

        Self { tracking_ids }
    }
}

impl AffiliateLinkBuilder {
    pub fn tracking_code(&self, network: AffiliateNetwork) -> &str {
        &self.tracking_ids[&network]
    }

    pub fn all_tracking_codes(&self) -> HashMap<String, String> {
        AffiliateNetwork::ALL
            .iter()
            .map(|network| (network.as_str().to_string(), self.tracking_ids[network].clone()))
            .collect()
    }

    /// Booking.com link, optionally scoped to a destination city
    pub fn booking_link(&self, destination: Option<&str>) -> String {
        let mut params = vec![("aid", self.tracking_code(AffiliateNetwork::Booking))];
        if let Some(city) = destination {
            params.push(("city", city));
        }

        tracked_url("https://www.booking.com/index.html", &params)
    }

    pub fn getyourguide_link(&self, activity_id: Option<&str>) -> String {
        let mut params = vec![("partner_id", self.tracking_code(AffiliateNetwork::GetYourGuide))];
        if let Some(activity) = activity_id {
            params.push(("activity_id", activity));
        }

        tracked_url("https://www.getyourguide.com/", &params)
    }

    pub fn viator_link(&self, tour_id: Option<&str>) -> String {
        let mut params = vec![("pid", self.tracking_code(AffiliateNetwork::Viator))];
        if let Some(tour) = tour_id {
            params.push(("tour_id", tour));
        }

        tracked_url("https://www.viator.com/", &params)
    }

    /// Resolve a platform name from a generated suggestion to a tracked link
    pub fn link_for_platform(&self, platform: &str, destination: Option<&str>) -> Option<String> {
        let platform = platform.to_lowercase();

        if platform.contains("booking") {
            Some(self.booking_link(destination))
        } else if platform.contains("getyourguide") {
            Some(self.getyourguide_link(None))
        } else if platform.contains("viator") {
            Some(self.viator_link(None))
        } else {
            None
        }
    }

    /// Fill in empty link fields on generated affiliate suggestions.
    ///
    /// Suggestions for unknown platforms are kept as-is.
    pub fn complete_links(
        &self,
        suggestions: &[AffiliateSuggestion],
        destination: &str,
    ) -> Vec<AffiliateSuggestion> {
        suggestions
            .iter()
            .map(|suggestion| {
                let mut completed = suggestion.clone();
                if completed.link.is_empty() {
                    if let Some(link) = self.link_for_platform(&completed.platform, Some(destination)) {
                        completed.link = link;
                    }
                }
                completed
            })
            .collect()
    }
}

fn tracked_url(base: &str, params: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().copied())
        .finish();

    format!("{base}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_link_carries_tracking_and_destination() {
        let builder = AffiliateLinkBuilder::default();
        let link = builder.booking_link(Some("Cape Town"));

        assert!(link.starts_with("https://www.booking.com/index.html?"));
        assert!(link.contains("aid=7777439"));
        assert!(link.contains("city=Cape+Town"));
    }

    #[test]
    fn getyourguide_and_viator_links_carry_partner_ids() {
        let builder = AffiliateLinkBuilder::default();

        assert!(builder.getyourguide_link(None).contains("partner_id=OYSNX2E"));
        assert!(builder.viator_link(Some("t-42")).contains("pid=P00275646"));
        assert!(builder.viator_link(Some("t-42")).contains("tour_id=t-42"));
    }

    #[test]
    fn platform_names_resolve_to_networks() {
        let builder = AffiliateLinkBuilder::default();

        assert!(builder.link_for_platform("booking.com", None).is_some());
        assert!(builder.link_for_platform("GetYourGuide", None).is_some());
        assert!(builder.link_for_platform("viator", None).is_some());
        assert!(builder.link_for_platform("airbnb", None).is_none());
    }

    #[test]
    fn complete_links_fills_only_empty_links() {
        let builder = AffiliateLinkBuilder::default();
        let suggestions = vec![
            AffiliateSuggestion {
                category: "hotel".to_string(),
                name: "Singita Lebombo".to_string(),
                platform: "booking.com".to_string(),
                link: String::new(),
            },
            AffiliateSuggestion {
                category: "tour".to_string(),
                name: "Game Drive".to_string(),
                platform: "viator".to_string(),
                link: "https://example.com/already-set".to_string(),
            },
        ];

        let completed = builder.complete_links(&suggestions, "Kruger");

        assert!(completed[0].link.contains("aid=7777439"));
        assert!(completed[0].link.contains("city=Kruger"));
        assert_eq!(completed[1].link, "https://example.com/already-set");
    }

    #[test]
    fn tracking_codes_cover_all_networks() {
        let codes = AffiliateLinkBuilder::default().all_tracking_codes();

        assert_eq!(codes.len(), 3);
        assert_eq!(codes["booking"], "7777439");
        assert_eq!(codes["getyourguide"], "OYSNX2E");
        assert_eq!(codes["viator"], "P00275646");
    }
}

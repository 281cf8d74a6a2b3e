//! Catalog payloads as returned by `/services`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceTier {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub delivery_days: u32,
    pub revisions: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub service_id: String,
    pub creator_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub tiers: Vec<ServiceTier>,
    #[serde(default)]
    pub portfolio_urls: Vec<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
}

impl Service {
    /// Lowest tier price, shown as "from $X" on catalog cards.
    pub fn starting_price(&self) -> Option<f64> {
        self.tiers.iter().map(|tier| tier.price).reduce(f64::min)
    }

    pub fn tier(&self, name: &str) -> Option<&ServiceTier> {
        self.tiers.iter().find(|tier| tier.name == name)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceList {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::ServiceList;

    const PAYLOAD: &str = r#"{
        "services": [{
            "service_id": "svc_1",
            "creator_id": "user_2",
            "title": "YouTube edit",
            "description": "Fast cuts",
            "category": "video_editing",
            "platform": "youtube",
            "tiers": [
                {"name": "Premium", "description": "", "price": 250.0, "delivery_days": 7, "revisions": 5, "features": ["4K"]},
                {"name": "Starter", "description": "", "price": 49.5, "delivery_days": 3, "revisions": 1}
            ],
            "thumbnail_url": null,
            "rating": 4.8,
            "review_count": 12,
            "status": "active"
        }],
        "total": 1
    }"#;

    #[test]
    fn decodes_listing_and_finds_cheapest_tier() {
        let list: ServiceList = serde_json::from_str(PAYLOAD).expect("listing");
        let service = &list.services[0];

        assert_eq!(list.total, 1);
        assert_eq!(service.starting_price(), Some(49.5));
        assert_eq!(service.tier("Premium").map(|tier| tier.revisions), Some(5));
        assert!(service.tier("Gold").is_none());
        assert!(service.tiers[1].features.is_empty());
    }

    #[test]
    fn empty_listing_decodes_to_defaults() {
        let list: ServiceList = serde_json::from_str("{}").expect("listing");
        assert_eq!(list, ServiceList::default());
    }
}

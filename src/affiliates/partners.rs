//! Retailer routing: one [`Partner`] implementation per supported retailer.
//!
//! Decoration (appending a tracking tag) is part of the interface contract
//! with an identity default, so a missing credential is a no-op rather than
//! an error.

use serde::{Deserialize, Serialize};

use crate::affiliates::url::encode_component;
use crate::config::SiteConfig;

/// Identifier for a supported retailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerId {
    Amazon,
    Walmart,
    Target,
}

impl PartnerId {
    /// Default partner when neither the item nor the caller names one.
    pub const DEFAULT: PartnerId = PartnerId::Amazon;
}

/// A retailer with a search-URL template and optional link decoration.
pub trait Partner {
    fn id(&self) -> PartnerId;

    fn label(&self) -> &str;

    /// Search-results URL for a query, with the query percent-encoded.
    fn base_search(&self, query: &str) -> String;

    /// Append tracking/affiliate parameters to a finished URL. Identity by
    /// default.
    fn decorate(&self, url: String) -> String {
        url
    }
}

struct Amazon {
    tracking_tag: Option<String>,
}

impl Partner for Amazon {
    fn id(&self) -> PartnerId {
        PartnerId::Amazon
    }

    fn label(&self) -> &str {
        "Amazon"
    }

    fn base_search(&self, query: &str) -> String {
        format!("https://www.amazon.com/s?k={}", encode_component(query))
    }

    fn decorate(&self, url: String) -> String {
        match &self.tracking_tag {
            Some(tag) if !tag.is_empty() => {
                format!("{}&tag={}", url, encode_component(tag))
            }
            _ => url,
        }
    }
}

struct Walmart;

impl Partner for Walmart {
    fn id(&self) -> PartnerId {
        PartnerId::Walmart
    }

    fn label(&self) -> &str {
        "Walmart"
    }

    fn base_search(&self, query: &str) -> String {
        format!("https://www.walmart.com/search?q={}", encode_component(query))
    }
}

struct Target;

impl Partner for Target {
    fn id(&self) -> PartnerId {
        PartnerId::Target
    }

    fn label(&self) -> &str {
        "Target"
    }

    fn base_search(&self, query: &str) -> String {
        format!(
            "https://www.target.com/s?searchTerm={}",
            encode_component(query)
        )
    }
}

/// Static routing table, one entry per supported retailer.
///
/// Built once from configuration (the Amazon entry captures the tracking tag)
/// and shared by reference wherever outbound URLs are built.
pub struct PartnerTable {
    amazon: Amazon,
    walmart: Walmart,
    target: Target,
}

impl PartnerTable {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            amazon: Amazon {
                tracking_tag: config.affiliates.amazon_tag.clone(),
            },
            walmart: Walmart,
            target: Target,
        }
    }

    pub fn get(&self, id: PartnerId) -> &dyn Partner {
        match id {
            PartnerId::Amazon => &self.amazon,
            PartnerId::Walmart => &self.walmart,
            PartnerId::Target => &self.target,
        }
    }
}

impl Default for PartnerTable {
    /// Routing table with no tracking credentials configured.
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

//! Site configuration.
//!
//! Read from a TOML file. Every key is optional; anything left out falls back
//! to [`SiteConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GalleriaError, GalleriaResult};
use crate::types::{AffiliateProduct, CompactDeal};

/// Settings for the generated marketing site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown in the header and page titles
    pub title: String,
    pub tagline: String,
    /// Prefix for catalog license prices
    pub currency_symbol: String,
    /// Rendered with the full product promotion block
    pub deals: Vec<AffiliateProduct>,
    /// Rendered with the compact promotion block
    pub compact_deals: Vec<CompactDeal>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Northlight Gallery".to_string(),
            tagline: "Fine art travel photography, licensed for print and publication".to_string(),
            currency_symbol: "$".to_string(),
            deals: default_deals(),
            compact_deals: default_compact_deals(),
        }
    }
}

impl SiteConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> GalleriaResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&raw)?;
        tracing::debug!(
            path = %path.display(),
            deals = config.deals.len(),
            compact_deals = config.compact_deals.len(),
            "loaded site config"
        );
        Ok(config)
    }

    /// Parse and validate config text
    pub fn from_toml(raw: &str) -> GalleriaResult<Self> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GalleriaResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(GalleriaError::InvalidConfig(
                "currency_symbol must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_deals() -> Vec<AffiliateProduct> {
    vec![
        AffiliateProduct {
            title: "Sony Alpha 7 IV".to_string(),
            description: "The full-frame body behind most of the landscapes in this gallery.".to_string(),
            image: "/images/gear/sony-a7iv.jpg".to_string(),
            price: "$2,498".to_string(),
            features: vec![
                "33MP full-frame sensor".to_string(),
                "15+ stops of dynamic range".to_string(),
                "Weather-sealed magnesium body".to_string(),
            ],
            affiliate_url: "https://www.amazon.com/dp/B09JZT6YK5?tag=northlight-20".to_string(),
            badge: Some("Our Main Camera".to_string()),
        },
        AffiliateProduct {
            title: "Peak Design Travel Tripod".to_string(),
            description: "Packs down to the size of a water bottle and still holds a long lens steady.".to_string(),
            image: "/images/gear/peak-design-tripod.jpg".to_string(),
            price: "$379".to_string(),
            features: vec![
                "Carbon fiber legs".to_string(),
                "Folds to 39 cm".to_string(),
            ],
            affiliate_url: "https://www.amazon.com/dp/B07VHZ4Y8P?tag=northlight-20".to_string(),
            badge: None,
        },
    ]
}

fn default_compact_deals() -> Vec<CompactDeal> {
    vec![
        CompactDeal {
            title: "Lexar 128GB CFexpress".to_string(),
            image: "/images/gear/lexar-cfexpress.jpg".to_string(),
            price: "$169".to_string(),
            affiliate_url: "https://www.amazon.com/dp/B0BHJ8TQKX?tag=northlight-20".to_string(),
        },
        CompactDeal {
            title: "Lee Filters Big Stopper".to_string(),
            image: "/images/gear/lee-big-stopper.jpg".to_string(),
            price: "$189".to_string(),
            affiliate_url: "https://www.amazon.com/dp/B004N5H0VW?tag=northlight-20".to_string(),
        },
    ]
}

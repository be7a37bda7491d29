//! Affiliate product inputs for the promotion renderers.
//!
//! These are per-render inputs. They are deserializable so the site config
//! can list deals, but nothing stores them.

use serde::{Deserialize, Serialize};

/// Badge shown on a product promotion when none is supplied
pub const DEFAULT_BADGE: &str = "Recommended";

/// Full input for the product promotion block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateProduct {
    pub title: String,
    pub description: String,
    /// Image URI
    pub image: String,
    /// Free-form display string, e.g. "$1,299" or "from $49/mo"
    pub price: String,
    /// Rendered as a bulleted list, omitted when empty
    #[serde(default)]
    pub features: Vec<String>,
    pub affiliate_url: String,
    #[serde(default)]
    pub badge: Option<String>,
}

impl AffiliateProduct {
    /// The supplied badge, or `DEFAULT_BADGE` when none was given
    pub fn badge_label(&self) -> &str {
        self.badge.as_deref().unwrap_or(DEFAULT_BADGE)
    }

    /// Reduced input for the compact renderer
    pub fn to_compact(&self) -> CompactDeal {
        CompactDeal {
            title: self.title.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
            affiliate_url: self.affiliate_url.clone(),
        }
    }
}

/// Reduced input for the compact promotion block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactDeal {
    pub title: String,
    pub image: String,
    pub price: String,
    pub affiliate_url: String,
}

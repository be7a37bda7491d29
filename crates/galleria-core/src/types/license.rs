//! License tiers and per-image license prices.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GalleriaError;

/// Usage-rights category for a gallery image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseTier {
    /// Prints and non-commercial use
    Personal,
    /// Marketing, editorial and product use
    Commercial,
    /// Full buyout, image withdrawn from sale
    Exclusive,
}

impl LicenseTier {
    /// Every tier, cheapest first
    pub const ALL: [LicenseTier; 3] = [
        LicenseTier::Personal,
        LicenseTier::Commercial,
        LicenseTier::Exclusive,
    ];

    /// Identifier used by `LicenseType::id` and as the `LicensePrice` key
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseTier::Personal => "personal",
            LicenseTier::Commercial => "commercial",
            LicenseTier::Exclusive => "exclusive",
        }
    }
}

impl fmt::Display for LicenseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseTier {
    type Err = GalleriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(LicenseTier::Personal),
            "commercial" => Ok(LicenseTier::Commercial),
            "exclusive" => Ok(LicenseTier::Exclusive),
            _ => Err(GalleriaError::UnknownLicenseTier(s.to_string())),
        }
    }
}

/// Price of each usage tier for one image, in whole units of the site currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LicensePrice {
    pub personal: u32,
    pub commercial: u32,
    pub exclusive: u32,
}

impl LicensePrice {
    pub const fn new(personal: u32, commercial: u32, exclusive: u32) -> Self {
        Self {
            personal,
            commercial,
            exclusive,
        }
    }

    /// Price for a single tier
    pub fn price_for(&self, tier: LicenseTier) -> u32 {
        match tier {
            LicenseTier::Personal => self.personal,
            LicenseTier::Commercial => self.commercial,
            LicenseTier::Exclusive => self.exclusive,
        }
    }

    /// Whether personal <= commercial <= exclusive.
    ///
    /// The catalog follows this convention but nothing enforces it; the audit
    /// reports violations as warnings.
    pub fn is_ordered(&self) -> bool {
        self.personal <= self.commercial && self.commercial <= self.exclusive
    }
}

/// Descriptor of a license tier as shown on the licensing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseType {
    /// Matches a `LicenseTier::as_str` key
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Ordered list of what the tier grants
    pub features: &'static [&'static str],
}

impl LicenseType {
    /// The tier this descriptor names, if its id is a known key
    pub fn tier(&self) -> Option<LicenseTier> {
        self.id.parse().ok()
    }
}

/// Format a whole amount with a currency symbol and thousands separators.
///
/// `format_amount(1499, "$")` gives `"$1,499"`.
pub fn format_amount(amount: u32, symbol: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{symbol}{grouped}")
}

//! Gallery Image Type

use serde::Serialize;

use super::license::{LicensePrice, LicenseTier};

/// A photograph in the gallery catalog.
///
/// Records are static and read-only; consumers borrow them for a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    /// Unique within the catalog
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    /// Image URI
    pub image: &'static str,
    pub category: &'static str,
    /// Marks the image for highlighted display
    pub featured: bool,
    pub description: &'static str,
    pub license_price: LicensePrice,
    pub tags: &'static [&'static str],
}

impl GalleryImage {
    /// Price of one license tier for this image
    pub fn price_for(&self, tier: LicenseTier) -> u32 {
        self.license_price.price_for(tier)
    }

    /// Lowest tier price, shown as the "from" price on cards
    pub fn starting_price(&self) -> u32 {
        LicenseTier::ALL
            .iter()
            .map(|tier| self.price_for(*tier))
            .min()
            .unwrap_or(self.license_price.personal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GalleryImage {
        GalleryImage {
            id: "tide-pool",
            title: "Tide Pool",
            location: "Big Sur, California",
            image: "/images/tide-pool.jpg",
            category: "Coastal",
            featured: false,
            description: "Low tide at dawn.",
            license_price: LicensePrice::new(39, 179, 950),
            tags: &["ocean", "dawn"],
        }
    }

    #[test]
    fn test_price_for_delegates_to_license_price() {
        let image = sample();
        assert_eq!(image.price_for(LicenseTier::Commercial), 179);
    }

    #[test]
    fn test_starting_price_is_minimum() {
        let mut image = sample();
        assert_eq!(image.starting_price(), 39);

        image.license_price = LicensePrice::new(300, 120, 950);
        assert_eq!(image.starting_price(), 120);
    }

    #[test]
    fn test_serializes_nested_price() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "tide-pool");
        assert_eq!(json["license_price"]["exclusive"], 950);
        assert_eq!(json["tags"][1], "dawn");
    }
}

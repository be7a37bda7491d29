//! Static gallery catalog and license tier descriptors.
//!
//! Both tables are compile-time constants in display order. Nothing here
//! validates them; see [`crate::audit`] for the checks the site build runs.

use crate::error::{GalleriaError, GalleriaResult};
use crate::types::{GalleryImage, LicensePrice, LicenseTier, LicenseType};

/// Every photograph offered for licensing, in display order
pub static GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage {
        id: "aurora-over-kirkjufell",
        title: "Aurora over Kirkjufell",
        location: "Snaefellsnes, Iceland",
        image: "/images/gallery/aurora-over-kirkjufell.jpg",
        category: "Landscape",
        featured: true,
        description: "Green curtains of aurora settle over the mountain while the falls run half frozen in the foreground.",
        license_price: LicensePrice::new(49, 249, 1499),
        tags: &["aurora", "night", "iceland", "waterfall", "winter"],
    },
    GalleryImage {
        id: "lisbon-tram-28",
        title: "Tram 28 at Dusk",
        location: "Alfama, Lisbon",
        image: "/images/gallery/lisbon-tram-28.jpg",
        category: "Urban",
        featured: false,
        description: "The yellow tram climbs the narrow hill as the street lamps come on.",
        license_price: LicensePrice::new(29, 149, 899),
        tags: &["street", "transport", "portugal", "dusk"],
    },
    GalleryImage {
        id: "dolomites-first-light",
        title: "First Light on the Dolomites",
        location: "Tre Cime di Lavaredo, Italy",
        image: "/images/gallery/dolomites-first-light.jpg",
        category: "Landscape",
        featured: true,
        description: "Sunrise catches the three peaks above a sea of low cloud.",
        license_price: LicensePrice::new(49, 249, 1499),
        tags: &["mountains", "sunrise", "alps", "clouds"],
    },
    GalleryImage {
        id: "kyoto-bamboo-path",
        title: "Bamboo Path",
        location: "Arashiyama, Kyoto",
        image: "/images/gallery/kyoto-bamboo-path.jpg",
        category: "Nature",
        featured: false,
        description: "Morning light filters through the bamboo grove before the crowds arrive.",
        license_price: LicensePrice::new(39, 199, 1199),
        tags: &["forest", "japan", "green", "morning"],
    },
    GalleryImage {
        id: "sahara-dune-lines",
        title: "Dune Lines",
        location: "Erg Chebbi, Morocco",
        image: "/images/gallery/sahara-dune-lines.jpg",
        category: "Abstract",
        featured: false,
        description: "Wind-carved ridges cast long shadows in the late afternoon sun.",
        license_price: LicensePrice::new(35, 179, 999),
        tags: &["desert", "minimal", "sand", "shadow"],
    },
    GalleryImage {
        id: "manhattan-rain",
        title: "Rain on Fifth Avenue",
        location: "New York City",
        image: "/images/gallery/manhattan-rain.jpg",
        category: "Urban",
        featured: true,
        description: "Umbrellas and taxi lights blur together through a wet window.",
        license_price: LicensePrice::new(39, 199, 1299),
        tags: &["city", "rain", "night", "reflections"],
    },
    GalleryImage {
        id: "patagonia-guanaco",
        title: "Guanaco at Torres del Paine",
        location: "Patagonia, Chile",
        image: "/images/gallery/patagonia-guanaco.jpg",
        category: "Wildlife",
        featured: false,
        description: "A lone guanaco watches from the ridge with the granite towers behind.",
        license_price: LicensePrice::new(45, 229, 1399),
        tags: &["wildlife", "mountains", "chile", "animal"],
    },
    GalleryImage {
        id: "lofoten-fishing-village",
        title: "Reine in Winter",
        location: "Lofoten, Norway",
        image: "/images/gallery/lofoten-fishing-village.jpg",
        category: "Landscape",
        featured: false,
        description: "Red rorbuer cabins line the fjord under fresh snow.",
        license_price: LicensePrice::new(45, 229, 1399),
        tags: &["village", "snow", "norway", "fjord"],
    },
    GalleryImage {
        id: "venice-blue-hour",
        title: "Blue Hour on the Grand Canal",
        location: "Venice, Italy",
        image: "/images/gallery/venice-blue-hour.jpg",
        category: "Urban",
        featured: false,
        description: "Gondolas rest at their moorings as the palazzo windows light up.",
        license_price: LicensePrice::new(35, 179, 999),
        tags: &["canal", "blue hour", "italy", "architecture"],
    },
    GalleryImage {
        id: "serengeti-acacia",
        title: "Acacia at Sunset",
        location: "Serengeti, Tanzania",
        image: "/images/gallery/serengeti-acacia.jpg",
        category: "Nature",
        featured: false,
        description: "A single acacia stands against an orange sky on the open plain.",
        license_price: LicensePrice::new(39, 199, 1199),
        tags: &["savanna", "sunset", "africa", "tree"],
    },
];

/// License tier descriptors, cheapest first
pub static LICENSE_TYPES: &[LicenseType] = &[
    LicenseType {
        id: "personal",
        name: "Personal",
        description: "For prints, wallpapers and personal projects that are not sold or promoted.",
        features: &[
            "High-resolution download",
            "Prints up to 60x90 cm",
            "Personal websites and social media",
            "No commercial use",
        ],
    },
    LicenseType {
        id: "commercial",
        name: "Commercial",
        description: "For marketing, editorial and product use by one business.",
        features: &[
            "Full-resolution RAW-developed master",
            "Advertising, print and web campaigns",
            "Up to 500,000 reproductions",
            "Credit line optional",
        ],
    },
    LicenseType {
        id: "exclusive",
        name: "Exclusive",
        description: "Full buyout. The image is withdrawn from sale once licensed.",
        features: &[
            "Everything in Commercial",
            "Unlimited reproductions",
            "Image removed from the catalog",
            "Transfer of usage rights in writing",
        ],
    },
];

/// Look up a gallery image by its identifier
pub fn find_image(id: &str) -> GalleriaResult<&'static GalleryImage> {
    GALLERY_IMAGES
        .iter()
        .find(|image| image.id == id)
        .ok_or_else(|| GalleriaError::ImageNotFound(id.to_string()))
}

/// Descriptor for a license tier, if the table has one
pub fn find_license(tier: LicenseTier) -> Option<&'static LicenseType> {
    LICENSE_TYPES.iter().find(|license| license.id == tier.as_str())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_gallery_ids_are_unique() {
        let mut seen = HashSet::new();
        for image in GALLERY_IMAGES {
            assert!(seen.insert(image.id), "duplicate id {}", image.id);
        }
    }

    #[test]
    fn test_gallery_prices_are_ordered() {
        for image in GALLERY_IMAGES {
            assert!(
                image.license_price.is_ordered(),
                "{} breaks personal <= commercial <= exclusive: {:?}",
                image.id,
                image.license_price
            );
        }
    }

    #[test]
    fn test_license_ids_are_exactly_the_tiers() {
        let ids: HashSet<&str> = LICENSE_TYPES.iter().map(|l| l.id).collect();
        let expected: HashSet<&str> = LicenseTier::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(ids, expected);
        assert_eq!(LICENSE_TYPES.len(), 3);
    }

    #[test]
    fn test_license_table_in_tier_order() {
        let tiers: Vec<_> = LICENSE_TYPES.iter().filter_map(LicenseType::tier).collect();
        assert_eq!(tiers, LicenseTier::ALL.to_vec());
    }

    #[test]
    fn test_find_image() {
        let image = find_image("lisbon-tram-28").unwrap();
        assert_eq!(image.title, "Tram 28 at Dusk");
        assert_eq!(image.price_for(LicenseTier::Exclusive), 899);
    }

    #[test]
    fn test_find_image_missing() {
        let err = find_image("nope").unwrap_err();
        assert!(matches!(err, GalleriaError::ImageNotFound(ref id) if id == "nope"));
    }

    #[test]
    fn test_find_license() {
        for tier in LicenseTier::ALL {
            let license = find_license(tier).unwrap();
            assert_eq!(license.id, tier.as_str());
            assert!(!license.features.is_empty());
        }
    }

    #[test]
    fn test_catalog_has_featured_images() {
        assert!(GALLERY_IMAGES.iter().any(|image| image.featured));
    }
}

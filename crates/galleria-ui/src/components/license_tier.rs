//! License Tier Components
//!
//! Cards describing each license tier, and a table of per-image prices.

use dioxus::prelude::*;
use galleria_core::{GalleryImage, LicenseTier, LicenseType};

use super::price_tag::PriceTag;

/// Describes one license tier and what it grants
#[component]
pub fn LicenseTierCard(license: LicenseType) -> Element {
    rsx! {
        div { class: "license-card license-card--{license.id}",
            h3 { class: "license-card__name", "{license.name}" }
            p { class: "license-card__description", "{license.description}" }
            ul { class: "license-card__features",
                for (index, feature) in license.features.iter().enumerate() {
                    li { key: "{index}", "{feature}" }
                }
            }
        }
    }
}

/// One row per image, one price column per tier
///
/// Rows follow the order of `images`.
#[component]
pub fn LicensePriceTable(
    images: Vec<GalleryImage>,
    #[props(default = "$".to_string())]
    currency_symbol: String,
) -> Element {
    if images.is_empty() {
        return VNode::empty();
    }

    rsx! {
        table { class: "license-table",
            thead {
                tr {
                    th { "Image" }
                    for tier in LicenseTier::ALL {
                        th { key: "{tier}", class: "license-table__tier", "{tier}" }
                    }
                }
            }
            tbody {
                for image in images.iter() {
                    tr { key: "{image.id}",
                        td { class: "license-table__title", "{image.title}" }
                        for tier in LicenseTier::ALL {
                            td {
                                key: "{tier}",
                                class: "license-table__price",
                                PriceTag {
                                    amount: image.price_for(tier),
                                    currency_symbol: currency_symbol.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::{count, render_dom};
    use galleria_core::{GALLERY_IMAGES, LICENSE_TYPES};

    #[test]
    fn tier_card_lists_features_in_order() {
        let license = LICENSE_TYPES[1].clone();
        let html = render_dom(VirtualDom::new_with_props(
            LicenseTierCard,
            LicenseTierCardProps::builder().license(license.clone()).build(),
        ));

        assert!(html.contains("license-card--commercial"));
        assert!(html.contains(license.name));
        assert_eq!(count(&html, "<li"), license.features.len());
        let first = html.find(license.features[0]).unwrap();
        let last = html.find(license.features[license.features.len() - 1]).unwrap();
        assert!(first < last);
    }

    #[test]
    fn price_table_has_row_per_image() {
        let images = GALLERY_IMAGES[..3].to_vec();
        let html = render_dom(VirtualDom::new_with_props(
            LicensePriceTable,
            LicensePriceTableProps::builder()
                .images(images.clone())
                .currency_symbol("$".to_string())
                .build(),
        ));

        // Header row plus one per image
        assert_eq!(count(&html, "<tr"), images.len() + 1);
        assert_eq!(count(&html, "license-table__price"), images.len() * 3);
        assert_eq!(count(&html, "price-tag"), images.len() * 3);
        assert!(html.contains("$1,499"));
    }

    #[test]
    fn empty_price_table_renders_nothing() {
        let html = render_dom(VirtualDom::new_with_props(
            LicensePriceTable,
            LicensePriceTableProps::builder().images(Vec::new()).build(),
        ));
        assert!(!html.contains("<table"));
    }
}

//! Product Promotion Component
//!
//! Full affiliate product card: badge, image, copy, optional feature list,
//! price and an outbound call to action, followed by the disclosure sentence.

use dioxus::prelude::*;
use galleria_core::AffiliateProduct;

use super::disclosure::{AffiliateDisclosure, AFFILIATE_LINK_REL, AFFILIATE_LINK_TARGET};
use super::escape::escape_attr;

/// Renders one affiliate product as a promotion card
///
/// # Design Notes
///
/// - Badge falls back to "Recommended" when the product has none
/// - The feature list is left out entirely when there are no features
/// - Input is rendered as given; an empty title stays empty
/// - The disclosure sentence is always rendered, whatever the input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProductPromotion {
///         product: AffiliateProduct {
///             title: "Travel Tripod".to_string(),
///             description: "Folds to 40cm.".to_string(),
///             image: "/images/tripod.jpg".to_string(),
///             price: "$249".to_string(),
///             features: vec!["Carbon legs".to_string()],
///             affiliate_url: "https://shop.example.com/tripod".to_string(),
///             badge: None,
///         }
///     }
/// }
/// ```
#[component]
pub fn ProductPromotion(product: AffiliateProduct) -> Element {
    let badge = product.badge_label();
    let href = escape_attr(&product.affiliate_url);
    let src = escape_attr(&product.image);
    let alt = escape_attr(&product.title);

    rsx! {
        div { class: "product-promo",
            span { class: "product-promo__badge", "{badge}" }

            img {
                class: "product-promo__image",
                src: "{src}",
                alt: "{alt}",
            }

            div { class: "product-promo__body",
                h3 { class: "product-promo__title", "{product.title}" }
                p { class: "product-promo__description", "{product.description}" }

                if !product.features.is_empty() {
                    ul { class: "product-promo__features",
                        for (index, feature) in product.features.iter().enumerate() {
                            li { key: "{index}", "{feature}" }
                        }
                    }
                }

                div { class: "product-promo__footer",
                    span { class: "product-promo__price", "{product.price}" }
                    a {
                        class: "product-promo__cta",
                        href: "{href}",
                        target: AFFILIATE_LINK_TARGET,
                        rel: AFFILIATE_LINK_REL,
                        "Check Price"
                    }
                }

                AffiliateDisclosure {}
            }
        }
    }
}

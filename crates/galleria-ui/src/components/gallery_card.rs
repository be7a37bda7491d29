//! Gallery Card Component
//!
//! Displays one photograph from the catalog with its starting license price.

use dioxus::prelude::*;
use galleria_core::GalleryImage;

use super::escape::escape_attr;
use super::price_tag::PriceTag;

/// A single gallery photograph
///
/// Featured images get an extra modifier class and a "Featured" marker.
/// Ordering and filtering are up to the caller.
#[component]
pub fn GalleryCard(
    /// The photograph to show
    image: GalleryImage,
    /// Prefix for the "from" price
    #[props(default = "$".to_string())]
    currency_symbol: String,
) -> Element {
    let class = if image.featured {
        "gallery-card gallery-card--featured"
    } else {
        "gallery-card"
    };
    let anchor = escape_attr(image.id);
    let src = escape_attr(image.image);
    let alt = escape_attr(image.title);
    let from_price = image.starting_price();

    rsx! {
        article { class: "{class}", id: "{anchor}",
            div { class: "gallery-card__frame",
                img {
                    class: "gallery-card__img",
                    src: "{src}",
                    alt: "{alt}",
                }
                if image.featured {
                    span { class: "gallery-card__featured", "Featured" }
                }
            }
            div { class: "gallery-card__content",
                span { class: "gallery-card__category", "{image.category}" }
                h3 { class: "gallery-card__title", "{image.title}" }
                p { class: "gallery-card__location", "{image.location}" }
                p { class: "gallery-card__description", "{image.description}" }
                if !image.tags.is_empty() {
                    ul { class: "gallery-card__tags",
                        for tag in image.tags.iter() {
                            li { key: "{tag}", class: "gallery-card__tag", "{tag}" }
                        }
                    }
                }
                p { class: "gallery-card__price",
                    PriceTag {
                        amount: from_price,
                        currency_symbol: currency_symbol.clone(),
                        prefix: "from".to_string(),
                    }
                }
            }
        }
    }
}

/// Grid wrapper for gallery cards
#[component]
pub fn GalleryGrid(children: Element) -> Element {
    rsx! {
        section { class: "gallery-grid",
            {children}
        }
    }
}

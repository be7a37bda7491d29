//! Gallery page - every photograph in catalog order.

use dioxus::prelude::*;
use galleria_core::GALLERY_IMAGES;
use galleria_ui::{GalleryCard, GalleryGrid};

/// Gallery page body.
///
/// Featured images keep their catalog position; the card styling makes them
/// span two columns.
#[component]
pub fn GalleryPage(currency_symbol: String) -> Element {
    let count = GALLERY_IMAGES.len();

    rsx! {
        section { class: "page-intro",
            h1 { class: "page-title", "The Collection" }
            p { class: "page-lede",
                "{count} photographs, each available under personal, commercial or exclusive license."
            }
        }
        GalleryGrid {
            for image in GALLERY_IMAGES.iter() {
                GalleryCard {
                    key: "{image.id}",
                    image: image.clone(),
                    currency_symbol: currency_symbol.clone(),
                }
            }
        }
    }
}

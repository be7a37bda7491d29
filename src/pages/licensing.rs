//! Licensing page - what each tier grants and what it costs per image.

use dioxus::prelude::*;
use galleria_core::{GALLERY_IMAGES, LICENSE_TYPES};
use galleria_ui::{LicensePriceTable, LicenseTierCard};

#[component]
pub fn LicensingPage(currency_symbol: String) -> Element {
    rsx! {
        section { class: "page-intro",
            h1 { class: "page-title", "Licensing" }
            p { class: "page-lede",
                "Every photograph is offered under three tiers. Prices are per image."
            }
        }
        div { class: "license-tiers",
            for license in LICENSE_TYPES.iter() {
                LicenseTierCard { key: "{license.id}", license: license.clone() }
            }
        }
        h2 { class: "section-title", "Prices" }
        LicensePriceTable {
            images: GALLERY_IMAGES.to_vec(),
            currency_symbol: currency_symbol,
        }
    }
}

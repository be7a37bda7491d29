//! Deals page - the gear behind the photographs, with affiliate links.
//!
//! Full promotions carry their own disclosure. The compact grid shares one
//! disclosure rendered above it.

use dioxus::prelude::*;
use galleria_core::{AffiliateProduct, CompactDeal};
use galleria_ui::{AffiliateDisclosure, CompactPromotion, ProductPromotion};

#[component]
pub fn DealsPage(deals: Vec<AffiliateProduct>, compact_deals: Vec<CompactDeal>) -> Element {
    rsx! {
        section { class: "page-intro",
            h1 { class: "page-title", "Gear & Deals" }
            p { class: "page-lede", "The kit we carry on every trip." }
        }

        if !deals.is_empty() {
            div { class: "deals-list",
                for (index, product) in deals.iter().enumerate() {
                    ProductPromotion { key: "{index}", product: product.clone() }
                }
            }
        }

        if !compact_deals.is_empty() {
            section { class: "deals-compact",
                h2 { class: "section-title", "Also in the bag" }
                AffiliateDisclosure {}
                div { class: "deals-compact__grid",
                    for (index, deal) in compact_deals.iter().enumerate() {
                        CompactPromotion { key: "{index}", deal: deal.clone() }
                    }
                }
            }
        }
    }
}

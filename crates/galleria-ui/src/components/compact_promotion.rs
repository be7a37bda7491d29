//! Compact Promotion Component
//!
//! A single clickable block for sidebars and grids. The whole block is the
//! outbound link. No disclosure sentence is rendered here; pages that use
//! compact blocks show [`AffiliateDisclosure`](super::AffiliateDisclosure)
//! once for the group.

use dioxus::prelude::*;
use galleria_core::CompactDeal;

use super::disclosure::{AFFILIATE_LINK_REL, AFFILIATE_LINK_TARGET};
use super::escape::escape_attr;

#[component]
pub fn CompactPromotion(deal: CompactDeal) -> Element {
    let href = escape_attr(&deal.affiliate_url);
    let src = escape_attr(&deal.image);
    let alt = escape_attr(&deal.title);

    rsx! {
        a {
            class: "compact-promo",
            href: "{href}",
            target: AFFILIATE_LINK_TARGET,
            rel: AFFILIATE_LINK_REL,

            img {
                class: "compact-promo__image",
                src: "{src}",
                alt: "{alt}",
            }
            div { class: "compact-promo__body",
                h4 { class: "compact-promo__title", "{deal.title}" }
                span { class: "compact-promo__price", "{deal.price}" }
                span { class: "compact-promo__cta", "View Deal \u{2192}" }
            }
        }
    }
}

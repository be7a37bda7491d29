//! Affiliate Disclosure
//!
//! Shared link marking and the fixed disclosure sentence for affiliate blocks.

use dioxus::prelude::*;

/// Disclosure sentence rendered with every full product promotion
pub const AFFILIATE_DISCLOSURE: &str =
    "This post contains affiliate links. We may earn a commission at no extra cost to you.";

/// `rel` value for outbound affiliate links.
///
/// `noopener noreferrer` keeps the new tab from reaching back into this page;
/// `sponsored` tells crawlers the destination is paid and unendorsed.
pub const AFFILIATE_LINK_REL: &str = "noopener noreferrer sponsored";

/// `target` value for outbound affiliate links
pub const AFFILIATE_LINK_TARGET: &str = "_blank";

/// The disclosure sentence as a small paragraph
#[component]
pub fn AffiliateDisclosure() -> Element {
    rsx! {
        p { class: "affiliate-disclosure", "{AFFILIATE_DISCLOSURE}" }
    }
}

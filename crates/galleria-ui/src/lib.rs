//! Galleria UI Components
//!
//! Dioxus components for the Northlight marketing site. Everything here is a
//! pure function of its props: no hooks, no state, no side effects. The same
//! components render in a desktop webview or to static HTML via SSR.
//!
//! ## Affiliate blocks
//!
//! - [`ProductPromotion`]: full product card with badge, feature list and the
//!   affiliate disclosure sentence
//! - [`CompactPromotion`]: the whole block is one outbound link, no disclosure
//!
//! Both mark the outbound link with `target="_blank"` and
//! `rel="noopener noreferrer sponsored"`.
//!
//! ## Catalog blocks
//!
//! - [`GalleryCard`] for a single photograph
//! - [`LicenseTierCard`] and [`LicensePriceTable`] for the licensing page

pub mod components;

pub use components::*;

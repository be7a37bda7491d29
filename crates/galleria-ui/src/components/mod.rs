//! Reusable UI components for the gallery and affiliate blocks

mod compact_promotion;
mod disclosure;
mod escape;
mod gallery_card;
mod license_tier;
mod price_tag;
mod product_promotion;

#[cfg(test)]
pub(crate) mod test_util;

pub use compact_promotion::*;
pub use disclosure::*;
pub use escape::*;
pub use gallery_card::*;
pub use license_tier::*;
pub use price_tag::*;
pub use product_promotion::*;

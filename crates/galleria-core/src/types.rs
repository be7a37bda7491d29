//! Core types for Galleria

pub mod affiliate;
pub mod gallery;
pub mod license;

pub use affiliate::{AffiliateProduct, CompactDeal, DEFAULT_BADGE};
pub use gallery::GalleryImage;
pub use license::{format_amount, LicensePrice, LicenseTier, LicenseType};

//! Galleria Core Library
//!
//! Data model and static catalog behind the Northlight marketing site.
//!
//! ## Overview
//!
//! Two independent pieces live here:
//!
//! - **Catalog**: the gallery of licensable photographs and the three license
//!   tiers they are sold under, as immutable static tables.
//! - **Affiliate inputs**: the product records the promotion components in
//!   `galleria-ui` render. They are per-render values, never stored.
//!
//! Around them sit the site configuration, a catalog audit and the error type
//! shared by the binaries.
//!
//! ## Quick Start
//!
//! ```
//! use galleria_core::{audit_catalog, find_image, LicenseTier, GALLERY_IMAGES, LICENSE_TYPES};
//!
//! let image = find_image("lisbon-tram-28")?;
//! assert_eq!(image.price_for(LicenseTier::Commercial), 149);
//!
//! let report = audit_catalog(GALLERY_IMAGES, LICENSE_TYPES);
//! assert!(!report.has_errors());
//! # Ok::<(), galleria_core::GalleriaError>(())
//! ```

pub mod audit;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

// Re-exports
pub use audit::{audit_catalog, AuditReport, Finding, Severity};
pub use catalog::{find_image, find_license, GALLERY_IMAGES, LICENSE_TYPES};
pub use config::SiteConfig;
pub use error::{GalleriaError, GalleriaResult};
pub use types::*;

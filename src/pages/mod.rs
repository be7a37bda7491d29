//! Page bodies for the Northlight site.

mod deals;
mod gallery;
mod licensing;

pub use deals::DealsPage;
pub use gallery::GalleryPage;
pub use licensing::LicensingPage;

//! Theme for the generated site.

mod styles;

pub use styles::GLOBAL_STYLES;

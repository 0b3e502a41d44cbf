//! Build outputs derived from the page registry.

pub mod manifest;
pub mod sitemap;

pub use manifest::build_manifest;
pub use sitemap::build_sitemap;

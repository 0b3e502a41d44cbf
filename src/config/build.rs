//! `[build]` section configuration.
//!
//! Controls where `folio build` writes its outputs and which ones it writes.

use super::defaults;
use educe::Educe;
use serde::Deserialize;
use std::path::PathBuf;

/// `[build]` section in folio.toml.
///
/// # Example
/// ```toml
/// [build]
/// output = "dist"
/// minify = true
/// sitemap = true
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Output directory, relative to the project root.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Minify rendered partials and the sitemap.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub minify: bool,

    /// Write `sitemap.xml` (requires `[base].url`).
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub sitemap: bool,
}

impl BuildConfig {
    /// Path of the JSON metadata export.
    pub fn manifest_path(&self) -> PathBuf {
        self.output.join(defaults::build::manifest())
    }

    /// Directory holding one rendered partial per page.
    pub fn partials_dir(&self) -> PathBuf {
        self.output.join(defaults::build::partials())
    }

    /// Path of the generated sitemap.
    pub fn sitemap_path(&self) -> PathBuf {
        self.output.join(defaults::build::sitemap_path())
    }
}

//! Build orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── write_partials() ──► <output>/partials/<page>.html  (parallel)
//!     ├── build_manifest() ──► <output>/pages.json
//!     └── build_sitemap()  ──► <output>/sitemap.xml           (if enabled)
//! ```

use crate::{
    config::SiteConfig,
    generator::{build_manifest, build_sitemap},
    log,
    pages::PageId,
    render::{PageView, render_partial},
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::PathBuf};

/// Write every build output for the static pages.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    if let Some(config_path) = &config.config_path {
        log!("build"; "using {}", config_path.display());
    }

    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let (partials, manifest) = rayon::join(|| write_partials(config), || build_manifest(config));
    let written = partials?;
    manifest?;
    build_sitemap(config)?;

    log!("build"; "{} partials written to {}", written.len(), output.display());
    Ok(())
}

/// Render one partial per page into `<output>/partials/`.
///
/// Returns the written paths in page declaration order.
pub fn write_partials(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let dir = config.build.partials_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create partials directory {}", dir.display()))?;

    PageId::ALL
        .par_iter()
        .map(|&id| -> Result<PathBuf> {
            let html = render_partial(&PageView::new(id), config)
                .with_context(|| format!("Failed to render page `{id}`"))?;
            let path = dir.join(format!("{}.html", id.key()));
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = dir.join("dist");
        config
    }

    #[test]
    fn test_write_partials_one_per_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let written = write_partials(&config).unwrap();
        assert_eq!(written.len(), PageId::ALL.len());
        for (path, id) in written.iter().zip(PageId::ALL) {
            assert!(path.ends_with(format!("partials/{}.html", id.key())));
            assert!(path.is_file());
        }
    }

    #[test]
    fn test_build_site_without_sitemap() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        build_site(&config).unwrap();
        assert!(config.build.manifest_path().is_file());
        assert!(config.build.partials_dir().join("home.html").is_file());
        assert!(!config.build.sitemap_path().exists());
    }

    #[test]
    fn test_build_site_with_sitemap() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.base.url = Some("https://example.com".into());
        config.build.sitemap = true;

        build_site(&config).unwrap();
        let sitemap = fs::read_to_string(config.build.sitemap_path()).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/projects</loc>"));
    }

    #[test]
    fn test_build_site_output_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dist");
        fs::write(&output, "").unwrap();
        let config = config_in(dir.path());

        assert!(build_site(&config).is_err());
    }
}

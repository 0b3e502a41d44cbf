//! `pages.json` generation.
//!
//! Exports the registry for templates that cannot link against this crate.
//!
//! ```json
//! {
//!   "language": "en",
//!   "pages": {
//!     "home": { "route": "/", "title": "Home", "description": "..." },
//!     "contact": { "route": "/contact", "title": "...", "description": "...", "heading": "..." }
//!   }
//! }
//! ```

use crate::{
    config::SiteConfig,
    log,
    pages::{self, PageId, PageMeta},
};
use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::fs;

/// Write `pages.json` into the output directory.
pub fn build_manifest(config: &SiteConfig) -> Result<()> {
    let path = config.build.manifest_path();
    let json = to_json(&config.base.language)?;

    fs::write(&path, json)
        .with_context(|| format!("Failed to write page manifest to {}", path.display()))?;

    log!("build"; "{}", path.display());
    Ok(())
}

/// Serialize the whole registry as pretty-printed JSON.
pub fn to_json(language: &str) -> Result<String> {
    let manifest = Manifest {
        language,
        pages: Entries,
    };
    serde_json::to_string_pretty(&manifest).context("Failed to serialize page manifest")
}

#[derive(Serialize)]
struct Manifest<'a> {
    language: &'a str,
    pages: Entries,
}

/// Every registry entry, keyed by page id in declaration order.
struct Entries;

impl Serialize for Entries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(pages::iter().map(|(id, meta)| (id, Entry::new(id, meta))))
    }
}

#[derive(Serialize)]
struct Entry {
    route: &'static str,
    #[serde(flatten)]
    meta: &'static PageMeta,
}

impl Entry {
    fn new(id: PageId, meta: &'static PageMeta) -> Self {
        Self {
            route: id.route(),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn manifest() -> Value {
        serde_json::from_str(&to_json("en").unwrap()).unwrap()
    }

    #[test]
    fn test_manifest_lists_every_page() {
        let json = manifest();
        let pages = json["pages"].as_object().unwrap();

        assert_eq!(json["language"], "en");
        assert_eq!(pages.len(), PageId::ALL.len());
        for id in PageId::ALL {
            assert_eq!(pages[id.key()]["route"], id.route());
            assert_eq!(pages[id.key()]["title"], id.meta().title);
        }
    }

    #[test]
    fn test_manifest_omits_absent_fields() {
        let json = manifest();

        assert!(json["pages"]["home"].get("heading").is_none());
        assert!(json["pages"]["home"].get("intro").is_none());
        assert_eq!(json["pages"]["contact"]["heading"], "Reach out to me directly:");
        assert!(json["pages"]["contact"].get("intro").is_none());
    }

    #[test]
    fn test_manifest_keeps_declaration_order() {
        let raw = to_json("en").unwrap();
        let positions: Vec<usize> = PageId::KEYS
            .iter()
            .map(|key| raw.find(&format!("\"{key}\": {{")).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_build_manifest_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();

        build_manifest(&config).unwrap();
        let written = fs::read_to_string(config.build.manifest_path()).unwrap();
        assert!(written.contains("\"projects\""));
    }
}

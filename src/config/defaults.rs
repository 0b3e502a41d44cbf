//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

/// Config file looked up in the project root when `-C` is not given.
pub const CONFIG_FILE: &str = "folio.toml";

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn manifest() -> PathBuf {
        "pages.json".into()
    }

    pub fn partials() -> PathBuf {
        "partials".into()
    }

    pub fn sitemap_path() -> PathBuf {
        "sitemap.xml".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        assert_eq!(CONFIG_FILE, "folio.toml");
        assert!(!r#false());
        assert_eq!(base::url(), None);
        assert_eq!(base::language(), "en");
        assert_eq!(build::output(), PathBuf::from("dist"));
        assert_eq!(build::manifest(), PathBuf::from("pages.json"));
        assert_eq!(build::partials(), PathBuf::from("partials"));
        assert_eq!(build::sitemap_path(), PathBuf::from("sitemap.xml"));
    }
}

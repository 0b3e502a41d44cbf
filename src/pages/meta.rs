//! Metadata record for a single static page.

use serde::Serialize;

/// Display and SEO metadata of one static page.
///
/// `title` and `description` are always present. `heading` and `intro` are
/// optional; see [`crate::render::PageView`] for how consumers fall back when
/// they are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Page title (browser tab and `<title>`).
    pub title: &'static str,

    /// Page description (`<meta name="description">`).
    pub description: &'static str,

    /// Primary heading, defaults to `title` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,

    /// Lead-in text displayed below the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<&'static str>,
}

impl PageMeta {
    /// Record with only the required fields set.
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            heading: None,
            intro: None,
        }
    }

    pub const fn with_heading(mut self, heading: &'static str) -> Self {
        self.heading = Some(heading);
        self
    }

    pub const fn with_intro(mut self, intro: &'static str) -> Self {
        self.intro = Some(intro);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaves_optional_fields_empty() {
        let meta = PageMeta::new("Title", "Description");
        assert_eq!(meta.title, "Title");
        assert_eq!(meta.description, "Description");
        assert_eq!(meta.heading, None);
        assert_eq!(meta.intro, None);
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let meta = PageMeta::new("T", "D").with_heading("H").with_intro("I");
        assert_eq!(meta.heading, Some("H"));
        assert_eq!(meta.intro, Some("I"));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let meta = PageMeta::new("T", "D").with_heading("H");
        let json = serde_json::to_value(meta).unwrap();

        assert_eq!(json["title"], "T");
        assert_eq!(json["heading"], "H");
        assert!(json.get("intro").is_none());
    }
}

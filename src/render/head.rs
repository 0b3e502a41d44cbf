use anyhow::Result;

use super::PageView;
use super::common::{XmlWriter, write_empty_elem, write_text_element};

/// Write the SEO elements of a page's `<head>`.
///
/// Emits `<title>` and `<meta name="description">`, plus a canonical link
/// when `base_url` is known.
pub fn write_head(writer: &mut XmlWriter, view: &PageView, base_url: Option<&str>) -> Result<()> {
    write_text_element(writer, "title", view.title())?;
    write_empty_elem(
        writer,
        "meta",
        &[("name", "description"), ("content", view.description())],
    )?;

    if let Some(base_url) = base_url {
        let href = view.id().url(base_url);
        write_empty_elem(writer, "link", &[("rel", "canonical"), ("href", &href)])?;
    }

    Ok(())
}

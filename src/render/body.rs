use anyhow::Result;

use super::PageView;
use super::common::{XmlWriter, write_text_element, write_text_element_with_attrs};

/// CSS class of the intro paragraph.
pub const INTRO_CLASS: &str = "intro";

/// Write the page heading followed by the intro paragraph, if any.
pub fn write_intro_block(writer: &mut XmlWriter, view: &PageView) -> Result<()> {
    write_text_element(writer, "h1", view.heading())?;
    if let Some(intro) = view.intro() {
        write_text_element_with_attrs(writer, "p", &[("class", INTRO_CLASS)], intro)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageId;
    use crate::render::common::{into_string, new_writer};

    fn block_of(id: PageId) -> String {
        let mut writer = new_writer();
        write_intro_block(&mut writer, &PageView::new(id)).unwrap();
        into_string(writer)
    }

    #[test]
    fn test_home_heading_falls_back_to_title() {
        assert_eq!(block_of(PageId::Home), "<h1>Home</h1>\n");
    }

    #[test]
    fn test_contact_has_no_intro() {
        let block = block_of(PageId::Contact);
        assert_eq!(block, "<h1>Reach out to me directly:</h1>\n");
        assert!(!block.contains("<p"));
    }

    #[test]
    fn test_about_heading_and_intro() {
        let block = block_of(PageId::About);
        assert!(block.starts_with("<h1>About</h1>\n"));
        assert!(block.contains(r#"<p class="intro">Solving enterprise-scale problems"#));
    }
}

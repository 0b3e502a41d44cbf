//! Projection of page metadata into HTML.
//!
//! This is the consumer side of the registry: it applies the fallback rules
//! for optional fields and writes the elements a page template embeds.
//!
//! ```text
//! pages::get(id) ──► PageView ──┬──► write_head()         <title>, <meta>, <link rel="canonical">
//!                               └──► write_intro_block()  <h1>, <p class="intro">
//! ```

mod body;
mod common;
mod head;

pub use body::{INTRO_CLASS, write_intro_block};
pub use common::{XmlWriter, into_string, new_writer};
pub use head::write_head;

use crate::{
    config::SiteConfig,
    minify::{MinifyType, minify},
    pages::{self, PageId, PageMeta},
};
use anyhow::Result;

/// Page metadata with the display fallbacks applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    id: PageId,
    meta: &'static PageMeta,
}

impl PageView {
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            meta: pages::get(id),
        }
    }

    pub const fn id(&self) -> PageId {
        self.id
    }

    pub const fn meta(&self) -> &'static PageMeta {
        self.meta
    }

    pub const fn title(&self) -> &'static str {
        self.meta.title
    }

    pub const fn description(&self) -> &'static str {
        self.meta.description
    }

    /// Rendered heading: the explicit heading, or the title when absent.
    pub fn heading(&self) -> &'static str {
        self.meta.heading.unwrap_or(self.meta.title)
    }

    /// Intro text, `None` when the page renders no intro block.
    pub const fn intro(&self) -> Option<&'static str> {
        self.meta.intro
    }
}

impl From<PageId> for PageView {
    fn from(id: PageId) -> Self {
        Self::new(id)
    }
}

/// Render the head elements and heading block of a page as one HTML partial.
///
/// The canonical link is included when `[base].url` is configured; output is
/// minified when `[build].minify` is enabled.
pub fn render_partial(view: &PageView, config: &SiteConfig) -> Result<String> {
    let mut writer = new_writer();
    write_head(&mut writer, view, config.base_url())?;
    write_intro_block(&mut writer, view)?;

    let html = into_string(writer);
    let html = minify(MinifyType::Html(html.as_bytes()), config);
    Ok(String::from_utf8_lossy(&html).into_owned())
}

//! Static page metadata registry.
//!
//! Single source of truth for the titles, descriptions and headings of every
//! static page the site serves. Dynamic pages (individual projects, articles)
//! derive their metadata from their own content and are not listed here.
//!
//! # Usage
//!
//! ```
//! use folio::pages::{self, PageId};
//!
//! let meta = pages::get(PageId::Projects);
//! assert_eq!(meta.title, "Projects - Case Studies");
//!
//! // String keys go through validation.
//! assert!(pages::lookup("nonexistent").is_err());
//! ```

mod error;
mod meta;

pub use error::PageError;
pub use meta::PageMeta;

use serde::Serialize;
use std::{fmt, str::FromStr};

// ============================================================================
// Page Identifiers
// ============================================================================

/// Identifier of a static page.
///
/// The set is closed: every variant has exactly one registry entry, and
/// string keys outside this set are rejected by [`PageId::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Home,
    Projects,
    About,
    Contact,
}

impl PageId {
    /// Every page, in declaration order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Projects, Self::About, Self::Contact];

    /// Keys of every page, in declaration order.
    pub const KEYS: [&'static str; 4] = ["home", "projects", "about", "contact"];

    /// Stable lowercase key (`home`, `projects`, ...).
    pub const fn key(self) -> &'static str {
        Self::KEYS[self as usize]
    }

    /// URL path the page is served at.
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Projects => "/projects",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    /// Absolute URL of the page under `base_url`.
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.route())
    }

    /// Metadata record of this page.
    #[inline]
    pub fn meta(self) -> &'static PageMeta {
        get(self)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PageId {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| PageError::UnknownPageIdentifier(s.to_owned()))
    }
}

// ============================================================================
// Registry
// ============================================================================

static HOME: PageMeta = PageMeta::new(
    "Home",
    "Engineering leader focused on turning complex technical problems into maintainable solutions and high-efficiency workflows.",
);

static PROJECTS: PageMeta = PageMeta::new(
    "Projects - Case Studies",
    "Lead Frontend Engineer case studies focusing on solving enterprise-scale bottlenecks, building internal tooling, and streamlining high-traffic workflows.",
)
.with_heading("Projects")
.with_intro(
    "A look into some of the specific problems I’ve solved and the tools I’ve built to help engineering teams move faster. These case studies focus on the practical trade-offs and technical decisions required to turn complex legacy issues into maintainable, high-impact solutions.",
);

static ABOUT: PageMeta = PageMeta::new("About - About Me", "A little bit about me.")
    .with_heading("About")
    .with_intro(
        "Solving enterprise-scale problems by building reliable tools and workflows that help engineering teams move faster.",
    );

static CONTACT: PageMeta = PageMeta::new(
    "Contact - Get in Touch",
    "Get in touch to discuss opportunities, collaborations, or technical challenges.",
)
.with_heading("Reach out to me directly:");

/// Metadata for a page.
///
/// Total over [`PageId`], so there is no failure path.
pub fn get(id: PageId) -> &'static PageMeta {
    match id {
        PageId::Home => &HOME,
        PageId::Projects => &PROJECTS,
        PageId::About => &ABOUT,
        PageId::Contact => &CONTACT,
    }
}

/// Metadata for a page named by its string key.
///
/// Fails with [`PageError::UnknownPageIdentifier`] instead of returning an
/// empty record, so a page never ships without SEO metadata.
pub fn lookup(key: &str) -> Result<&'static PageMeta, PageError> {
    key.parse::<PageId>().map(get)
}

/// Iterate over every `(id, metadata)` pair in declaration order.
pub fn iter() -> impl Iterator<Item = (PageId, &'static PageMeta)> {
    PageId::ALL.into_iter().map(|id| (id, get(id)))
}

// ============================================================================
// Tests
// ============================================================================

//! Folio - static page metadata for a portfolio site.
//!
//! The [`pages`] registry is the single source of truth for the SEO title,
//! description, heading and intro of every static page. [`render`] applies
//! the display fallbacks and writes the matching HTML elements, and
//! [`build`] exports everything a template pipeline consumes.

pub mod build;
pub mod cli;
pub mod config;
pub mod generator;
pub mod logger;
pub mod minify;
pub mod pages;
pub mod render;

pub use pages::{PageError, PageId, PageMeta};

//! Errors raised while loading or validating `folio.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid folio.toml")]
    Toml(#[from] toml::de::Error),

    #[error("[base.url] `{0}` must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("[base.url] is required for sitemap generation")]
    SitemapWithoutBaseUrl,

    #[error("[build.output] `{}` is a file, expected a directory", .0.display())]
    OutputIsFile(PathBuf),
}

//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site-wide settings (base url, language)          |
//! | `[build]`   | Output directory, minification, sitemap          |
//!
//! Page titles and descriptions are not configurable here; they live in the
//! compiled-in registry ([`crate::pages`]).
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://example.com"
//!
//! [build]
//! output = "dist"
//! minify = true
//! sitemap = true
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

pub use base::BaseConfig;
pub use build::BuildConfig;
pub use error::ConfigError;

use crate::cli::{Cli, Commands};
use educe::Educe;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path of the config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Site-wide settings
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = Some(Self::normalize_path(path));
        Ok(config)
    }

    /// Load the config file from the CLI root, then apply CLI overrides.
    ///
    /// Only a missing default `folio.toml` falls back to defaults; a file
    /// named with `-C` must exist.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);
        let is_default_name = cli.config == Path::new(defaults::CONFIG_FILE);

        let mut config = if config_path.exists() || !is_default_name {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = Self::normalize_path(cli.root.as_deref().unwrap_or(Path::new("./")));

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.build.output, build_args.output.as_ref());
            Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
            Self::update_option(&mut self.build.sitemap, build_args.sitemap.as_ref());
            if let Some(url) = &build_args.base_url {
                self.base.url = Some(url.clone());
            }
        }

        self.build.output = Self::resolve_output(&root, &self.build.output);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Expand `~` and anchor relative output paths at the project root.
    fn resolve_output(root: &Path, output: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(&output.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);
        if path.is_relative() {
            Self::normalize_path(&root.join(path))
        } else {
            Self::normalize_path(&path)
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Base URL without a trailing slash, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.base.url.as_deref().map(|url| url.trim_end_matches('/'))
    }

    /// Validate configuration before rendering or building
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base.url
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidBaseUrl(base_url.clone()));
        }

        if self.build.sitemap && self.base.url.is_none() {
            return Err(ConfigError::SitemapWithoutBaseUrl);
        }

        if self.build.output.is_file() {
            return Err(ConfigError::OutputIsFile(self.build.output.clone()));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

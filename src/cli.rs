//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::config::defaults;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Static page metadata registry CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = defaults::CONFIG_FILE)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the Build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minify the rendered partials and sitemap
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// enable sitemap generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override base URL for the site.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    ///
    /// Example:
    ///   folio build --sitemap --base-url "https://example.com"
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every static page with its route and title
    List,

    /// Print the metadata record of one page
    Show {
        /// Page identifier (home, projects, about, contact)
        page: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the rendered head and heading block of one page
    Render {
        /// Page identifier (home, projects, about, contact)
        page: String,
    },

    /// Write pages.json, rendered partials and (optionally) sitemap.xml
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

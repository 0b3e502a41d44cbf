//! Folio - static page metadata registry CLI.

use anyhow::{Context, Result};
use clap::Parser;
use folio::{
    build::build_site,
    cli::{Cli, Commands},
    config::SiteConfig,
    pages::{self, PageId},
    render::{PageView, render_partial},
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::List => {
            list_pages();
            Ok(())
        }
        Commands::Show { page, json } => show_page(page, *json),
        Commands::Render { page } => {
            config.validate()?;
            let id: PageId = page.parse()?;
            print!("{}", render_partial(&PageView::new(id), &config)?);
            Ok(())
        }
        Commands::Build { .. } => {
            config.validate()?;
            build_site(&config)
        }
    }
}

/// Print every page with its route and title.
fn list_pages() {
    for (id, meta) in pages::iter() {
        println!("{:<10} {:<10} {}", id.key(), id.route(), meta.title);
    }
}

/// Print one page record, as text or JSON.
fn show_page(page: &str, json: bool) -> Result<()> {
    let meta = pages::lookup(page)?;

    if json {
        let out = serde_json::to_string_pretty(meta).context("Failed to serialize page")?;
        println!("{out}");
        return Ok(());
    }

    println!("title:       {}", meta.title);
    println!("description: {}", meta.description);
    if let Some(heading) = meta.heading {
        println!("heading:     {heading}");
    }
    if let Some(intro) = meta.intro {
        println!("intro:       {intro}");
    }
    Ok(())
}

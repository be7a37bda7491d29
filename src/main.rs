#![allow(non_snake_case)]

mod app;
mod pages;
mod render;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use galleria_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Northlight Gallery - static site generator
#[derive(Parser, Debug)]
#[command(name = "galleria-site")]
#[command(about = "Render the Northlight gallery, licensing and deals pages to static HTML")]
struct Args {
    /// Output directory for the generated pages
    #[arg(short, long, default_value = "site")]
    out_dir: PathBuf,

    /// Site config file (default: <config dir>/galleria/site.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Config file looked up when `--config` is not given
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("galleria").join("site.toml"))
}

fn load_config(explicit: Option<PathBuf>) -> Result<SiteConfig> {
    if let Some(path) = explicit {
        return SiteConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.exists() => SiteConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        _ => {
            tracing::info!("No site config found, using built-in defaults");
            Ok(SiteConfig::default())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(args.config)?;
    tracing::info!("Rendering '{}' into {:?}", config.title, args.out_dir);

    let manifest = render::write_site(&args.out_dir, &config)?;

    println!("{}", config.title);
    for page in &manifest.pages {
        println!("  wrote {}", args.out_dir.join(&page.file).display());
    }
    println!("  {} images, {} deals", manifest.images, manifest.deals);

    Ok(())
}

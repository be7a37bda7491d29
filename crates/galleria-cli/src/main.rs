//! Galleria CLI
//!
//! Thin wrapper around galleria-core for inspecting the photo catalog.
//!
//! ## Usage
//!
//! ```bash
//! # List every image in catalog order
//! galleria list
//!
//! # Show one image with its prices
//! galleria show lisbon-tram-28
//!
//! # Describe the license tiers
//! galleria licenses
//!
//! # Price of one tier for one image
//! galleria price lisbon-tram-28 commercial
//!
//! # Check ids, tiers and price ordering
//! galleria audit
//!
//! # Dump the catalog as JSON
//! galleria export
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use galleria_core::{
    audit_catalog, find_image, find_license, format_amount, LicenseTier, Severity,
    GALLERY_IMAGES, LICENSE_TYPES,
};
use serde_json::json;

/// Galleria - photo catalog inspection
#[derive(Parser)]
#[command(name = "galleria")]
#[command(version = "0.1.0")]
#[command(about = "Inspect and audit the Northlight photo catalog")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Currency symbol for prices
    #[arg(long, default_value = "$", global = true, value_parser = parse_currency)]
    currency: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every image in catalog order
    List,

    /// Show one image in full
    Show {
        /// Image ID
        id: String,
    },

    /// Describe the license tiers
    Licenses,

    /// Price of one license tier for one image
    Price {
        /// Image ID
        id: String,
        /// personal, commercial or exclusive
        tier: String,
    },

    /// Check ids, license tiers and price ordering
    Audit,

    /// Print the catalog and license tiers as JSON
    Export,
}

fn parse_currency(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("currency symbol must not be empty".to_string());
    }
    Ok(value.to_string())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let currency = cli.currency.as_str();

    match cli.command {
        Commands::List => {
            tracing::debug!(count = GALLERY_IMAGES.len(), "listing catalog");
            println!("{} images:", GALLERY_IMAGES.len());
            for image in GALLERY_IMAGES {
                let marker = if image.featured { "*" } else { " " };
                println!(
                    "  {} {:<26} {:<10} {}",
                    marker, image.id, image.category, image.title
                );
            }
            println!();
            println!("* featured");
        }

        Commands::Show { id } => {
            tracing::debug!(id = %id, "looking up image");
            let image = find_image(&id)?;

            println!("{}", image.title);
            println!("  ID: {}", image.id);
            println!("  Location: {}", image.location);
            println!("  Category: {}", image.category);
            println!("  Featured: {}", if image.featured { "yes" } else { "no" });
            println!("  Image: {}", image.image);
            println!("  Tags: {}", image.tags.join(", "));
            println!();
            println!("  {}", image.description);
            println!();
            println!("Prices:");
            for tier in LicenseTier::ALL {
                println!(
                    "  {:<11} {}",
                    tier.as_str(),
                    format_amount(image.price_for(tier), currency)
                );
            }
        }

        Commands::Licenses => {
            for (i, license) in LICENSE_TYPES.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{} ({})", license.name, license.id);
                println!("  {}", license.description);
                for feature in license.features {
                    println!("  - {}", feature);
                }
            }
        }

        Commands::Price { id, tier } => {
            let tier: LicenseTier = tier.parse()?;
            tracing::debug!(id = %id, tier = %tier, "looking up image");
            let image = find_image(&id)?;
            let name = find_license(tier).map(|l| l.name).unwrap_or(tier.as_str());
            println!(
                "{} - {} license: {}",
                image.title,
                name,
                format_amount(image.price_for(tier), currency)
            );
        }

        Commands::Audit => {
            let report = audit_catalog(GALLERY_IMAGES, LICENSE_TYPES);

            println!(
                "Audited {} images and {} license tiers",
                report.images_checked, report.licenses_checked
            );
            if report.is_clean() {
                println!("No findings.");
                return Ok(());
            }

            for finding in &report.findings {
                let label = match finding.severity() {
                    Severity::Error => "error",
                    Severity::Warning => {
                        tracing::warn!(%finding, "catalog audit warning");
                        "warning"
                    }
                };
                println!("  {}: {}", label, finding);
            }

            let errors = report.errors().count();
            if errors > 0 {
                bail!("catalog audit found {} error(s)", errors);
            }
        }

        Commands::Export => {
            tracing::info!(
                images = GALLERY_IMAGES.len(),
                licenses = LICENSE_TYPES.len(),
                "exporting catalog"
            );
            let catalog = json!({
                "images": GALLERY_IMAGES,
                "licenses": LICENSE_TYPES,
            });
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }

    Ok(())
}

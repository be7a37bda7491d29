//! Static rendering of the site pages.
//!
//! Each page is a fresh `VirtualDom` rendered once through `dioxus-ssr`.
//! The catalog is audited before anything is written; error findings abort
//! the build, warnings are logged and the build continues.

use std::path::Path;

use anyhow::{bail, Context, Result};
use dioxus::prelude::*;
use galleria_core::{audit_catalog, SiteConfig, GALLERY_IMAGES, LICENSE_TYPES};
use serde::Serialize;

use crate::app::{Document, DocumentProps, Page};

/// Summary written to `manifest.json` next to the pages
#[derive(Debug, Clone, Serialize)]
pub struct SiteManifest {
    pub title: String,
    /// RFC 3339 timestamp of the build
    pub generated_at: String,
    pub pages: Vec<ManifestPage>,
    pub images: usize,
    pub deals: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestPage {
    pub file: String,
    pub title: String,
}

/// Render one page to a complete HTML document.
///
/// The `<html>` root is written here since the page component only renders
/// its head and body.
pub fn render_page(page: Page, config: &SiteConfig) -> String {
    let mut dom = VirtualDom::new_with_props(
        Document,
        DocumentProps::builder()
            .page(page)
            .config(config.clone())
            .build(),
    );
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">{}</html>\n",
        dioxus_ssr::render(&dom)
    )
}

/// Audit the catalog, then write every page and the manifest into `out_dir`
pub fn write_site(out_dir: &Path, config: &SiteConfig) -> Result<SiteManifest> {
    let report = audit_catalog(GALLERY_IMAGES, LICENSE_TYPES);
    if report.has_errors() {
        let errors: Vec<String> = report.errors().map(ToString::to_string).collect();
        bail!("catalog audit failed: {}", errors.join("; "));
    }
    let warnings = report.warnings().count();
    if warnings > 0 {
        tracing::warn!("Catalog audit passed with {} warning(s)", warnings);
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut pages = Vec::with_capacity(Page::ALL.len());
    for page in Page::ALL {
        let html = render_page(page, config);
        let path = out_dir.join(page.file_name());
        std::fs::write(&path, html)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(page = ?page, path = %path.display(), "wrote page");

        pages.push(ManifestPage {
            file: page.file_name().to_string(),
            title: page.display_name().to_string(),
        });
    }

    let manifest = SiteManifest {
        title: config.title.clone(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        pages,
        images: GALLERY_IMAGES.len(),
        deals: config.deals.len() + config.compact_deals.len(),
    };
    let manifest_path = out_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&manifest_path, json)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    tracing::info!("Wrote {} pages to {}", manifest.pages.len(), out_dir.display());
    Ok(manifest)
}

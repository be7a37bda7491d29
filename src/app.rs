use dioxus::prelude::*;
use galleria_core::SiteConfig;

use crate::pages::{DealsPage, GalleryPage, LicensingPage};
use crate::theme::GLOBAL_STYLES;

/// Site pages.
///
/// - `index.html` - Gallery grid of every photograph
/// - `licensing.html` - Tier descriptions and per-image prices
/// - `deals.html` - Gear we use, with affiliate links
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Gallery,
    Licensing,
    Deals,
}

impl Page {
    /// Every page, in navigation order
    pub const ALL: [Page; 3] = [Page::Gallery, Page::Licensing, Page::Deals];

    /// File written for this page, also its link target
    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Gallery => "index.html",
            Page::Licensing => "licensing.html",
            Page::Deals => "deals.html",
        }
    }

    /// Navigation label and `<title>` prefix
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Gallery => "Gallery",
            Page::Licensing => "Licensing",
            Page::Deals => "Gear & Deals",
        }
    }
}

/// Head and body of one page.
///
/// Provides the global styles, navigation header and footer around the page
/// body. The doctype and `<html>` root are added by `render::render_page`.
#[component]
pub fn Document(page: Page, config: SiteConfig) -> Element {
    let page_title = format!("{} | {}", page.display_name(), config.title);

    let content = match page {
        Page::Gallery => rsx! {
            GalleryPage { currency_symbol: config.currency_symbol.clone() }
        },
        Page::Licensing => rsx! {
            LicensingPage { currency_symbol: config.currency_symbol.clone() }
        },
        Page::Deals => rsx! {
            DealsPage {
                deals: config.deals.clone(),
                compact_deals: config.compact_deals.clone(),
            }
        },
    };

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{page_title}" }
            style { dangerous_inner_html: GLOBAL_STYLES }
        }
        body {
            NavHeader {
                current: page,
                site_title: config.title.clone(),
                tagline: config.tagline.clone(),
            }
            main { class: "page", {content} }
            footer { class: "site-footer",
                p { "\u{00A9} {config.title}. All photographs are licensed, not sold." }
            }
        }
    }
}

/// Site title, tagline and links to every page
#[component]
fn NavHeader(current: Page, site_title: String, tagline: String) -> Element {
    rsx! {
        header { class: "nav-header",
            div { class: "nav-header__brand",
                a { class: "nav-header__title", href: "index.html", "{site_title}" }
                p { class: "nav-header__tagline", "{tagline}" }
            }
            nav { class: "nav-header__links",
                for page in Page::ALL {
                    {
                        let label = page.display_name();
                        let href = page.file_name();
                        rsx! {
                            a {
                                key: "{href}",
                                class: if page == current { "nav-link active" } else { "nav-link" },
                                href: "{href}",
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

//! Catalog audit.
//!
//! The static tables are never validated at load time. The audit walks them
//! once and reports what a human should look at before publishing:
//!
//! - duplicate image or license identifiers (errors)
//! - license tiers missing from, or unknown to, the descriptor table (errors)
//! - images whose prices break personal <= commercial <= exclusive (warnings)
//!
//! Price ordering is a convention in the data, not an invariant, so it only
//! ever produces warnings.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::types::{GalleryImage, LicensePrice, LicenseTier, LicenseType};

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single problem found in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Two or more gallery images share an identifier
    DuplicateImageId { id: String },
    /// Two or more license descriptors share an identifier
    DuplicateLicenseId { id: String },
    /// A tier has no descriptor in the license table
    MissingLicenseTier { tier: LicenseTier },
    /// A descriptor names a tier that `LicensePrice` has no key for
    UnknownLicenseTier { id: String },
    /// An image's prices are not personal <= commercial <= exclusive
    PriceOrder { id: String, price: LicensePrice },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::PriceOrder { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DuplicateImageId { id } => write!(f, "duplicate image id '{id}'"),
            Finding::DuplicateLicenseId { id } => write!(f, "duplicate license id '{id}'"),
            Finding::MissingLicenseTier { tier } => {
                write!(f, "no license descriptor for tier '{tier}'")
            }
            Finding::UnknownLicenseTier { id } => {
                write!(f, "license descriptor '{id}' is not a known tier")
            }
            Finding::PriceOrder { id, price } => write!(
                f,
                "image '{id}' prices out of order: personal {} / commercial {} / exclusive {}",
                price.personal, price.commercial, price.exclusive
            ),
        }
    }
}

/// Result of auditing a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub images_checked: usize,
    pub licenses_checked: usize,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    /// No findings at all
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.severity() == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|finding| finding.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|finding| finding.severity() == Severity::Warning)
    }
}

/// Audit a gallery and its license descriptors.
///
/// Findings come out grouped by check, each group in table order.
pub fn audit_catalog(images: &[GalleryImage], licenses: &[LicenseType]) -> AuditReport {
    let mut findings = Vec::new();

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for image in images {
        if !seen.insert(image.id) && reported.insert(image.id) {
            findings.push(Finding::DuplicateImageId {
                id: image.id.to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for license in licenses {
        if !seen.insert(license.id) && reported.insert(license.id) {
            findings.push(Finding::DuplicateLicenseId {
                id: license.id.to_string(),
            });
        }
        if license.tier().is_none() {
            findings.push(Finding::UnknownLicenseTier {
                id: license.id.to_string(),
            });
        }
    }

    let described: HashSet<LicenseTier> = licenses.iter().filter_map(LicenseType::tier).collect();
    for tier in LicenseTier::ALL {
        if !described.contains(&tier) {
            findings.push(Finding::MissingLicenseTier { tier });
        }
    }

    for image in images {
        if !image.license_price.is_ordered() {
            findings.push(Finding::PriceOrder {
                id: image.id.to_string(),
                price: image.license_price,
            });
        }
    }

    for finding in &findings {
        match finding.severity() {
            Severity::Error => tracing::error!(%finding, "catalog audit"),
            Severity::Warning => tracing::warn!(%finding, "catalog audit"),
        }
    }
    tracing::debug!(
        images = images.len(),
        licenses = licenses.len(),
        findings = findings.len(),
        "catalog audit complete"
    );

    AuditReport {
        images_checked: images.len(),
        licenses_checked: licenses.len(),
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GALLERY_IMAGES, LICENSE_TYPES};

    fn image(id: &'static str, price: LicensePrice) -> GalleryImage {
        GalleryImage {
            id,
            title: "Untitled",
            location: "Somewhere",
            image: "/images/untitled.jpg",
            category: "Misc",
            featured: false,
            description: "",
            license_price: price,
            tags: &[],
        }
    }

    fn license(id: &'static str) -> LicenseType {
        LicenseType {
            id,
            name: id,
            description: "",
            features: &[],
        }
    }

    fn tiers() -> Vec<LicenseType> {
        vec![license("personal"), license("commercial"), license("exclusive")]
    }

    #[test]
    fn test_shipped_catalog_is_clean() {
        let report = audit_catalog(GALLERY_IMAGES, LICENSE_TYPES);
        assert!(report.is_clean(), "findings: {:?}", report.findings);
        assert_eq!(report.images_checked, GALLERY_IMAGES.len());
        assert_eq!(report.licenses_checked, 3);
    }

    #[test]
    fn test_duplicate_image_reported_once() {
        let price = LicensePrice::new(1, 2, 3);
        let images = vec![image("a", price), image("a", price), image("a", price), image("b", price)];
        let report = audit_catalog(&images, &tiers());
        assert_eq!(
            report.findings,
            vec![Finding::DuplicateImageId { id: "a".to_string() }]
        );
        assert!(report.has_errors());
    }

    #[test]
    fn test_price_order_is_warning_only() {
        let images = vec![image("flipped", LicensePrice::new(500, 100, 900))];
        let report = audit_catalog(&images, &tiers());
        assert!(!report.has_errors());
        assert_eq!(report.warnings().count(), 1);
        assert_eq!(
            report.findings[0],
            Finding::PriceOrder {
                id: "flipped".to_string(),
                price: LicensePrice::new(500, 100, 900),
            }
        );
    }

    #[test]
    fn test_missing_and_unknown_tiers() {
        let licenses = vec![license("personal"), license("royalty-free")];
        let report = audit_catalog(&[], &licenses);
        assert!(report.has_errors());
        assert!(report.findings.contains(&Finding::UnknownLicenseTier {
            id: "royalty-free".to_string()
        }));
        assert!(report.findings.contains(&Finding::MissingLicenseTier {
            tier: LicenseTier::Commercial
        }));
        assert!(report.findings.contains(&Finding::MissingLicenseTier {
            tier: LicenseTier::Exclusive
        }));
        assert_eq!(report.errors().count(), 3);
    }

    #[test]
    fn test_duplicate_license() {
        let mut licenses = tiers();
        licenses.push(license("commercial"));
        let report = audit_catalog(&[], &licenses);
        assert_eq!(
            report.findings,
            vec![Finding::DuplicateLicenseId {
                id: "commercial".to_string()
            }]
        );
    }

    #[test]
    fn test_finding_display() {
        let finding = Finding::PriceOrder {
            id: "x".to_string(),
            price: LicensePrice::new(3, 2, 1),
        };
        assert_eq!(
            finding.to_string(),
            "image 'x' prices out of order: personal 3 / commercial 2 / exclusive 1"
        );
        assert_eq!(
            Finding::MissingLicenseTier { tier: LicenseTier::Personal }.to_string(),
            "no license descriptor for tier 'personal'"
        );
    }

    #[test]
    fn test_report_serializes_with_kind_tag() {
        let report = audit_catalog(&[image("a", LicensePrice::new(9, 1, 1))], &tiers());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["findings"][0]["kind"], "price_order");
        assert_eq!(json["findings"][0]["id"], "a");
    }
}

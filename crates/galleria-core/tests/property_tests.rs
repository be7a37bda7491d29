//! Property-based tests for license prices and the catalog audit
//!
//! Uses proptest to check the audit agrees with the price and id invariants
//! on arbitrary catalogs, not just the shipped one.

use std::collections::HashSet;

use galleria_core::{
    audit_catalog, format_amount, Finding, GalleryImage, LicensePrice, LicenseTier, Severity,
    LICENSE_TYPES,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Identifiers drawn from a small pool so duplicates actually happen
const ID_POOL: &[&str] = &["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];

fn price_strategy() -> impl Strategy<Value = LicensePrice> {
    (0u32..5_000, 0u32..5_000, 0u32..5_000)
        .prop_map(|(personal, commercial, exclusive)| LicensePrice::new(personal, commercial, exclusive))
}

/// Prices built to respect personal <= commercial <= exclusive
fn ordered_price_strategy() -> impl Strategy<Value = LicensePrice> {
    (0u32..1_000, 0u32..1_000, 0u32..1_000).prop_map(|(base, step_a, step_b)| {
        LicensePrice::new(base, base + step_a, base + step_a + step_b)
    })
}

fn image_strategy(price: impl Strategy<Value = LicensePrice>) -> impl Strategy<Value = GalleryImage> {
    (prop::sample::select(ID_POOL), price).prop_map(|(id, license_price)| GalleryImage {
        id,
        title: "Generated",
        location: "Nowhere",
        image: "/images/generated.jpg",
        category: "Test",
        featured: false,
        description: "",
        license_price,
        tags: &[],
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A price warning appears exactly for images whose tiers are out of order
    #[test]
    fn price_warnings_match_ordering(images in prop::collection::vec(image_strategy(price_strategy()), 0..20)) {
        let report = audit_catalog(&images, LICENSE_TYPES);
        let expected = images.iter().filter(|image| !image.license_price.is_ordered()).count();
        let warnings = report.warnings().count();
        prop_assert_eq!(warnings, expected);
        for finding in report.warnings() {
            let is_price_order = matches!(finding, Finding::PriceOrder { .. });
            prop_assert!(is_price_order);
        }
    }

    /// Ordered prices never produce warnings
    #[test]
    fn ordered_prices_are_clean(images in prop::collection::vec(image_strategy(ordered_price_strategy()), 0..20)) {
        let report = audit_catalog(&images, LICENSE_TYPES);
        prop_assert_eq!(report.warnings().count(), 0);
    }

    /// Every repeated id is reported exactly once, and only repeated ids are
    #[test]
    fn duplicate_ids_reported_once(images in prop::collection::vec(image_strategy(ordered_price_strategy()), 0..20)) {
        let mut seen = HashSet::new();
        let mut duplicated = HashSet::new();
        for image in &images {
            if !seen.insert(image.id) {
                duplicated.insert(image.id.to_string());
            }
        }

        let report = audit_catalog(&images, LICENSE_TYPES);
        let reported: Vec<String> = report
            .findings
            .iter()
            .filter_map(|finding| match finding {
                Finding::DuplicateImageId { id } => Some(id.clone()),
                _ => None,
            })
            .collect();

        prop_assert_eq!(reported.len(), duplicated.len());
        prop_assert_eq!(reported.into_iter().collect::<HashSet<_>>(), duplicated.clone());
        prop_assert_eq!(report.has_errors(), !duplicated.is_empty());
    }

    /// Each tier lookup returns the matching field
    #[test]
    fn price_for_matches_fields(price in price_strategy()) {
        prop_assert_eq!(price.price_for(LicenseTier::Personal), price.personal);
        prop_assert_eq!(price.price_for(LicenseTier::Commercial), price.commercial);
        prop_assert_eq!(price.price_for(LicenseTier::Exclusive), price.exclusive);
    }

    /// Stripping the symbol and separators gives back the number
    #[test]
    fn format_amount_keeps_digits(amount in any::<u32>()) {
        let formatted = format_amount(amount, "$");
        prop_assert!(formatted.starts_with('$'));
        let digits: String = formatted.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(digits.parse::<u32>().unwrap(), amount);
        for group in formatted.trim_start_matches('$').split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }
}

#[test]
fn price_order_findings_are_warnings() {
    let finding = Finding::PriceOrder {
        id: "x".to_string(),
        price: LicensePrice::new(2, 1, 0),
    };
    assert_eq!(finding.severity(), Severity::Warning);
}

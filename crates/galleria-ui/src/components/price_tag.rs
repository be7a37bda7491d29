//! Price Tag Component
//!
//! A license price with currency symbol and thousands separators.

use dioxus::prelude::*;
use galleria_core::format_amount;

/// Formatted amount, optionally preceded by a short label such as "from"
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PriceTag { amount: 1499, currency_symbol: "$".to_string(), prefix: "from".to_string() }
/// }
/// ```
#[component]
pub fn PriceTag(
    /// Whole units of the site currency
    amount: u32,
    #[props(default = "$".to_string())]
    currency_symbol: String,
    #[props(default)]
    prefix: Option<String>,
) -> Element {
    let formatted = format_amount(amount, &currency_symbol);
    let label = match prefix {
        Some(prefix) => format!("{prefix} {formatted}"),
        None => formatted,
    };

    rsx! {
        span { class: "price-tag", "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render_dom;

    fn render(props: PriceTagProps) -> String {
        render_dom(VirtualDom::new_with_props(PriceTag, props))
    }

    #[test]
    fn formats_with_default_symbol() {
        let html = render(PriceTagProps::builder().amount(1499).build());
        assert!(html.starts_with(r#"<span class="price-tag""#));
        assert!(html.contains(">$1,499</span>"));
    }

    #[test]
    fn prefix_and_symbol() {
        let html = render(
            PriceTagProps::builder()
                .amount(39)
                .currency_symbol("€".to_string())
                .prefix("from".to_string())
                .build(),
        );
        assert!(html.contains(">from €39</span>"));
    }

    #[test]
    fn zero_amount() {
        let html = render(PriceTagProps::builder().amount(0).build());
        assert!(html.contains(">$0</span>"));
    }
}

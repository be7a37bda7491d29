//! Attribute escaping for SSR output.
//!
//! `dioxus-ssr` escapes text nodes but writes attribute values verbatim, so
//! any attribute built from data goes through [`escape_attr`] first.

use std::borrow::Cow;

/// Escape `&`, `"`, `'`, `<` and `>` as HTML entities.
///
/// Values with nothing to escape are returned borrowed.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '\'', '<', '>']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_are_borrowed() {
        let value = "https://shop.example.com/tripod?ref=gallery";
        assert!(matches!(escape_attr(value), Cow::Borrowed(v) if v == value));
    }

    #[test]
    fn quotes_and_markup_are_escaped() {
        assert_eq!(
            escape_attr(r#"https://x/?a=1&b="2""#),
            "https://x/?a=1&amp;b=&quot;2&quot;"
        );
        assert_eq!(escape_attr("<i>'x'</i>"), "&lt;i&gt;&#39;x&#39;&lt;/i&gt;");
    }

    #[test]
    fn ampersand_escaped_once() {
        assert_eq!(escape_attr("a&amp;b"), "a&amp;amp;b");
    }
}

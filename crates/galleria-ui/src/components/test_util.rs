//! SSR helpers for component tests

use dioxus::prelude::*;

/// Build the dom once and render it to an HTML string
pub(crate) fn render_dom(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Count non-overlapping occurrences of `needle`
pub(crate) fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

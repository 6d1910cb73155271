// src/core/html.rs
// Small helpers over `scraper` element handles.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// All descendant text of `el`, whitespace-collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// Text of the first descendant matching `sel`, if there is one.
/// An element that exists but is empty yields `Some("")`.
pub fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(text_of)
}

/// Build a selector from a constant pattern.
pub fn selector(pattern: &'static str) -> Selector {
    Selector::parse(pattern).unwrap_or_else(|e| panic!("bad selector {pattern:?}: {e:?}"))
}

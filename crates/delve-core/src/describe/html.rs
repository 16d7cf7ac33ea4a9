//! Minimal HTML fragment builders.
//!
//! The engine emits a fixed tag vocabulary (`h2`, `h3`, `p`, `span`, `ul`,
//! `li`, `em`, `strong`); the exact literals are part of the output
//! contract, so consumers can string-match rendered fragments.

/// Wrap content in a tag pair.
pub fn element(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}

/// Render an unordered list, one `<li>` per item.
pub fn unordered_list(items: &[String]) -> String {
    let body: String = items.iter().map(|item| element("li", item)).collect();
    element("ul", &body)
}

//! Escaping for user-supplied search text.
//!
//! Search input ends up echoed into rendered markup by callers, so the
//! engine stores it pre-escaped. Escaping matches text-node serialization:
//! `&`, `<`, and `>` are replaced, quotes pass through unchanged because the
//! value is never placed inside an attribute.

/// Escape markup-significant characters. `&` first so entities are not
/// double-escaped.
pub fn escape_markup(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// The full query pipeline: escape, then lower-case, then trim.
pub fn normalize_query(raw: &str) -> String {
    escape_markup(raw).to_lowercase().trim().to_string()
}

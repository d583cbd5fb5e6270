//! Rich-text stripping utilities for plain-text previews
//!
//! Section bodies are HTML-like markup (sometimes with inline markdown
//! remnants from the generation collaborator). This module reduces a body
//! to clean plain text for previews and search display.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled patterns for markup stripping
///
/// The order matters:
/// 1. Breaks and block-level closers become separators first, so adjacent
///    paragraphs do not glue together once tags are dropped
/// 2. Remaining tags are removed wholesale
/// 3. Inline markdown remnants are unwrapped
/// 4. Common entities are decoded last
static MARKUP_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Line breaks and block closers -> separators
        (Regex::new(r"(?i)<br\s*/?>").unwrap(), " "),
        (Regex::new(r"(?i)</(p|div|li|ul|ol|h[1-6]|tr|table)>").unwrap(), " "),
        // Drop all remaining tags
        (Regex::new(r"<[^>]+>").unwrap(), ""),
        // Unwrap inline markdown remnants: **bold**, `code`
        (Regex::new(r"\*\*([^*]+)\*\*").unwrap(), "$1"),
        (Regex::new(r"`([^`]+)`").unwrap(), "$1"),
        // Decode the entities that actually show up in generated bodies
        (Regex::new(r"&nbsp;").unwrap(), " "),
        (Regex::new(r"&amp;").unwrap(), "&"),
        (Regex::new(r"&lt;").unwrap(), "<"),
        (Regex::new(r"&gt;").unwrap(), ">"),
        (Regex::new(r"&quot;").unwrap(), "\""),
    ]
});

/// Compiled regex for whitespace normalization
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip markup from a rich-text body to produce clean plain text.
///
/// # Examples
///
/// ```
/// use tenderdoc_core::utils::strip_markup;
///
/// assert_eq!(strip_markup("<p>Hello <b>World</b></p>"), "Hello World");
/// assert_eq!(strip_markup("<p>One</p><p>Two</p>"), "One Two");
/// assert_eq!(strip_markup("**bold** remnant"), "bold remnant");
/// ```
pub fn strip_markup(body: &str) -> String {
    let mut result = body.to_string();

    for (pattern, replacement) in MARKUP_PATTERNS.iter() {
        result = pattern.replace_all(&result, *replacement).to_string();
    }

    // Collapse runs of whitespace and trim
    WHITESPACE_RE.replace_all(&result, " ").trim().to_string()
}

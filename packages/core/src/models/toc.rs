//! Table-of-Contents Shapes
//!
//! Input and output shapes for the numbering pass. `TocItem` is the
//! tree-agnostic source form (whatever shape the backend or a template
//! returns), `TocEntry` is the numbered display form, and `FlatSection` is
//! the minimal `{title, level}` pair used when building an outline tree
//! from a flat sequence.

use serde::{Deserialize, Serialize};

/// One source entry for the numbering pass.
///
/// `order_hint` orders siblings before they are visited (ascending, stable:
/// ties keep input order). The declared `level` may be inconsistent; the
/// numbering pass normalizes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocItem {
    /// Display text of the heading
    pub title: String,

    /// Declared depth (1 = top-level); normalized before numbering
    pub level: u32,

    /// Sibling sort key, ascending
    #[serde(default)]
    pub order_hint: i64,
}

impl TocItem {
    pub fn new(title: impl Into<String>, level: u32, order_hint: i64) -> Self {
        Self {
            title: title.into(),
            level,
            order_hint,
        }
    }
}

/// One numbered entry of a rendered table of contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    /// Normalized depth (1 = top-level)
    pub level: u32,

    /// Dotted positional numbering ("1", "1.1", "2.3.1", ...)
    pub numbering: String,

    /// Display text of the heading
    pub title: String,
}

impl TocEntry {
    pub fn new(level: u32, numbering: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            level,
            numbering: numbering.into(),
            title: title.into(),
        }
    }
}

/// Minimal `{title, level}` pair for building a tree from a flat outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatSection {
    pub title: String,
    pub level: u32,
}

impl FlatSection {
    pub fn new(title: impl Into<String>, level: u32) -> Self {
        Self {
            title: title.into(),
            level,
        }
    }
}

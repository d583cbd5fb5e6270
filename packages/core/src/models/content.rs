//! Section Content Structures
//!
//! A `ContentEntry` holds the rich-text body and lifecycle status for one
//! outline node. Content is owned by the store, not by the tree: the two are
//! joined only at render time, so a body survives any amount of structural
//! re-shuffling as long as its node id stays alive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a section body.
///
/// - `Draft`: initial state, and the state after any manual edit
/// - `Generated`: set when an external generation call succeeds
/// - `Final`: explicit user promotion; never assigned automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Generated,
    Final,
}

impl ContentStatus {
    /// Whether the body still counts as work in progress.
    pub fn is_draft(&self) -> bool {
        matches!(self, ContentStatus::Draft)
    }
}

impl Default for ContentStatus {
    fn default() -> Self {
        ContentStatus::Draft
    }
}

/// Rich-text body and status for one outline node.
///
/// # Examples
///
/// ```rust
/// use tenderdoc_core::models::{ContentEntry, ContentStatus};
///
/// let entry = ContentEntry::empty("sec-1");
/// assert!(entry.body.is_empty());
/// assert_eq!(entry.status, ContentStatus::Draft);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    /// Id of the outline node this body belongs to
    pub node_id: String,

    /// Rich-text payload (HTML-like markup); may be empty
    pub body: String,

    /// Lifecycle status
    pub status: ContentStatus,

    /// Last write timestamp
    pub updated_at: DateTime<Utc>,
}

impl ContentEntry {
    /// Create an entry with an explicit body and status.
    pub fn new(node_id: impl Into<String>, body: impl Into<String>, status: ContentStatus) -> Self {
        Self {
            node_id: node_id.into(),
            body: body.into(),
            status,
            updated_at: Utc::now(),
        }
    }

    /// The implicit default for a node without stored content: empty body,
    /// `Draft` status.
    pub fn empty(node_id: impl Into<String>) -> Self {
        Self::new(node_id, "", ContentStatus::Draft)
    }

    /// Whether the body holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

//! Content Store
//!
//! Holds the rich-text body and status per section id, independent of the
//! outline's structural shape. The store never walks the tree: cascade
//! deletion is driven by the tree's `delete`, which reports the removed
//! subtree ids.
//!
//! Any id without an explicit entry reads as the implicit default: empty
//! body, `Draft` status.

use crate::models::{ContentEntry, ContentStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-section body/status storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStore {
    entries: HashMap<String, ContentEntry>,
}

impl ContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Explicit entry for a section, if one was ever written.
    pub fn entry(&self, node_id: &str) -> Option<&ContentEntry> {
        self.entries.get(node_id)
    }

    /// Entry for a section, falling back to the implicit default (empty
    /// body, `Draft`).
    pub fn get(&self, node_id: &str) -> ContentEntry {
        self.entries
            .get(node_id)
            .cloned()
            .unwrap_or_else(|| ContentEntry::empty(node_id))
    }

    /// Upsert: total replacement of body and status, no partial merge.
    pub fn set(&mut self, node_id: &str, body: impl Into<String>, status: ContentStatus) {
        self.entries.insert(
            node_id.to_string(),
            ContentEntry::new(node_id, body, status),
        );
    }

    /// Record a manual edit. Manual edits always land on `Draft`,
    /// regardless of the previous status.
    pub fn touch_draft(&mut self, node_id: &str, body: impl Into<String>) {
        self.set(node_id, body, ContentStatus::Draft);
    }

    /// Ensure a section has an explicit entry, creating the empty draft
    /// written at section creation time. Existing entries are untouched.
    pub fn seed(&mut self, node_id: &str) {
        self.entries
            .entry(node_id.to_string())
            .or_insert_with(|| ContentEntry::empty(node_id));
    }

    /// Remove one entry, returning it if present.
    pub fn remove(&mut self, node_id: &str) -> Option<ContentEntry> {
        self.entries.remove(node_id)
    }

    /// Cascade hook: remove entries for a deleted subtree. Returns how many
    /// entries actually existed.
    pub fn remove_many(&mut self, node_ids: &[String]) -> usize {
        node_ids
            .iter()
            .filter(|id| self.entries.remove(id.as_str()).is_some())
            .count()
    }
}

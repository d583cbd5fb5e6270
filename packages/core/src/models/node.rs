//! Outline Node Data Structures
//!
//! This module defines the core `OutlineNode` struct used by the outline
//! tree. A node is one titled section of a tender document: it knows its
//! parent, its depth, its derived numbering string, and the ordered ids of
//! the sections it owns.
//!
//! # Architecture
//!
//! - **Arena-friendly**: nodes reference parent and children by id, so the
//!   tree can store them in a flat map without self-referential types
//! - **Derived numbering**: `order_no` is recomputed from tree position on
//!   every structural change and is never authoritative on its own
//! - **Stable identity**: renaming a section never changes its `id`
//!
//! # Examples
//!
//! ```rust
//! use tenderdoc_core::models::OutlineNode;
//!
//! // A top-level section
//! let root = OutlineNode::new("Technical Proposal", None, 1);
//! assert!(root.is_root());
//!
//! // A child section one level deeper
//! let child = OutlineNode::new("System Architecture", Some(root.id.clone()), 2);
//! assert_eq!(child.level, 2);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for outline node structure
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    #[error("Invalid parent reference: {0}")]
    InvalidParent(String),
}

/// One titled section in a document outline.
///
/// # Fields
///
/// - `id`: opaque stable identifier (UUID v4 string)
/// - `parent_id`: owning section, or `None` for a top-level section
/// - `title`: display text; may be blank during editing
/// - `level`: positive depth, `1` for top-level sections; always equals
///   `parent.level + 1` for owned sections
/// - `order_no`: dotted display numbering (`"2.1.3"`), derived from tree
///   position by the renumbering pass
/// - `children`: ordered owned child ids; the order determines numbering
///   and render sequence
/// - `created_at` / `modified_at`: timestamps maintained by mutation helpers
///
/// # Examples
///
/// ```rust
/// # use tenderdoc_core::models::OutlineNode;
/// let mut section = OutlineNode::new("Pricing", None, 1);
/// section.set_title("Pricing and Payment Terms".to_string());
/// assert_eq!(section.title, "Pricing and Payment Terms");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineNode {
    /// Unique identifier (UUID v4 string)
    pub id: String,

    /// Owning section id (`None` for top-level sections)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Display text of the section heading
    pub title: String,

    /// Depth in the outline, 1 = top-level
    pub level: u32,

    /// Derived dotted numbering string (e.g. "1.2")
    pub order_no: String,

    /// Ordered ids of owned child sections
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl OutlineNode {
    /// Create a new node with an auto-generated UUID.
    ///
    /// The `order_no` starts empty; it is assigned by the tree's
    /// renumbering pass once the node is attached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tenderdoc_core::models::OutlineNode;
    /// let node = OutlineNode::new("Executive Summary", None, 1);
    /// assert!(!node.id.is_empty());
    /// assert_eq!(node.level, 1);
    /// assert!(node.children.is_empty());
    /// ```
    pub fn new(title: impl Into<String>, parent_id: Option<String>, level: u32) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            parent_id,
            title: title.into(),
            level,
            order_no: String::new(),
            children: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Create a node with an explicit id.
    ///
    /// Used when rehydrating an outline whose ids were assigned elsewhere
    /// (e.g. a saved document coming back from the backend).
    pub fn new_with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        parent_id: Option<String>,
        level: u32,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: id.into(),
            parent_id,
            title: title.into(),
            level,
            order_no: String::new(),
            children: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Validate node structure.
    ///
    /// Blank titles are allowed: sections are often created empty while the
    /// user is still typing the heading.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - `id` is empty
    /// - `level` is zero
    /// - the node references itself as parent or child
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id".to_string()));
        }

        if self.level == 0 {
            return Err(ValidationError::InvalidLevel(
                "level must be a positive integer (1 = top-level)".to_string(),
            ));
        }

        if let Some(parent_id) = &self.parent_id {
            if parent_id == &self.id {
                return Err(ValidationError::InvalidParent(
                    "Section cannot be its own parent".to_string(),
                ));
            }
        }

        if self.children.iter().any(|child| child == &self.id) {
            return Err(ValidationError::InvalidParent(
                "Section cannot be its own child".to_string(),
            ));
        }

        Ok(())
    }

    /// Check whether this is a top-level section.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Update the section title, preserving identity.
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.modified_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = OutlineNode::new("Executive Summary", None, 1);

        assert!(!node.id.is_empty());
        assert_eq!(node.title, "Executive Summary");
        assert_eq!(node.level, 1);
        assert!(node.order_no.is_empty());
        assert!(node.is_root());
    }

    #[test]
    fn test_node_with_explicit_id() {
        let node = OutlineNode::new_with_id("sec-1", "Scope", None, 1);

        assert_eq!(node.id, "sec-1");
        assert!(node.is_root());
    }

    #[test]
    fn test_node_validation() {
        let node = OutlineNode::new("Valid", None, 1);
        assert!(node.validate().is_ok());
    }

    #[test]
    fn test_node_validation_accepts_blank_title() {
        // Blank titles are valid while the user is still editing
        let node = OutlineNode::new("", None, 1);
        assert!(node.validate().is_ok());
    }

    #[test]
    fn test_node_validation_rejects_zero_level() {
        let mut node = OutlineNode::new("Bad", None, 1);
        node.level = 0;

        assert!(matches!(
            node.validate(),
            Err(ValidationError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_node_validation_circular_parent() {
        let mut node = OutlineNode::new("Loop", None, 1);
        node.parent_id = Some(node.id.clone());

        assert!(matches!(
            node.validate(),
            Err(ValidationError::InvalidParent(_))
        ));
    }

    #[test]
    fn test_node_validation_circular_child() {
        let mut node = OutlineNode::new("Loop", None, 1);
        node.children.push(node.id.clone());

        assert!(matches!(
            node.validate(),
            Err(ValidationError::InvalidParent(_))
        ));
    }

    #[test]
    fn test_rename_keeps_identity() {
        let mut node = OutlineNode::new("Draft heading", None, 1);
        let id_before = node.id.clone();
        let modified_before = node.modified_at;

        node.set_title("Final heading".to_string());

        assert_eq!(node.id, id_before);
        assert_eq!(node.title, "Final heading");
        assert!(node.modified_at >= modified_before);
    }

    #[test]
    fn test_node_serialization() {
        let node = OutlineNode::new("Compliance Matrix", None, 1);

        let json = serde_json::to_string(&node).unwrap();
        let deserialized: OutlineNode = serde_json::from_str(&json).unwrap();

        assert_eq!(node.id, deserialized.id);
        assert_eq!(node.title, deserialized.title);
        assert_eq!(node.level, deserialized.level);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let node = OutlineNode::new("Wire", Some("parent-1".to_string()), 2);
        let json = serde_json::to_string(&node).unwrap();

        assert!(json.contains("\"parentId\""));
        assert!(json.contains("\"orderNo\""));
        assert!(json.contains("\"createdAt\""));
    }
}

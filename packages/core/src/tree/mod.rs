//! Outline Tree - Structural Operations
//!
//! This module maintains a consistent forest of [`OutlineNode`]s and exposes
//! structural mutation with automatic numbering:
//!
//! - CRUD operations (add_child, rename, delete)
//! - Hierarchy management (move_node, reorder_child, insert_child_after)
//! - Flat-outline ingestion with level normalization (from_flat)
//! - Depth-first traversal and the numbering pass
//!
//! # Arena Design
//!
//! Nodes live in a flat map indexed by id, with parent/children-id links and
//! a separate ordered list of root ids. Rendering and numbering use a
//! generic depth-first traversal over that arena rather than recursive
//! owned structures.
//!
//! # Invariants
//!
//! - The node set forms a forest: no cycles, each node in exactly one
//!   children sequence (or the root list)
//! - `level` always equals the parent's level plus one (1 for roots)
//! - Every structural mutation is atomic and ends with a full renumbering
//!   pass; `order_no` is never edited independently of structure
//!
//! # Examples
//!
//! ```rust
//! use tenderdoc_core::tree::OutlineTree;
//!
//! let mut tree = OutlineTree::new();
//! let a = tree.add_child(None, "Scope of Work").unwrap();
//! let b = tree.add_child(Some(&a), "Deliverables").unwrap();
//!
//! assert_eq!(tree.get(&a).unwrap().order_no, "1");
//! assert_eq!(tree.get(&b).unwrap().order_no, "1.1");
//! ```

mod numbering;

pub use numbering::{clamp_level, number_toc, sample_toc, OrderCounter};

use crate::models::{FlatSection, OutlineNode, TocEntry, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Structural operation errors
#[derive(Error, Debug)]
pub enum TreeError {
    /// Operation referenced a missing section id
    #[error("Section not found: {id}")]
    NodeNotFound { id: String },

    /// Move would create a cycle
    #[error("Circular reference detected: {context}")]
    CircularReference { context: String },

    /// Sibling or parent bookkeeping would be violated
    #[error("Hierarchy constraint violated: {0}")]
    HierarchyViolation(String),

    /// Node-level validation failed
    #[error("Section validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

impl TreeError {
    /// Create a node not found error
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    /// Create a circular reference error
    pub fn circular_reference(context: impl Into<String>) -> Self {
        Self::CircularReference {
            context: context.into(),
        }
    }

    /// Create a hierarchy violation error
    pub fn hierarchy_violation(msg: impl Into<String>) -> Self {
        Self::HierarchyViolation(msg.into())
    }
}

/// Ordered, numbered forest of outline sections.
///
/// The tree exclusively owns node structure; section bodies live in the
/// content store and are joined with the tree only at render time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineTree {
    /// Arena of nodes indexed by id
    nodes: HashMap<String, OutlineNode>,

    /// Ordered ids of top-level sections
    roots: Vec<String>,
}

impl OutlineTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a flat `{title, level}` sequence, normalizing
    /// declared levels.
    ///
    /// A level may only increase by one step at a time relative to the
    /// nesting depth actually encountered; deeper jumps are flattened to
    /// the next valid depth and zero levels lifted to 1. The normalization
    /// is deterministic and idempotent: feeding the resulting levels back
    /// in reproduces the same tree shape and numbering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenderdoc_core::models::FlatSection;
    /// use tenderdoc_core::tree::OutlineTree;
    ///
    /// let tree = OutlineTree::from_flat(&[
    ///     FlatSection::new("A", 1),
    ///     FlatSection::new("B", 2),
    ///     FlatSection::new("C", 1),
    /// ]);
    ///
    /// let numbering: Vec<String> =
    ///     tree.document_order().iter().map(|id| tree.get(id).unwrap().order_no.clone()).collect();
    /// assert_eq!(numbering, ["1", "1.1", "2"]);
    /// ```
    pub fn from_flat(items: &[FlatSection]) -> Self {
        let mut tree = Self::new();
        // Stack of (id, normalized level); the top is always the previously
        // emitted section.
        let mut stack: Vec<(String, u32)> = Vec::new();

        for item in items {
            let prior = stack.last().map(|(_, level)| *level).unwrap_or(0);
            let level = clamp_level(item.level, prior);

            while stack.last().map_or(false, |(_, l)| *l >= level) {
                stack.pop();
            }

            let parent_id = stack.last().map(|(id, _)| id.clone());
            let node = OutlineNode::new(item.title.clone(), parent_id.clone(), level);
            let id = node.id.clone();
            tree.nodes.insert(id.clone(), node);

            match parent_id {
                Some(pid) => {
                    if let Some(parent) = tree.nodes.get_mut(&pid) {
                        parent.children.push(id.clone());
                    }
                }
                None => tree.roots.push(id.clone()),
            }
            stack.push((id, level));
        }

        tree.renumber();
        tree
    }

    /// Number of sections in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no sections. An empty tree renders nothing;
    /// callers substitute the placeholder outline from [`sample_toc`].
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a section id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Look up a section by id.
    pub fn get(&self, id: &str) -> Option<&OutlineNode> {
        self.nodes.get(id)
    }

    /// Ordered ids of top-level sections.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Ordered child ids of a section.
    pub fn children(&self, id: &str) -> Result<&[String], TreeError> {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .ok_or_else(|| TreeError::node_not_found(id))
    }

    /// All section ids in document order (depth-first, children after
    /// parent, siblings in stored order).
    pub fn document_order(&self) -> Vec<String> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut visit: Vec<&String> = self.roots.iter().rev().collect();

        while let Some(id) = visit.pop() {
            if let Some(node) = self.nodes.get(id) {
                order.push(node.id.clone());
                visit.extend(node.children.iter().rev());
            }
        }
        order
    }

    /// Depth-first traversal with a per-node callback, in document order.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&OutlineNode),
    {
        for id in self.document_order() {
            if let Some(node) = self.nodes.get(&id) {
                visit(node);
            }
        }
    }

    /// Ids of a section and all its descendants, in document order.
    pub fn subtree_ids(&self, id: &str) -> Result<Vec<String>, TreeError> {
        if !self.nodes.contains_key(id) {
            return Err(TreeError::node_not_found(id));
        }

        let mut ids = Vec::new();
        let mut visit = vec![id.to_string()];
        while let Some(current) = visit.pop() {
            if let Some(node) = self.nodes.get(&current) {
                visit.extend(node.children.iter().rev().cloned());
            }
            ids.push(current);
        }
        Ok(ids)
    }

    /// Create a new section as the last child of `parent_id`, or as a new
    /// top-level section when `parent_id` is `None`.
    ///
    /// The new section's level is derived from the parent (`parent.level +
    /// 1`, or 1 for roots) and the whole tree is renumbered. Returns the
    /// new section's id.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` if `parent_id` names a missing section.
    pub fn add_child(
        &mut self,
        parent_id: Option<&str>,
        title: impl Into<String>,
    ) -> Result<String, TreeError> {
        let level = match parent_id {
            Some(pid) => {
                let parent = self
                    .nodes
                    .get(pid)
                    .ok_or_else(|| TreeError::node_not_found(pid))?;
                parent.level + 1
            }
            None => 1,
        };

        let node = OutlineNode::new(title, parent_id.map(str::to_string), level);
        node.validate()?;
        let id = node.id.clone();
        self.nodes.insert(id.clone(), node);

        match parent_id {
            Some(pid) => {
                if let Some(parent) = self.nodes.get_mut(pid) {
                    parent.children.push(id.clone());
                }
            }
            None => self.roots.push(id.clone()),
        }

        self.renumber();
        Ok(id)
    }

    /// Create a new section directly after an existing sibling.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` if the parent or the reference sibling is missing;
    /// `HierarchyViolation` if the sibling does not belong to the target
    /// parent.
    pub fn insert_child_after(
        &mut self,
        parent_id: Option<&str>,
        after_id: &str,
        title: impl Into<String>,
    ) -> Result<String, TreeError> {
        {
            let after = self
                .nodes
                .get(after_id)
                .ok_or_else(|| TreeError::node_not_found(after_id))?;
            if after.parent_id.as_deref() != parent_id {
                return Err(TreeError::hierarchy_violation(format!(
                    "'{}' is not a child of the target parent",
                    after_id
                )));
            }
        }

        let level = match parent_id {
            Some(pid) => {
                let parent = self
                    .nodes
                    .get(pid)
                    .ok_or_else(|| TreeError::node_not_found(pid))?;
                parent.level + 1
            }
            None => 1,
        };

        let node = OutlineNode::new(title, parent_id.map(str::to_string), level);
        node.validate()?;
        let id = node.id.clone();
        self.nodes.insert(id.clone(), node);

        let siblings = match parent_id {
            Some(pid) => self.nodes.get_mut(pid).map(|parent| &mut parent.children),
            None => Some(&mut self.roots),
        };
        if let Some(siblings) = siblings {
            let position = match siblings.iter().position(|sibling| sibling == after_id) {
                Some(index) => index + 1,
                None => siblings.len(),
            };
            siblings.insert(position, id.clone());
        }

        self.renumber();
        Ok(id)
    }

    /// Update a section title. Identity and numbering are untouched.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` if the id is missing.
    pub fn rename(&mut self, id: &str, new_title: impl Into<String>) -> Result<(), TreeError> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| TreeError::node_not_found(id))?;
        node.set_title(new_title.into());
        Ok(())
    }

    /// Remove a section and its entire subtree, renumbering the remainder.
    ///
    /// Returns the removed ids in document order so the caller can cascade
    /// deletion to the content store.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` if the id is missing.
    pub fn delete(&mut self, id: &str) -> Result<Vec<String>, TreeError> {
        let removed = self.subtree_ids(id)?;
        let parent_id = self.nodes.get(id).and_then(|node| node.parent_id.clone());

        for removed_id in &removed {
            self.nodes.remove(removed_id);
        }
        match parent_id {
            Some(pid) => {
                if let Some(parent) = self.nodes.get_mut(&pid) {
                    parent.children.retain(|child| child != id);
                }
            }
            None => self.roots.retain(|root| root != id),
        }

        self.renumber();
        Ok(removed)
    }

    /// Re-parent a section (with its subtree) under `new_parent`, at the
    /// given sibling position (appended when `None`). Levels are re-derived
    /// for the whole moved subtree and the tree renumbered.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` for missing ids; `CircularReference` when the target
    /// parent is the section itself or one of its descendants.
    pub fn move_node(
        &mut self,
        id: &str,
        new_parent: Option<&str>,
        position: Option<usize>,
    ) -> Result<(), TreeError> {
        if !self.nodes.contains_key(id) {
            return Err(TreeError::node_not_found(id));
        }
        if let Some(np) = new_parent {
            if np == id {
                return Err(TreeError::circular_reference(format!(
                    "cannot move '{}' under itself",
                    id
                )));
            }
            if !self.nodes.contains_key(np) {
                return Err(TreeError::node_not_found(np));
            }
            let subtree = self.subtree_ids(id)?;
            if subtree.iter().any(|descendant| descendant == np) {
                return Err(TreeError::circular_reference(format!(
                    "cannot move '{}' under its own descendant '{}'",
                    id, np
                )));
            }
        }

        // Detach from the current sibling sequence
        let old_parent = self.nodes.get(id).and_then(|node| node.parent_id.clone());
        match &old_parent {
            Some(pid) => {
                if let Some(parent) = self.nodes.get_mut(pid) {
                    parent.children.retain(|child| child != id);
                }
            }
            None => self.roots.retain(|root| root != id),
        }

        // Attach at the requested position (clamped to the sequence length)
        let siblings = match new_parent {
            Some(pid) => self.nodes.get_mut(pid).map(|parent| &mut parent.children),
            None => Some(&mut self.roots),
        };
        if let Some(siblings) = siblings {
            let index = position.unwrap_or(siblings.len()).min(siblings.len());
            siblings.insert(index, id.to_string());
        }

        if let Some(node) = self.nodes.get_mut(id) {
            node.parent_id = new_parent.map(str::to_string);
        }
        let base_level = match new_parent {
            Some(pid) => self
                .nodes
                .get(pid)
                .map(|parent| parent.level + 1)
                .unwrap_or(1),
            None => 1,
        };
        self.reassign_levels(id, base_level);

        self.renumber();
        Ok(())
    }

    /// Move a section to a new index among its current siblings.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` if the id is missing.
    pub fn reorder_child(&mut self, id: &str, new_index: usize) -> Result<(), TreeError> {
        let parent_id = {
            let node = self
                .nodes
                .get(id)
                .ok_or_else(|| TreeError::node_not_found(id))?;
            node.parent_id.clone()
        };

        let siblings = match &parent_id {
            Some(pid) => self
                .nodes
                .get_mut(pid)
                .map(|parent| &mut parent.children)
                .ok_or_else(|| TreeError::node_not_found(pid.clone()))?,
            None => &mut self.roots,
        };

        let current = siblings
            .iter()
            .position(|sibling| sibling == id)
            .ok_or_else(|| {
                TreeError::hierarchy_violation(format!(
                    "'{}' missing from its sibling sequence",
                    id
                ))
            })?;
        let target = new_index.min(siblings.len() - 1);
        let moved = siblings.remove(current);
        siblings.insert(target, moved);

        self.renumber();
        Ok(())
    }

    /// Recompute every `order_no` from scratch with the counter-vector pass.
    ///
    /// Called after every structural mutation; idempotent on an unchanged
    /// tree.
    pub fn renumber(&mut self) {
        let order = self.document_order();
        let mut counter = OrderCounter::new();

        for id in order {
            let level = match self.nodes.get(&id) {
                Some(node) => node.level,
                None => continue,
            };
            let order_no = counter.next(level);
            if let Some(node) = self.nodes.get_mut(&id) {
                node.order_no = order_no;
            }
        }
    }

    /// Numbering view of the current tree, in document order.
    pub fn to_toc(&self) -> Vec<TocEntry> {
        let mut entries = Vec::with_capacity(self.nodes.len());
        self.walk(|node| {
            entries.push(TocEntry::new(
                node.level,
                node.order_no.clone(),
                node.title.clone(),
            ));
        });
        entries
    }

    /// Set `level` for a section and derive `level + 1` down its subtree.
    fn reassign_levels(&mut self, id: &str, level: u32) {
        let mut visit = vec![(id.to_string(), level)];
        while let Some((current, current_level)) = visit.pop() {
            if let Some(node) = self.nodes.get_mut(&current) {
                node.level = current_level;
                for child in node.children.clone() {
                    visit.push((child, current_level + 1));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlatSection;

    fn order_numbers(tree: &OutlineTree) -> Vec<String> {
        tree.document_order()
            .iter()
            .filter_map(|id| tree.get(id).map(|node| node.order_no.clone()))
            .collect()
    }

    fn titles_in_order(tree: &OutlineTree) -> Vec<String> {
        tree.document_order()
            .iter()
            .filter_map(|id| tree.get(id).map(|node| node.title.clone()))
            .collect()
    }

    #[test]
    fn test_add_child_derives_level_and_numbering() {
        let mut tree = OutlineTree::new();

        let a = tree.add_child(None, "A").unwrap();
        let b = tree.add_child(Some(&a), "B").unwrap();
        let c = tree.add_child(Some(&a), "C").unwrap();
        let d = tree.add_child(Some(&b), "D").unwrap();

        assert_eq!(tree.get(&a).unwrap().level, 1);
        assert_eq!(tree.get(&b).unwrap().level, 2);
        assert_eq!(tree.get(&d).unwrap().level, 3);

        assert_eq!(tree.get(&a).unwrap().order_no, "1");
        assert_eq!(tree.get(&b).unwrap().order_no, "1.1");
        assert_eq!(tree.get(&d).unwrap().order_no, "1.1.1");
        assert_eq!(tree.get(&c).unwrap().order_no, "1.2");
    }

    #[test]
    fn test_add_child_appends_at_sibling_position() {
        let mut tree = OutlineTree::new();
        let parent = tree.add_child(None, "Parent").unwrap();

        for expected in ["1.1", "1.2", "1.3"] {
            let id = tree.add_child(Some(&parent), "Child").unwrap();
            assert_eq!(tree.get(&id).unwrap().order_no, expected);
        }
    }

    #[test]
    fn test_add_child_unknown_parent() {
        let mut tree = OutlineTree::new();
        let result = tree.add_child(Some("missing"), "Orphan");

        assert!(matches!(result, Err(TreeError::NodeNotFound { .. })));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_insert_child_after() {
        let mut tree = OutlineTree::new();
        let parent = tree.add_child(None, "Parent").unwrap();
        let first = tree.add_child(Some(&parent), "First").unwrap();
        let _third = tree.add_child(Some(&parent), "Third").unwrap();

        let second = tree
            .insert_child_after(Some(&parent), &first, "Second")
            .unwrap();

        assert_eq!(tree.get(&second).unwrap().order_no, "1.2");
        assert_eq!(
            titles_in_order(&tree),
            ["Parent", "First", "Second", "Third"]
        );
    }

    #[test]
    fn test_insert_child_after_rejects_foreign_sibling() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        let b = tree.add_child(None, "B").unwrap();
        let a_child = tree.add_child(Some(&a), "A child").unwrap();

        let result = tree.insert_child_after(Some(&b), &a_child, "Misplaced");
        assert!(matches!(result, Err(TreeError::HierarchyViolation(_))));
    }

    #[test]
    fn test_rename_preserves_structure() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "Old title").unwrap();

        tree.rename(&a, "New title").unwrap();

        let node = tree.get(&a).unwrap();
        assert_eq!(node.title, "New title");
        assert_eq!(node.order_no, "1");
    }

    #[test]
    fn test_rename_missing_node() {
        let mut tree = OutlineTree::new();
        assert!(matches!(
            tree.rename("missing", "x"),
            Err(TreeError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_removes_exactly_the_subtree_and_renumbers() {
        // A (1) with child B (1.1), then C (2)
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        let b = tree.add_child(Some(&a), "B").unwrap();
        let c = tree.add_child(None, "C").unwrap();

        let removed = tree.delete(&a).unwrap();

        assert_eq!(removed, vec![a.clone(), b.clone()]);
        assert_eq!(tree.len(), 1);
        assert!(!tree.contains(&a));
        assert!(!tree.contains(&b));
        assert_eq!(tree.get(&c).unwrap().order_no, "1");
    }

    #[test]
    fn test_delete_missing_node() {
        let mut tree = OutlineTree::new();
        assert!(matches!(
            tree.delete("missing"),
            Err(TreeError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_subtree_ids_in_document_order() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        let b = tree.add_child(Some(&a), "B").unwrap();
        let c = tree.add_child(Some(&b), "C").unwrap();
        let d = tree.add_child(Some(&a), "D").unwrap();

        assert_eq!(tree.subtree_ids(&a).unwrap(), vec![a, b, c, d]);
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        tree.add_child(Some(&a), "B").unwrap();
        tree.add_child(None, "C").unwrap();

        let before = order_numbers(&tree);
        tree.renumber();
        tree.renumber();

        assert_eq!(order_numbers(&tree), before);
    }

    #[test]
    fn test_numbering_strictly_increases_in_document_order() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        let b = tree.add_child(Some(&a), "B").unwrap();
        tree.add_child(Some(&b), "C").unwrap();
        tree.add_child(Some(&a), "D").unwrap();
        tree.add_child(None, "E").unwrap();

        let keys: Vec<Vec<u32>> = order_numbers(&tree)
            .iter()
            .map(|numbering| {
                numbering
                    .split('.')
                    .map(|part| part.parse().unwrap())
                    .collect()
            })
            .collect();

        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should sort before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_from_flat_scenario() {
        let tree = OutlineTree::from_flat(&[
            FlatSection::new("A", 1),
            FlatSection::new("B", 2),
            FlatSection::new("C", 1),
        ]);

        assert_eq!(order_numbers(&tree), ["1", "1.1", "2"]);
        assert_eq!(titles_in_order(&tree), ["A", "B", "C"]);
    }

    #[test]
    fn test_from_flat_clamps_level_jumps() {
        let tree = OutlineTree::from_flat(&[
            FlatSection::new("Top", 1),
            FlatSection::new("Jumped", 4),
            FlatSection::new("Deeper", 9),
        ]);

        let levels: Vec<u32> = tree
            .document_order()
            .iter()
            .filter_map(|id| tree.get(id).map(|node| node.level))
            .collect();
        assert_eq!(levels, [1, 2, 3]);
        assert_eq!(order_numbers(&tree), ["1", "1.1", "1.1.1"]);
    }

    #[test]
    fn test_from_flat_is_idempotent() {
        let first = OutlineTree::from_flat(&[
            FlatSection::new("A", 2),
            FlatSection::new("B", 5),
            FlatSection::new("C", 1),
        ]);

        let renormalized: Vec<FlatSection> = first
            .document_order()
            .iter()
            .filter_map(|id| first.get(id))
            .map(|node| FlatSection::new(node.title.clone(), node.level))
            .collect();
        let second = OutlineTree::from_flat(&renormalized);

        assert_eq!(order_numbers(&first), order_numbers(&second));
        assert_eq!(titles_in_order(&first), titles_in_order(&second));
    }

    #[test]
    fn test_from_flat_empty() {
        let tree = OutlineTree::from_flat(&[]);
        assert!(tree.is_empty());
        assert!(tree.document_order().is_empty());
        assert!(tree.to_toc().is_empty());
    }

    #[test]
    fn test_move_node_reparents_and_renumbers() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        let b = tree.add_child(None, "B").unwrap();
        let b_child = tree.add_child(Some(&b), "B child").unwrap();

        tree.move_node(&b, Some(&a), None).unwrap();

        assert_eq!(tree.get(&b).unwrap().level, 2);
        assert_eq!(tree.get(&b_child).unwrap().level, 3);
        assert_eq!(tree.get(&b).unwrap().order_no, "1.1");
        assert_eq!(tree.get(&b_child).unwrap().order_no, "1.1.1");
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn test_move_node_to_root_position() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        let child = tree.add_child(Some(&a), "Child").unwrap();

        tree.move_node(&child, None, Some(0)).unwrap();

        assert_eq!(tree.get(&child).unwrap().level, 1);
        assert_eq!(tree.get(&child).unwrap().order_no, "1");
        assert_eq!(tree.get(&a).unwrap().order_no, "2");
    }

    #[test]
    fn test_move_node_rejects_cycles() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        let b = tree.add_child(Some(&a), "B").unwrap();

        assert!(matches!(
            tree.move_node(&a, Some(&a), None),
            Err(TreeError::CircularReference { .. })
        ));
        assert!(matches!(
            tree.move_node(&a, Some(&b), None),
            Err(TreeError::CircularReference { .. })
        ));

        // Structure untouched after the rejected moves
        assert_eq!(order_numbers(&tree), ["1", "1.1"]);
    }

    #[test]
    fn test_reorder_child_renumbers_siblings() {
        let mut tree = OutlineTree::new();
        let parent = tree.add_child(None, "Parent").unwrap();
        let first = tree.add_child(Some(&parent), "First").unwrap();
        let second = tree.add_child(Some(&parent), "Second").unwrap();
        let third = tree.add_child(Some(&parent), "Third").unwrap();

        tree.reorder_child(&third, 0).unwrap();

        assert_eq!(tree.get(&third).unwrap().order_no, "1.1");
        assert_eq!(tree.get(&first).unwrap().order_no, "1.2");
        assert_eq!(tree.get(&second).unwrap().order_no, "1.3");
    }

    #[test]
    fn test_reorder_child_clamps_index() {
        let mut tree = OutlineTree::new();
        let first = tree.add_child(None, "First").unwrap();
        let second = tree.add_child(None, "Second").unwrap();

        tree.reorder_child(&first, 99).unwrap();

        assert_eq!(tree.get(&second).unwrap().order_no, "1");
        assert_eq!(tree.get(&first).unwrap().order_no, "2");
    }

    #[test]
    fn test_walk_visits_document_order() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        tree.add_child(Some(&a), "B").unwrap();
        tree.add_child(None, "C").unwrap();

        let mut visited = Vec::new();
        tree.walk(|node| visited.push(node.title.clone()));

        assert_eq!(visited, ["A", "B", "C"]);
    }

    #[test]
    fn test_tree_serialization_roundtrip() {
        let mut tree = OutlineTree::new();
        let a = tree.add_child(None, "A").unwrap();
        tree.add_child(Some(&a), "B").unwrap();

        let json = serde_json::to_string(&tree).unwrap();
        let restored: OutlineTree = serde_json::from_str(&json).unwrap();

        assert_eq!(order_numbers(&restored), order_numbers(&tree));
        assert_eq!(titles_in_order(&restored), titles_in_order(&tree));
    }
}

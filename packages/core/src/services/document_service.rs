//! Document Service - Outline and Content Orchestration
//!
//! This module provides the main business logic layer joining the outline
//! tree, the content store, and the generation collaborator:
//!
//! - Section CRUD with automatic numbering and content cascade
//! - Manual body edits and explicit finalization
//! - Single-section and batch content generation
//! - Flattened document rendering (structure joined with content)
//!
//! # Concurrency Model
//!
//! The service owns its model and is mutated from a single caller at a
//! time. External generation calls are asynchronous, but batch operations
//! await each call fully before starting the next: one in-flight request
//! per section id, strictly sequential, which bounds the load on the
//! generation collaborator and keeps per-section status updates race-free.
//! A failing batch step halts the remaining steps; completed steps are not
//! rolled back. Cancellation mid-batch is not supported.

use crate::generation::{ContentGenerator, GenerationRequest};
use crate::models::{ContentEntry, ContentStatus, TocEntry, TocStyleHints};
use crate::services::content_store::ContentStore;
use crate::services::error::DocumentServiceError;
use crate::tree::OutlineTree;
use crate::utils::strip_markup;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One flattened section of the rendered document view: tree position
/// joined with stored content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSection {
    /// Section id
    pub id: String,

    /// Dotted numbering at render time
    pub order_no: String,

    /// Heading text
    pub title: String,

    /// Outline depth (1 = top-level)
    pub level: u32,

    /// Rich-text body (empty for sections without content)
    pub body: String,

    /// Content lifecycle status
    pub status: ContentStatus,

    /// Plain-text body preview with markup stripped
    pub preview: String,
}

/// Business service owning one document's outline and content.
///
/// The tree exclusively owns structure, the store exclusively owns
/// body/status per section id; the service keeps the two consistent
/// (creation seeds an empty draft, deletion cascades) and joins them only
/// at render time.
pub struct DocumentService {
    tree: OutlineTree,
    contents: ContentStore,
    generator: Arc<dyn ContentGenerator>,
}

impl DocumentService {
    /// Create a service with an empty outline.
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            tree: OutlineTree::new(),
            contents: ContentStore::new(),
            generator,
        }
    }

    /// Create a service around an existing outline, seeding an empty draft
    /// entry for every section.
    pub fn with_outline(tree: OutlineTree, generator: Arc<dyn ContentGenerator>) -> Self {
        let mut contents = ContentStore::new();
        for id in tree.document_order() {
            contents.seed(&id);
        }
        Self {
            tree,
            contents,
            generator,
        }
    }

    /// Read access to the outline.
    pub fn tree(&self) -> &OutlineTree {
        &self.tree
    }

    /// Read access to the content store.
    pub fn contents(&self) -> &ContentStore {
        &self.contents
    }

    /// Create a section as the last child of `parent_id` (or a new
    /// top-level section) and seed its empty draft entry. Returns the new
    /// section's id.
    pub fn add_section(
        &mut self,
        parent_id: Option<&str>,
        title: impl Into<String>,
    ) -> Result<String, DocumentServiceError> {
        let id = self.tree.add_child(parent_id, title)?;
        self.contents.seed(&id);
        tracing::debug!("created section '{}'", id);
        Ok(id)
    }

    /// Create a section directly after an existing sibling.
    pub fn insert_section_after(
        &mut self,
        parent_id: Option<&str>,
        after_id: &str,
        title: impl Into<String>,
    ) -> Result<String, DocumentServiceError> {
        let id = self.tree.insert_child_after(parent_id, after_id, title)?;
        self.contents.seed(&id);
        tracing::debug!("created section '{}' after '{}'", id, after_id);
        Ok(id)
    }

    /// Update a section title. Identity and content are untouched.
    pub fn rename_section(
        &mut self,
        id: &str,
        new_title: impl Into<String>,
    ) -> Result<(), DocumentServiceError> {
        self.tree.rename(id, new_title)?;
        Ok(())
    }

    /// Delete a section and its subtree, cascading content entries.
    /// Returns the removed ids.
    pub fn delete_section(&mut self, id: &str) -> Result<Vec<String>, DocumentServiceError> {
        let removed = self.tree.delete(id)?;
        let dropped = self.contents.remove_many(&removed);
        tracing::debug!(
            "deleted section '{}' ({} nodes, {} content entries)",
            id,
            removed.len(),
            dropped
        );
        Ok(removed)
    }

    /// Re-parent a section (with its subtree); numbering is recomputed.
    pub fn move_section(
        &mut self,
        id: &str,
        new_parent: Option<&str>,
        position: Option<usize>,
    ) -> Result<(), DocumentServiceError> {
        self.tree.move_node(id, new_parent, position)?;
        Ok(())
    }

    /// Move a section among its siblings; numbering is recomputed.
    pub fn reorder_section(
        &mut self,
        id: &str,
        new_index: usize,
    ) -> Result<(), DocumentServiceError> {
        self.tree.reorder_child(id, new_index)?;
        Ok(())
    }

    /// Current content for a section (implicit empty draft when never
    /// written).
    pub fn content(&self, id: &str) -> Result<ContentEntry, DocumentServiceError> {
        if !self.tree.contains(id) {
            return Err(DocumentServiceError::node_not_found(id));
        }
        Ok(self.contents.get(id))
    }

    /// Record a manual body edit. Manual edits always land on `Draft`.
    pub fn edit_body(
        &mut self,
        id: &str,
        body: impl Into<String>,
    ) -> Result<ContentEntry, DocumentServiceError> {
        if !self.tree.contains(id) {
            return Err(DocumentServiceError::node_not_found(id));
        }
        self.contents.touch_draft(id, body);
        Ok(self.contents.get(id))
    }

    /// Explicit promotion to `Final`. The body is kept as-is; this is the
    /// only path to `Final` status.
    pub fn finalize(&mut self, id: &str) -> Result<ContentEntry, DocumentServiceError> {
        if !self.tree.contains(id) {
            return Err(DocumentServiceError::node_not_found(id));
        }
        let entry = self.contents.get(id);
        self.contents.set(id, entry.body, ContentStatus::Final);
        Ok(self.contents.get(id))
    }

    /// Generate the body for one section via the external collaborator.
    ///
    /// On success the entry becomes `(generated body, Generated)`. On
    /// failure the body is replaced with a visible inline error
    /// placeholder, the status stays `Draft`, and the failure is returned
    /// to the caller rather than swallowed. No automatic retry: the user
    /// re-triggers explicitly.
    pub async fn generate_section(
        &mut self,
        id: &str,
        requirements: &str,
    ) -> Result<ContentEntry, DocumentServiceError> {
        let (title, level) = {
            let node = self
                .tree
                .get(id)
                .ok_or_else(|| DocumentServiceError::node_not_found(id))?;
            (node.title.clone(), node.level)
        };

        let request = GenerationRequest {
            title,
            level,
            requirements: requirements.to_string(),
        };

        let generator = Arc::clone(&self.generator);
        match generator.generate(&request).await {
            Ok(generated) => {
                self.contents
                    .set(id, generated.content, ContentStatus::Generated);
                tracing::debug!("generated content for section '{}'", id);
                Ok(self.contents.get(id))
            }
            Err(err) => {
                let message = err.to_string();
                self.contents.set(
                    id,
                    format!(r#"<p class="generation-error">{}</p>"#, message),
                    ContentStatus::Draft,
                );
                tracing::warn!("content generation failed for section '{}': {}", id, message);
                Err(DocumentServiceError::from_generation(id, err))
            }
        }
    }

    /// Generate bodies for every section, strictly sequentially in
    /// document order.
    ///
    /// Each generation call fully completes (success or failure) before
    /// the next begins. The first failure halts the remaining steps and is
    /// returned; sections already generated keep their new content, and
    /// sections after the failing one are left untouched.
    pub async fn generate_all(
        &mut self,
        requirements: &str,
    ) -> Result<usize, DocumentServiceError> {
        let order = self.tree.document_order();
        let total = order.len();
        let mut generated = 0usize;

        for id in order {
            self.generate_section(&id, requirements).await?;
            generated += 1;
        }

        tracing::debug!("batch generation completed for {}/{} sections", generated, total);
        Ok(generated)
    }

    /// Numbering view of the current outline, in document order.
    pub fn toc(&self) -> Vec<TocEntry> {
        self.tree.to_toc()
    }

    /// Flatten the document in document order, joining structure with
    /// content. An empty outline renders as an empty sequence; substituting
    /// the placeholder outline is the caller's concern.
    pub fn render(&self) -> Vec<RenderedSection> {
        let mut sections = Vec::with_capacity(self.tree.len());
        for id in self.tree.document_order() {
            if let Some(node) = self.tree.get(&id) {
                let entry = self.contents.get(&id);
                sections.push(RenderedSection {
                    id: node.id.clone(),
                    order_no: node.order_no.clone(),
                    title: node.title.clone(),
                    level: node.level,
                    preview: strip_markup(&entry.body),
                    body: entry.body,
                    status: entry.status,
                });
            }
        }
        sections
    }

    /// Concatenated HTML view of the document, applying cosmetic style
    /// hints (font, per-level indent) to headings.
    pub fn render_html(&self, hints: &TocStyleHints) -> String {
        let mut html = String::new();
        for section in self.render() {
            let tag_level = section.level.min(6);
            html.push_str(&format!(
                "<h{tag} style=\"font-family:{font};font-size:{size}pt;margin-left:{indent}em\">{number} {title}</h{tag}>\n",
                tag = tag_level,
                font = hints.font_family,
                size = hints.font_size_pt,
                indent = hints.indent_em(section.level),
                number = section.order_no,
                title = section.title,
            ));
            if !section.body.is_empty() {
                html.push_str(&section.body);
                html.push('\n');
            }
        }
        html
    }
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "document_service_test.rs"]
mod document_service_test;

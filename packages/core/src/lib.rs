//! TenderDoc Core Outline and Content Engine
//!
//! This crate provides the document-outline data model, numbering, and
//! section content management for the TenderDoc bid-drafting system.
//!
//! # Architecture
//!
//! - **Structure/content split**: the outline tree exclusively owns node
//!   structure; the content store exclusively owns per-section bodies; the
//!   two are joined only at render time
//! - **Derived numbering**: dotted section numbers are recomputed from tree
//!   position on every structural change, never hand-edited
//! - **Collaborators behind traits**: content generation (and other REST
//!   collaborators) sit behind async seams so the core stays testable
//!
//! # Modules
//!
//! - [`models`] - Data structures (OutlineNode, ContentEntry, TOC shapes)
//! - [`tree`] - Outline tree, traversal, and the numbering pass
//! - [`services`] - Business services (DocumentService, ContentStore)
//! - [`generation`] - Content-generation collaborator seam and HTTP client
//! - [`utils`] - Rich-text stripping helpers

pub mod generation;
pub mod models;
pub mod services;
pub mod tree;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use services::*;
pub use tree::{number_toc, sample_toc, OutlineTree, TreeError};

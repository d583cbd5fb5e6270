//! Data Models
//!
//! This module contains the core data structures used throughout TenderDoc:
//!
//! - `OutlineNode` - one titled section of a document outline
//! - `ContentEntry` - rich-text body and lifecycle status for one node
//! - `TocItem` / `TocEntry` / `FlatSection` - numbering input/output shapes
//! - `TocStyleHints` - cosmetic render attributes from the style collaborator
//!
//! Structure and content are deliberately separate models: the outline tree
//! owns node structure, the content store owns bodies, and the two are
//! joined only at render time.

mod content;
mod node;
mod style;
mod toc;

pub use content::{ContentEntry, ContentStatus};
pub use node::{OutlineNode, ValidationError};
pub use style::TocStyleHints;
pub use toc::{FlatSection, TocEntry, TocItem};

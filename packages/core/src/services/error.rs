//! Service Layer Error Types
//!
//! This module defines error types for service-layer operations. Every
//! error is recovered at the boundary of the operation that raised it; no
//! error leaves the in-memory model structurally inconsistent.

use crate::generation::GenerationError;
use crate::models::ValidationError;
use crate::tree::TreeError;
use thiserror::Error;

/// Document service operation errors
///
/// - `NodeNotFound`: a structural operation referenced a missing section id
/// - `GenerationFailed`: the external content generation call failed;
///   retried only on explicit user re-trigger, never automatically
/// - `NetworkFailed`: a collaborator request never completed; surfaced
///   verbatim, not retried automatically
#[derive(Error, Debug)]
pub enum DocumentServiceError {
    /// Section not found by id
    #[error("Section not found: {id}")]
    NodeNotFound { id: String },

    /// Structural tree operation failed
    #[error("Structural operation failed: {0}")]
    Structural(#[source] TreeError),

    /// Validation failed for a section
    #[error("Section validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// External content generation failed
    #[error("Content generation failed for section {node_id}: {message}")]
    GenerationFailed { node_id: String, message: String },

    /// Collaborator request failed at the transport level
    #[error("Network request failed: {0}")]
    NetworkFailed(String),
}

impl DocumentServiceError {
    /// Create a section not found error
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    /// Create a generation failed error
    pub fn generation_failed(node_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GenerationFailed {
            node_id: node_id.into(),
            message: message.into(),
        }
    }

    /// Create a network failed error
    pub fn network_failed(message: impl Into<String>) -> Self {
        Self::NetworkFailed(message.into())
    }

    /// Classify a generator error for a given section: transport problems
    /// surface as `NetworkFailed`, everything else as `GenerationFailed`.
    pub(crate) fn from_generation(node_id: &str, err: GenerationError) -> Self {
        match err {
            GenerationError::Network(message) => Self::NetworkFailed(message),
            other => Self::generation_failed(node_id, other.to_string()),
        }
    }
}

impl From<TreeError> for DocumentServiceError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::NodeNotFound { id } => Self::NodeNotFound { id },
            other => Self::Structural(other),
        }
    }
}

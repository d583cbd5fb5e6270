//! Content Generation Collaborator
//!
//! The generation collaborator turns a section heading plus tender
//! requirements into a rich-text body. It lives behind the
//! [`ContentGenerator`] trait so the service layer can be driven by the
//! real HTTP backend in production and by scripted collaborators in tests.
//!
//! Failures are never retried automatically; regeneration happens only on
//! an explicit user re-trigger.

mod http;

pub use http::{extract_detail_message, HttpContentGenerator};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generation collaborator errors
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The collaborator answered with a non-2xx status
    #[error("Generation request rejected: {0}")]
    Rejected(String),

    /// The request never completed (DNS, connect, timeout, ...)
    #[error("Network failure: {0}")]
    Network(String),

    /// The collaborator answered 2xx but the payload was unusable
    #[error("Invalid generation response: {0}")]
    InvalidResponse(String),
}

/// Input for one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Section heading text
    pub title: String,

    /// Outline depth of the section (1 = top-level)
    pub level: u32,

    /// Free-form tender requirements guiding the generated body
    pub requirements: String,
}

/// Successful generation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    /// Rich-text body (HTML-like markup)
    pub content: String,
}

/// Seam between the document service and the external generation backend.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Produce a body for one section. Implementations report transport
    /// problems as [`GenerationError::Network`] and collaborator rejections
    /// as [`GenerationError::Rejected`].
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError>;
}

/// Configuration for the HTTP generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Generation endpoint URL
    pub endpoint: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/api/v1/sections/generate".to_string(),
            timeout_secs: 60,
        }
    }
}

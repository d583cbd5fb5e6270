//! Business Services
//!
//! This module contains the core business logic services:
//!
//! - `DocumentService` - section CRUD, generation, and rendering for one
//!   document (outline tree joined with the content store)
//! - `ContentStore` - per-section body/status storage
//! - `plan_upload` - pre-upload deduplication against the known asset list
//!
//! Services coordinate between the structural layer and the external
//! collaborators, implementing business rules and orchestrating batch
//! operations.

pub mod content_store;
pub mod document_service;
pub mod error;
pub mod upload;

pub use content_store::ContentStore;
pub use document_service::{DocumentService, RenderedSection};
pub use error::DocumentServiceError;
pub use upload::{plan_upload, UploadPlan};

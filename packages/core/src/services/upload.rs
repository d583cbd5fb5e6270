//! Pre-upload Deduplication
//!
//! The file-upload collaborator accepts a list of files plus a category
//! tag. The core's only contract with it is deduplication by filename
//! against the already-known asset list: known filenames are skipped, the
//! rest proceed. Order is preserved on both sides of the split.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of splitting an upload batch against the known asset list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPlan {
    /// Category tag forwarded to the upload collaborator
    pub category: String,

    /// Filenames that proceed to upload, in input order
    pub to_upload: Vec<String>,

    /// Filenames skipped because they are already known (or repeated
    /// within the batch itself)
    pub skipped: Vec<String>,
}

/// Split candidate filenames into new uploads and skipped duplicates.
///
/// A name repeated within the same batch is uploaded once and skipped on
/// every further occurrence.
///
/// # Examples
///
/// ```rust
/// use tenderdoc_core::services::plan_upload;
///
/// let known = vec!["specs.pdf".to_string()];
/// let candidates = vec!["specs.pdf".to_string(), "pricing.xlsx".to_string()];
///
/// let plan = plan_upload(&known, &candidates, "tender-attachments");
/// assert_eq!(plan.to_upload, ["pricing.xlsx"]);
/// assert_eq!(plan.skipped, ["specs.pdf"]);
/// ```
pub fn plan_upload(
    known_filenames: &[String],
    candidates: &[String],
    category: impl Into<String>,
) -> UploadPlan {
    let mut seen: HashSet<&str> = known_filenames.iter().map(String::as_str).collect();
    let mut to_upload = Vec::new();
    let mut skipped = Vec::new();

    for name in candidates {
        if seen.insert(name.as_str()) {
            to_upload.push(name.clone());
        } else {
            skipped.push(name.clone());
        }
    }

    UploadPlan {
        category: category.into(),
        to_upload,
        skipped,
    }
}

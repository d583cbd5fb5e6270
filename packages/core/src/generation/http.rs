//! HTTP implementation of the generation collaborator
//!
//! Posts `GenerationRequest` as JSON and reads back `{ "content": ... }`.
//! Non-2xx responses are turned into human-readable messages by
//! [`extract_detail_message`], which understands the backend's uniform
//! error contract: a `detail` field carrying either a string or a
//! structured array.

use super::{
    ContentGenerator, GeneratedContent, GenerationError, GenerationRequest, GeneratorConfig,
};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Generation collaborator backed by a REST endpoint.
pub struct HttpContentGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl HttpContentGenerator {
    /// Build a client for the configured endpoint.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| GenerationError::Network(err.to_string()))?;

        Ok(Self { client, config })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl ContentGenerator for HttpContentGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| GenerationError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(GenerationError::Rejected(extract_detail_message(
                status.as_u16(),
                &body,
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| GenerationError::InvalidResponse(err.to_string()))?;

        match payload.get("content").and_then(Value::as_str) {
            Some(content) => Ok(GeneratedContent {
                content: content.to_string(),
            }),
            None => Err(GenerationError::InvalidResponse(
                "response is missing the 'content' field".to_string(),
            )),
        }
    }
}

/// Extract a human-readable message from a REST collaborator failure body.
///
/// The backend reports failures as `{ "detail": ... }` where `detail` is
/// either a plain string or an array of validation items. Anything else
/// falls back to the bare HTTP status.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tenderdoc_core::generation::extract_detail_message;
///
/// let body = json!({ "detail": "rule pack not found" });
/// assert_eq!(extract_detail_message(404, &body), "rule pack not found");
///
/// assert_eq!(extract_detail_message(500, &json!({})), "HTTP 500");
/// ```
pub fn extract_detail_message(status: u16, body: &Value) -> String {
    match body.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(items)) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    Value::Object(fields) => fields
                        .get("msg")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| item.to_string()),
                    other => other.to_string(),
                })
                .collect();
            if parts.is_empty() {
                format!("HTTP {}", status)
            } else {
                parts.join("; ")
            }
        }
        _ => format!("HTTP {}", status),
    }
}

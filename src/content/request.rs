//! Generation request/response envelopes used at the HTTP boundary.

use super::ContentType;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

/// Message returned when a required field is absent or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: title, type, topic";

/// Incoming generation request as decoded from JSON.
///
/// Every field is optional at decode time so that a missing field is
/// reported as a validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GenerationRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    #[validate(required, length(min = 1))]
    pub content_type: Option<String>,
    /// Accepted for compatibility; not used by any template.
    pub platform: Option<String>,
    #[validate(required, length(min = 1))]
    pub topic: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        title: impl Into<String>,
        content_type: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            content_type: Some(content_type.into()),
            platform: None,
            topic: Some(topic.into()),
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Check required fields and resolve the content type.
    pub fn into_validated(self) -> Result<ValidatedRequest> {
        if let Err(errors) = self.validate() {
            debug!("Rejected generation request: {}", errors);
            return Err(Error::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        match (self.title, self.content_type, self.topic) {
            (Some(title), Some(tag), Some(topic)) => Ok(ValidatedRequest {
                title,
                content_type: ContentType::parse_or_default(&tag),
                requested_type: tag,
                topic,
            }),
            _ => Err(Error::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }

    /// Like [`into_validated`](Self::into_validated), but an unrecognized
    /// content type is an error instead of falling back to blog.
    pub fn into_validated_strict(self) -> Result<ValidatedRequest> {
        let validated = self.into_validated()?;
        if validated.is_fallback() {
            return Err(Error::Validation(format!(
                "Unknown content type: {}",
                validated.requested_type
            )));
        }
        Ok(validated)
    }
}

/// A request whose required fields are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub title: String,
    /// Resolved template, after the blog fallback.
    pub content_type: ContentType,
    /// Tag exactly as the client sent it.
    pub requested_type: String,
    pub topic: String,
}

impl ValidatedRequest {
    pub fn is_fallback(&self) -> bool {
        self.content_type.as_str() != self.requested_type
    }

    pub fn generate(&self) -> String {
        self.content_type.render(&self.title, &self.topic)
    }
}

/// Response envelope: `{ success, content }` or `{ success, error }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn ok(content: String) -> Self {
        Self {
            success: true,
            content: Some(content),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(message.into()),
        }
    }
}

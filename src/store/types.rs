use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::content::ContentType;

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub String);

impl ContentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Publication state of a content item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// User-owned grouping of content items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A single piece of authored text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub project_id: ProjectId,
    pub title: String,
    /// Stored as the raw tag; unknown tags are kept as-is.
    #[serde(rename = "type")]
    pub content_type: String,
    pub platform: String,
    pub body: String,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Template this item generates with.
    pub fn template_type(&self) -> ContentType {
        ContentType::parse_or_default(&self.content_type)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewContent {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub platform: Option<String>,
    pub body: Option<String>,
    pub status: Option<ContentStatus>,
}

impl NewContent {
    pub const DEFAULT_TITLE: &'static str = "Untitled";
    pub const DEFAULT_PLATFORM: &'static str = "website";

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Materialize into a stored item, filling defaults for absent fields.
    pub fn into_item(self, project_id: ProjectId) -> ContentItem {
        let now = Utc::now();
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_TITLE.to_string());

        ContentItem {
            id: ContentId::new(),
            project_id,
            title,
            content_type: self
                .content_type
                .unwrap_or_else(|| ContentType::default().as_str().to_string()),
            platform: self
                .platform
                .unwrap_or_else(|| Self::DEFAULT_PLATFORM.to_string()),
            body: self.body.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentUpdate {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub platform: Option<String>,
    pub body: Option<String>,
    pub status: Option<ContentStatus>,
}

impl ContentUpdate {
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Default::default()
        }
    }

    pub fn apply(self, item: &mut ContentItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(content_type) = self.content_type {
            item.content_type = content_type;
        }
        if let Some(platform) = self.platform {
            item.platform = platform;
        }
        if let Some(body) = self.body {
            item.body = body;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        item.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_content_defaults() {
        let item = NewContent::default().into_item(ProjectId::from("p1"));
        assert_eq!(item.title, "Untitled");
        assert_eq!(item.content_type, "blog");
        assert_eq!(item.platform, "website");
        assert_eq!(item.body, "");
        assert_eq!(item.status, ContentStatus::Draft);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_empty_title_becomes_untitled() {
        let item = NewContent::titled("").into_item(ProjectId::from("p1"));
        assert_eq!(item.title, "Untitled");
    }

    #[test]
    fn test_unknown_stored_type_generates_blog() {
        let mut item = NewContent::titled("x").into_item(ProjectId::from("p1"));
        item.content_type = "podcast".to_string();
        assert_eq!(item.template_type(), ContentType::Blog);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ContentStatus::Published).unwrap();
        assert_eq!(json, "\"published\"");
        let parsed: ContentStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, ContentStatus::Archived);
    }

    #[test]
    fn test_update_applies_only_present_fields() {
        let mut item = NewContent::titled("Keep me").into_item(ProjectId::from("p1"));
        ContentUpdate::body("new body").apply(&mut item);
        assert_eq!(item.title, "Keep me");
        assert_eq!(item.body, "new body");
        assert!(item.updated_at >= item.created_at);
    }
}

//! Template Content Generator
//!
//! Produces draft text for a content item by picking a fixed template for the
//! requested content type and interpolating the title and topic into it.
//! Generation is a pure function: no I/O, no shared state, and identical
//! inputs always give byte-identical output.

pub mod request;
pub mod templates;

pub use request::{GenerationRequest, GenerationResponse, ValidatedRequest};
pub use templates::TemplateFn;

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content archetypes with a dedicated template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Long-form article
    #[default]
    Blog,
    /// Short social media post
    Social,
    /// Email newsletter
    Email,
    /// Marketing copy
    Marketing,
    /// Step-by-step guide
    Guide,
    /// Video script
    Script,
}

impl ContentType {
    /// Every content type, in tag order.
    pub const ALL: [ContentType; 6] = [
        ContentType::Blog,
        ContentType::Social,
        ContentType::Email,
        ContentType::Marketing,
        ContentType::Guide,
        ContentType::Script,
    ];

    /// Wire tag used in requests and stored content items.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Social => "social",
            ContentType::Email => "email",
            ContentType::Marketing => "marketing",
            ContentType::Guide => "guide",
            ContentType::Script => "script",
        }
    }

    /// Resolve a tag, falling back to [`ContentType::Blog`] for anything
    /// unrecognized. Matching is exact and case-sensitive.
    pub fn parse_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// Template bound to this content type.
    pub fn template(&self) -> TemplateFn {
        match self {
            ContentType::Blog => templates::blog,
            ContentType::Social => templates::social,
            ContentType::Email => templates::email,
            ContentType::Marketing => templates::marketing,
            ContentType::Guide => templates::guide,
            ContentType::Script => templates::script,
        }
    }

    /// Fill this content type's template.
    pub fn render(&self, title: &str, topic: &str) -> String {
        (self.template())(title, topic)
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("Unknown content type: {}", s)))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate draft content for `title` and `topic`.
///
/// `content_type` is resolved with [`ContentType::parse_or_default`], so an
/// unknown tag silently produces a blog article. Callers validate that
/// `title` and `topic` are non-empty before calling.
pub fn generate(title: &str, content_type: &str, topic: &str) -> String {
    ContentType::parse_or_default(content_type).render(title, topic)
}

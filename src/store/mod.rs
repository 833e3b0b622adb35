//! Project and content persistence
//!
//! `ContentStore` is the CRUD seam the HTTP layer talks to. The in-memory
//! implementation backs the server and the tests; a hosted backend can sit
//! behind the same trait.

pub mod memory;
pub mod types;

pub use memory::MemoryContentStore;
pub use types::{
    ContentId, ContentItem, ContentStatus, ContentUpdate, NewContent, NewProject, Project,
    ProjectId, ProjectUpdate,
};

use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContentStore: Send + Sync + std::fmt::Debug {
    async fn create_project(&self, project: NewProject) -> Result<Project>;
    async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>>;
    /// Newest first.
    async fn list_projects(&self) -> Result<Vec<Project>>;
    async fn update_project(&self, id: &ProjectId, update: ProjectUpdate) -> Result<Project>;
    /// Removes the project and all of its content.
    async fn delete_project(&self, id: &ProjectId) -> Result<bool>;

    async fn create_content(&self, project_id: &ProjectId, content: NewContent)
        -> Result<ContentItem>;
    async fn get_content(&self, id: &ContentId) -> Result<Option<ContentItem>>;
    /// Newest first.
    async fn list_content(&self, project_id: &ProjectId) -> Result<Vec<ContentItem>>;
    async fn update_content(&self, id: &ContentId, update: ContentUpdate) -> Result<ContentItem>;
    async fn delete_content(&self, id: &ContentId) -> Result<bool>;
}

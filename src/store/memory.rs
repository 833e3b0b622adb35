use crate::error::{Error, Result};
use crate::store::types::{
    ContentId, ContentItem, ContentUpdate, NewContent, NewProject, Project, ProjectId,
    ProjectUpdate,
};
use crate::store::ContentStore;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Tables {
    projects: HashMap<ProjectId, Project>,
    content: HashMap<ContentId, ContentItem>,
}

/// Process-local store; contents are lost on restart.
#[derive(Debug, Clone)]
pub struct MemoryContentStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
        }
    }
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("Project name is required".to_string()));
    }
    Ok(())
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn create_project(&self, project: NewProject) -> Result<Project> {
        validate_name(&project.name)?;

        let now = Utc::now();
        let project = Project {
            id: ProjectId::new(),
            name: project.name,
            description: project.description.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.projects.insert(project.id.clone(), project.clone());
        debug!("Created project {}", project.id);
        Ok(project)
    }

    async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.get(id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let tables = self.tables.read().await;
        let mut result: Vec<Project> = tables.projects.values().cloned().collect();
        result.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(result)
    }

    async fn update_project(&self, id: &ProjectId, update: ProjectUpdate) -> Result<Project> {
        if let Some(ref name) = update.name {
            validate_name(name)?;
        }

        let mut tables = self.tables.write().await;
        let project = tables
            .projects
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(format!("project {}", id)))?;

        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        project.touch();
        Ok(project.clone())
    }

    async fn delete_project(&self, id: &ProjectId) -> Result<bool> {
        let mut tables = self.tables.write().await;
        if tables.projects.remove(id).is_none() {
            return Ok(false);
        }

        let before = tables.content.len();
        tables.content.retain(|_, item| item.project_id != *id);
        debug!(
            "Deleted project {} with {} content items",
            id,
            before - tables.content.len()
        );
        Ok(true)
    }

    async fn create_content(
        &self,
        project_id: &ProjectId,
        content: NewContent,
    ) -> Result<ContentItem> {
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(project_id) {
            return Err(Error::NotFound(format!("project {}", project_id)));
        }

        let item = content.into_item(project_id.clone());
        tables.content.insert(item.id.clone(), item.clone());
        debug!("Created content {} in project {}", item.id, project_id);
        Ok(item)
    }

    async fn get_content(&self, id: &ContentId) -> Result<Option<ContentItem>> {
        let tables = self.tables.read().await;
        Ok(tables.content.get(id).cloned())
    }

    async fn list_content(&self, project_id: &ProjectId) -> Result<Vec<ContentItem>> {
        let tables = self.tables.read().await;
        let mut result: Vec<ContentItem> = tables
            .content
            .values()
            .filter(|item| item.project_id == *project_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(result)
    }

    async fn update_content(&self, id: &ContentId, update: ContentUpdate) -> Result<ContentItem> {
        let mut tables = self.tables.write().await;
        let item = tables
            .content
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(format!("content {}", id)))?;

        update.apply(item);
        Ok(item.clone())
    }

    async fn delete_content(&self, id: &ContentId) -> Result<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.content.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::ContentStatus;

    #[tokio::test]
    async fn test_project_crud() {
        let store = MemoryContentStore::new();

        let project = store
            .create_project(NewProject::new("Launch").with_description("Q3 campaign"))
            .await
            .unwrap();
        assert_eq!(project.name, "Launch");
        assert_eq!(project.description, "Q3 campaign");

        let fetched = store.get_project(&project.id).await.unwrap().unwrap();
        assert_eq!(fetched, project);

        let updated = store
            .update_project(
                &project.id,
                ProjectUpdate {
                    name: Some("Launch v2".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Launch v2");
        assert_eq!(updated.description, "Q3 campaign");
        assert!(updated.updated_at >= project.updated_at);

        assert!(store.delete_project(&project.id).await.unwrap());
        assert!(!store.delete_project(&project.id).await.unwrap());
        assert!(store.get_project(&project.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_project_name_rejected() {
        let store = MemoryContentStore::new();
        let err = store.create_project(NewProject::new("   ")).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let store = MemoryContentStore::new();
        let err = store
            .update_project(&ProjectId::from("missing"), ProjectUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_content_requires_project() {
        let store = MemoryContentStore::new();
        let err = store
            .create_content(&ProjectId::from("missing"), NewContent::titled("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_content_listing_is_scoped_and_newest_first() {
        let store = MemoryContentStore::new();
        let a = store.create_project(NewProject::new("A")).await.unwrap();
        let b = store.create_project(NewProject::new("B")).await.unwrap();

        let first = store
            .create_content(&a.id, NewContent::titled("first"))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store
            .create_content(&a.id, NewContent::titled("second"))
            .await
            .unwrap();
        store
            .create_content(&b.id, NewContent::titled("other"))
            .await
            .unwrap();

        let listed = store.list_content(&a.id).await.unwrap();
        let ids: Vec<&ContentId> = listed.iter().map(|c| &c.id).collect();
        assert_eq!(ids, vec![&second.id, &first.id]);
    }

    #[tokio::test]
    async fn test_projects_listed_newest_first() {
        let store = MemoryContentStore::new();
        let older = store.create_project(NewProject::new("Older")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let newer = store.create_project(NewProject::new("Newer")).await.unwrap();

        let listed = store.list_projects().await.unwrap();
        let ids: Vec<&ProjectId> = listed.iter().map(|p| &p.id).collect();
        assert_eq!(ids, vec![&newer.id, &older.id]);
    }

    #[tokio::test]
    async fn test_equal_timestamps_list_in_id_order() {
        let store = MemoryContentStore::new();
        let project = store.create_project(NewProject::new("A")).await.unwrap();
        for title in ["x", "y", "z"] {
            store
                .create_content(&project.id, NewContent::titled(title))
                .await
                .unwrap();
        }
        store.create_project(NewProject::new("B")).await.unwrap();

        let stamp = Utc::now();
        {
            let mut tables = store.tables.write().await;
            for item in tables.content.values_mut() {
                item.created_at = stamp;
            }
            for project in tables.projects.values_mut() {
                project.created_at = stamp;
            }
        }

        let content = store.list_content(&project.id).await.unwrap();
        let mut expected: Vec<ContentId> = content.iter().map(|c| c.id.clone()).collect();
        expected.sort_by(|a, b| a.0.cmp(&b.0));
        let listed: Vec<ContentId> = content.into_iter().map(|c| c.id).collect();
        assert_eq!(listed, expected);

        let projects = store.list_projects().await.unwrap();
        assert!(projects[0].id.0 < projects[1].id.0);
    }

    #[tokio::test]
    async fn test_delete_project_cascades() {
        let store = MemoryContentStore::new();
        let project = store.create_project(NewProject::new("A")).await.unwrap();
        let item = store
            .create_content(&project.id, NewContent::titled("x"))
            .await
            .unwrap();

        store.delete_project(&project.id).await.unwrap();
        assert!(store.get_content(&item.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_content_update_and_delete() {
        let store = MemoryContentStore::new();
        let project = store.create_project(NewProject::new("A")).await.unwrap();
        let item = store
            .create_content(&project.id, NewContent::titled("x"))
            .await
            .unwrap();

        let updated = store
            .update_content(
                &item.id,
                ContentUpdate {
                    status: Some(ContentStatus::Published),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, ContentStatus::Published);
        assert_eq!(updated.title, "x");

        assert!(store.delete_content(&item.id).await.unwrap());
        let err = store
            .update_content(&item.id, ContentUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}

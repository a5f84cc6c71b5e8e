//! In-memory backend using DashMap (transient, process-local)

use crate::course::{Course, CourseUpdate, NewCourse};
use crate::error::{RegistryError, Result};
use crate::registry::{validate_title, CourseRegistry};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Course registry backed by a concurrent in-process map. Contents are
/// lost on shutdown; DashMap provides the synchronization.
pub struct MemoryRegistry {
    courses: Arc<DashMap<String, Course>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self {
            courses: Arc::new(DashMap::new()),
        }
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseRegistry for MemoryRegistry {
    async fn list(&self) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = self
            .courses
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        // Deterministic output; ordering is not part of the contract.
        courses.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(courses)
    }

    async fn get(&self, id: &str) -> Result<Course> {
        self.courses
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    async fn create(&self, new: NewCourse) -> Result<Course> {
        validate_title(&new.title)?;

        let id = uuid::Uuid::new_v4().to_string();
        let course = Course::new(id.clone(), new.title, new.description);
        self.courses.insert(id, course.clone());

        tracing::debug!("Created course {} in memory", course.id);
        Ok(course)
    }

    async fn update(&self, id: &str, update: CourseUpdate) -> Result<Course> {
        let mut entry = self
            .courses
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        update.apply(entry.value_mut());
        Ok(entry.value().clone())
    }

    async fn delete(&self, id: &str) -> Result<Option<Course>> {
        Ok(self.courses.remove(id).map(|(_, course)| course))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let registry = MemoryRegistry::new();

        let created = registry
            .create(NewCourse {
                title: "Node".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let fetched = registry.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Node");
        assert_eq!(fetched.description, None);
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let registry = MemoryRegistry::new();

        let a = registry
            .create(NewCourse {
                title: "Rust".to_string(),
                description: None,
            })
            .await
            .unwrap();
        let b = registry
            .create(NewCourse {
                title: "Rust".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(registry.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let registry = MemoryRegistry::new();

        for title in ["", "   "] {
            let err = registry
                .create(NewCourse {
                    title: title.to_string(),
                    description: None,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, RegistryError::Validation(_)));
        }

        // Failed validation must not mutate the collection
        assert!(registry.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let registry = MemoryRegistry::new();
        let err = registry.get("missing").await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let registry = MemoryRegistry::new();

        let created = registry
            .create(NewCourse {
                title: "Node".to_string(),
                description: None,
            })
            .await
            .unwrap();

        // Only description supplied; title must survive
        let updated = registry
            .update(
                &created.id,
                CourseUpdate {
                    title: None,
                    description: Some("intro".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Node");
        assert_eq!(updated.description, Some("intro".to_string()));
        assert_eq!(updated.created_at, created.created_at);

        let fetched = registry.get(&created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let registry = MemoryRegistry::new();
        let err = registry
            .update("missing", CourseUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let registry = MemoryRegistry::new();

        let created = registry
            .create(NewCourse {
                title: "React".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let removed = registry.delete(&created.id).await.unwrap();
        assert_eq!(removed.map(|c| c.id), Some(created.id.clone()));

        // Gone afterwards, and a second delete is a silent no-op
        assert!(matches!(
            registry.get(&created.id).await.unwrap_err(),
            RegistryError::NotFound(_)
        ));
        assert!(registry.delete(&created.id).await.unwrap().is_none());
    }
}

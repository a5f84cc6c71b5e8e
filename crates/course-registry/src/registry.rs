//! The registry trait both backends implement

use crate::course::{Course, CourseUpdate, NewCourse};
use crate::error::Result;
use async_trait::async_trait;

/// CRUD operations over the course collection.
///
/// Every operation is a single atomic step against the backing store.
/// Lookups on a missing id report `RegistryError::NotFound`, except
/// `delete`, which is an idempotent no-op returning `None`.
#[async_trait]
pub trait CourseRegistry: Send + Sync {
    /// All courses currently held. Empty collection returns an empty vec.
    async fn list(&self) -> Result<Vec<Course>>;

    /// The course with `id`, or `NotFound`.
    async fn get(&self, id: &str) -> Result<Course>;

    /// Validates the title, assigns a fresh id, inserts, and returns the
    /// stored course. Validation failure leaves the collection untouched.
    async fn create(&self, new: NewCourse) -> Result<Course>;

    /// Merges the provided fields onto the course with `id`, preserving
    /// `id` and `created_at`. `NotFound` if absent.
    async fn update(&self, id: &str, update: CourseUpdate) -> Result<Course>;

    /// Removes and returns the course with `id`, or `None` if absent.
    async fn delete(&self, id: &str) -> Result<Option<Course>>;
}

/// Reject empty or whitespace-only titles before touching the store.
pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(crate::error::RegistryError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}

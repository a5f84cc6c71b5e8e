//! Course entity and per-operation request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course record. `id` and `created_at` are assigned at creation and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn new(id: String, title: String, description: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
            created_at: Utc::now(),
        }
    }
}

/// Fields for creating a course. Title is required and validated by the
/// registry before any insert happens.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    // Defaulted so an absent title surfaces as a validation error rather
    // than a deserialization failure.
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}

/// Fields for updating a course. Absent fields keep their prior values
/// (merge semantics, not full replace).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CourseUpdate {
    /// Apply this update onto an existing course, preserving identity.
    pub fn apply(self, course: &mut Course) {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(description) = self.description {
            course.description = Some(description);
        }
    }
}

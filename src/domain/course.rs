//! Course domain entity.

use serde::{Deserialize, Serialize};

use super::Category;

/// A course offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identifier (0 before the first write)
    #[serde(default)]
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Required reference to the owning category
    pub category_id: i32,
    /// Eager-loaded category; ignored on writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Course {
    /// Create a course that has not been persisted yet
    pub fn new(title: impl Into<String>, category_id: i32) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: None,
            category_id,
            category: None,
        }
    }

    /// Set the course description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

//! Category domain entity.

use serde::{Deserialize, Serialize};

/// Groups courses by subject. Owns zero or more courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier (0 before the first write)
    #[serde(default)]
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Create a category that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

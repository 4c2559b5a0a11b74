//! Enrollment domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Course, Instructor};

/// Links a course to the instructor teaching it.
///
/// `enrolled_at` belongs to the system: the repository overwrites it with
/// the current time on every add and update, whatever the caller sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(default)]
    pub id: i32,
    pub course_id: i32,
    pub instructor_id: i32,
    #[serde(default = "Utc::now")]
    pub enrolled_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Instructor>,
}

impl Enrollment {
    /// Create an enrollment that has not been persisted yet
    pub fn new(course_id: i32, instructor_id: i32) -> Self {
        Self {
            id: 0,
            course_id,
            instructor_id,
            enrolled_at: Utc::now(),
            course: None,
            instructor: None,
        }
    }

    /// Stamp the enrollment with the current time
    pub fn touch(&mut self) {
        self.enrolled_at = Utc::now();
    }
}

//! Enrollment repository.
//!
//! Differs from the other catalog repositories in three ways:
//! - `enrolled_at` is stamped with the current time on add and update
//! - update merges onto the stored row instead of overwriting it
//! - delete is not supported and always fails with `NotImplemented`

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, LoaderTrait, Set};

use super::base::{EntityStore, Resource};
use super::entities::{course, enrollment, instructor};
use crate::domain::{Course, Enrollment, Instructor};

pub type EnrollmentRepository = EntityStore<Enrollment>;

#[async_trait]
impl Resource for Enrollment {
    type Entity = enrollment::Entity;
    type Model = enrollment::Model;
    type ActiveModel = enrollment::ActiveModel;

    const NAME: &'static str = "Enrollment";
    const DELETABLE: bool = false;

    fn id(&self) -> i32 {
        self.id
    }

    fn id_column() -> enrollment::Column {
        enrollment::Column::Id
    }

    fn to_active_model(&self, id: ActiveValue<i32>) -> enrollment::ActiveModel {
        enrollment::ActiveModel {
            id,
            course_id: Set(self.course_id),
            instructor_id: Set(self.instructor_id),
            enrolled_at: Set(self.enrolled_at),
        }
    }

    fn from_model(model: enrollment::Model) -> Self {
        Enrollment::from(model)
    }

    async fn hydrate(db: &DatabaseConnection, models: Vec<enrollment::Model>) -> Result<Vec<Self>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let courses = models.load_one(course::Entity, db).await?;
        let instructors = models.load_one(instructor::Entity, db).await?;

        Ok(models
            .into_iter()
            .zip(courses.into_iter().zip(instructors))
            .map(|(model, (course, instructor))| Enrollment {
                course: course.map(Course::from),
                instructor: instructor.map(Instructor::from),
                ..Enrollment::from(model)
            })
            .collect())
    }

    fn before_insert(&mut self) {
        self.touch();
    }

    fn merge_update(mut stored: Self, incoming: Self) -> Self {
        stored.course_id = incoming.course_id;
        stored.instructor_id = incoming.instructor_id;
        stored.touch();
        stored
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    #[test]
    fn test_before_insert_replaces_caller_timestamp() {
        let mut enrollment = Enrollment::new(1, 2);
        enrollment.enrolled_at = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();

        enrollment.before_insert();

        assert!(Utc::now() - enrollment.enrolled_at < Duration::seconds(5));
    }

    #[test]
    fn test_merge_update_copies_only_references() {
        let old = Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap();
        let mut stored = Enrollment::new(1, 1);
        stored.id = 7;
        stored.enrolled_at = old;

        let mut incoming = Enrollment::new(3, 4);
        incoming.id = 99;
        incoming.enrolled_at = old;

        let merged = Enrollment::merge_update(stored, incoming);

        assert_eq!(merged.id, 7);
        assert_eq!(merged.course_id, 3);
        assert_eq!(merged.instructor_id, 4);
        assert!(merged.enrolled_at > old);
    }

    #[test]
    fn test_delete_is_unsupported() {
        assert!(!<Enrollment as Resource>::DELETABLE);
        assert!(<Course as Resource>::DELETABLE);
    }
}

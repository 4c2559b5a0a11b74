//! Catalog command - CRUD over categories, courses, instructors and enrollments.

use super::{connect_services, print_json};
use crate::cli::args::{CatalogAction, CatalogArgs, EntityKind};
use crate::config::Config;
use crate::domain::{Category, Course, Enrollment, Instructor};
use crate::errors::AppResult;
use crate::services::Services;

/// Execute the catalog command
pub async fn execute(args: CatalogArgs, config: Config) -> AppResult<()> {
    let services = connect_services(&config).await?;

    match args.action {
        CatalogAction::List { kind } => list(&services, kind).await,
        CatalogAction::Show { kind, id } => show(&services, kind, id).await,
        CatalogAction::Delete { kind, id } => delete(&services, kind, id).await,
        CatalogAction::AddCategory { name } => {
            let category = services.categories().add(Category::new(name)).await?;
            tracing::info!(id = category.id, "Category added");
            print_json(&category)
        }
        CatalogAction::UpdateCategory { id, name } => {
            let mut category = Category::new(name);
            category.id = id;
            print_json(&services.categories().update(category).await?)
        }
        CatalogAction::AddCourse {
            title,
            category_id,
            description,
        } => {
            let course = services
                .courses()
                .add(course_from_args(title, category_id, description))
                .await?;
            tracing::info!(id = course.id, "Course added");
            print_json(&course)
        }
        CatalogAction::UpdateCourse {
            id,
            title,
            category_id,
            description,
        } => {
            let mut course = course_from_args(title, category_id, description);
            course.id = id;
            print_json(&services.courses().update(course).await?)
        }
        CatalogAction::AddInstructor { name, email, phone } => {
            let instructor = services
                .instructors()
                .add(instructor_from_args(name, email, phone))
                .await?;
            tracing::info!(id = instructor.id, "Instructor added");
            print_json(&instructor)
        }
        CatalogAction::UpdateInstructor {
            id,
            name,
            email,
            phone,
        } => {
            let mut instructor = instructor_from_args(name, email, phone);
            instructor.id = id;
            print_json(&services.instructors().update(instructor).await?)
        }
        CatalogAction::Enroll {
            course_id,
            instructor_id,
        } => {
            let enrollment = services
                .enrollments()
                .add(Enrollment::new(course_id, instructor_id))
                .await?;
            tracing::info!(id = enrollment.id, "Enrollment added");
            print_json(&enrollment)
        }
        CatalogAction::UpdateEnrollment {
            id,
            course_id,
            instructor_id,
        } => {
            let mut enrollment = Enrollment::new(course_id, instructor_id);
            enrollment.id = id;
            print_json(&services.enrollments().update(enrollment).await?)
        }
    }
}

fn course_from_args(title: String, category_id: i32, description: Option<String>) -> Course {
    let course = Course::new(title, category_id);
    match description {
        Some(description) => course.with_description(description),
        None => course,
    }
}

fn instructor_from_args(name: String, email: String, phone: Option<String>) -> Instructor {
    let instructor = Instructor::new(name, email);
    match phone {
        Some(phone) => instructor.with_phone(phone),
        None => instructor,
    }
}

async fn list(services: &Services, kind: EntityKind) -> AppResult<()> {
    match kind {
        EntityKind::Categories => print_json(&services.categories().get_all().await?),
        EntityKind::Courses => print_json(&services.courses().get_all().await?),
        EntityKind::Instructors => print_json(&services.instructors().get_all().await?),
        EntityKind::Enrollments => print_json(&services.enrollments().get_all().await?),
    }
}

async fn show(services: &Services, kind: EntityKind, id: i32) -> AppResult<()> {
    match kind {
        EntityKind::Categories => print_json(&services.categories().get_by_id(id).await?),
        EntityKind::Courses => print_json(&services.courses().get_by_id(id).await?),
        EntityKind::Instructors => print_json(&services.instructors().get_by_id(id).await?),
        EntityKind::Enrollments => print_json(&services.enrollments().get_by_id(id).await?),
    }
}

async fn delete(services: &Services, kind: EntityKind, id: i32) -> AppResult<()> {
    tracing::info!(?kind, id, "Deleting record");
    match kind {
        EntityKind::Categories => print_json(&services.categories().delete(id).await?),
        EntityKind::Courses => print_json(&services.courses().delete(id).await?),
        EntityKind::Instructors => print_json(&services.instructors().delete(id).await?),
        EntityKind::Enrollments => print_json(&services.enrollments().delete(id).await?),
    }
}

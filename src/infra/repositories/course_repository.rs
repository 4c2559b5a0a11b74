//! Course repository. Eager-loads each course's category.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, LoaderTrait, Set};

use super::base::{EntityStore, Resource};
use super::entities::{category, course};
use crate::domain::{Category, Course};

pub type CourseRepository = EntityStore<Course>;

#[async_trait]
impl Resource for Course {
    type Entity = course::Entity;
    type Model = course::Model;
    type ActiveModel = course::ActiveModel;

    const NAME: &'static str = "Course";

    fn id(&self) -> i32 {
        self.id
    }

    fn id_column() -> course::Column {
        course::Column::Id
    }

    fn to_active_model(&self, id: ActiveValue<i32>) -> course::ActiveModel {
        course::ActiveModel {
            id,
            title: Set(self.title.clone()),
            description: Set(self.description.clone()),
            category_id: Set(self.category_id),
        }
    }

    fn from_model(model: course::Model) -> Self {
        Course::from(model)
    }

    async fn hydrate(db: &DatabaseConnection, models: Vec<course::Model>) -> Result<Vec<Self>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let categories = models.load_one(category::Entity, db).await?;

        Ok(models
            .into_iter()
            .zip(categories)
            .map(|(model, category)| Course {
                category: category.map(Category::from),
                ..Course::from(model)
            })
            .collect())
    }
}

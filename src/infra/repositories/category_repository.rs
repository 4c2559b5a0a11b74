//! Category repository.

use sea_orm::{ActiveValue, Set};

use super::base::{EntityStore, Resource};
use super::entities::category;
use crate::domain::Category;

/// Categories are plain CRUD: no relations are eager-loaded.
pub type CategoryRepository = EntityStore<Category>;

impl Resource for Category {
    type Entity = category::Entity;
    type Model = category::Model;
    type ActiveModel = category::ActiveModel;

    const NAME: &'static str = "Category";

    fn id(&self) -> i32 {
        self.id
    }

    fn id_column() -> category::Column {
        category::Column::Id
    }

    fn to_active_model(&self, id: ActiveValue<i32>) -> category::ActiveModel {
        category::ActiveModel {
            id,
            name: Set(self.name.clone()),
        }
    }

    fn from_model(model: category::Model) -> Self {
        Category::from(model)
    }
}

//! Instructor repository.

use sea_orm::{ActiveValue, Set};

use super::base::{EntityStore, Resource};
use super::entities::instructor;
use crate::domain::Instructor;

pub type InstructorRepository = EntityStore<Instructor>;

impl Resource for Instructor {
    type Entity = instructor::Entity;
    type Model = instructor::Model;
    type ActiveModel = instructor::ActiveModel;

    const NAME: &'static str = "Instructor";

    fn id(&self) -> i32 {
        self.id
    }

    fn id_column() -> instructor::Column {
        instructor::Column::Id
    }

    fn to_active_model(&self, id: ActiveValue<i32>) -> instructor::ActiveModel {
        instructor::ActiveModel {
            id,
            name: Set(self.name.clone()),
            email: Set(self.email.clone()),
            phone: Set(self.phone.clone()),
        }
    }

    fn from_model(model: instructor::Model) -> Self {
        Instructor::from(model)
    }
}

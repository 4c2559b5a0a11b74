//! Generic repository contract and its single SeaORM-backed implementation.
//!
//! Every catalog entity shares one CRUD shape. The per-entity differences
//! (which relations to eager-load, how an update is applied, whether delete
//! is supported) live on the [`Resource`] capability trait, so
//! [`EntityStore`] is written once and instantiated per entity.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::errors::{AppError, AppResult, OptionExt};

/// CRUD contract shared by all catalog repositories.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Persist a new record and return it with its store-assigned id.
    async fn add(&self, entity: T) -> AppResult<T>;

    /// Fetch one record with its direct relations resolved.
    async fn get_by_id(&self, id: i32) -> AppResult<T>;

    /// Fetch every record, ordered by id. Empty stores yield an empty vec.
    async fn get_all(&self) -> AppResult<Vec<T>>;

    /// Overwrite the record identified by `entity`'s id.
    async fn update(&self, entity: T) -> AppResult<T>;

    /// Remove a record and return the removed value.
    async fn delete(&self, id: i32) -> AppResult<T>;
}

/// Capabilities an entity needs to be stored by [`EntityStore`].
///
/// Identity (`id`, `id_column`) and eager loading (`hydrate`) are required.
/// `before_insert`, `merge_update` and `DELETABLE` are behavior hooks whose
/// defaults give plain CRUD semantics.
#[async_trait]
pub trait Resource: Clone + Send + Sync + Sized + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: FromQueryResult + IntoActiveModel<Self::ActiveModel> + Send + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;

    /// Entity name used in errors and logs
    const NAME: &'static str;

    /// Whether `delete` is supported at all
    const DELETABLE: bool = true;

    fn id(&self) -> i32;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    /// Build an active model with every column set, using `id` for the key.
    fn to_active_model(&self, id: ActiveValue<i32>) -> Self::ActiveModel;

    /// Convert a row without resolving relations.
    fn from_model(model: Self::Model) -> Self;

    /// Convert rows, resolving direct relations.
    async fn hydrate(_db: &DatabaseConnection, models: Vec<Self::Model>) -> Result<Vec<Self>, DbErr> {
        Ok(models.into_iter().map(Self::from_model).collect())
    }

    /// Adjust a new entity before it is written.
    fn before_insert(&mut self) {}

    /// Combine the stored record with the caller's value. Blind overwrite by default.
    fn merge_update(_stored: Self, incoming: Self) -> Self {
        incoming
    }
}

/// SeaORM repository for any [`Resource`].
pub struct EntityStore<R: Resource> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> EntityStore<R> {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    async fn find_model(&self, id: i32) -> AppResult<Option<R::Model>> {
        <R::Entity as EntityTrait>::find()
            .filter(R::id_column().eq(id))
            .one(&self.db)
            .await
            .map_err(store_error::<R>("find"))
    }

    async fn hydrate_one(&self, model: R::Model) -> AppResult<R> {
        R::hydrate(&self.db, vec![model])
            .await
            .map_err(store_error::<R>("load relations"))?
            .pop()
            .ok_or_not_found(R::NAME)
    }
}

/// Wrap a store failure, keeping the original `DbErr` as the source.
fn store_error<R: Resource>(operation: &'static str) -> impl FnOnce(DbErr) -> AppError {
    move |err| {
        tracing::error!(entity = R::NAME, operation, "Store rejected operation: {}", err);
        AppError::Persistence(err)
    }
}

#[async_trait]
impl<R: Resource> Repository<R> for EntityStore<R> {
    async fn add(&self, mut entity: R) -> AppResult<R> {
        entity.before_insert();
        tracing::debug!(entity = R::NAME, "Adding record");

        let model = entity
            .to_active_model(ActiveValue::NotSet)
            .insert(&self.db)
            .await
            .map_err(store_error::<R>("insert"))?;

        self.hydrate_one(model).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<R> {
        let model = self.find_model(id).await?.ok_or_not_found(R::NAME)?;
        self.hydrate_one(model).await
    }

    async fn get_all(&self) -> AppResult<Vec<R>> {
        let models = <R::Entity as EntityTrait>::find()
            .order_by_asc(R::id_column())
            .all(&self.db)
            .await
            .map_err(store_error::<R>("find all"))?;

        R::hydrate(&self.db, models)
            .await
            .map_err(store_error::<R>("load relations"))
    }

    async fn update(&self, entity: R) -> AppResult<R> {
        let id = entity.id();
        tracing::debug!(entity = R::NAME, id, "Updating record");

        // Existence is checked before any write is attempted
        let stored = self.find_model(id).await?.ok_or_not_found(R::NAME)?;
        let merged = R::merge_update(R::from_model(stored), entity);

        let model = merged
            .to_active_model(ActiveValue::Set(id))
            .update(&self.db)
            .await
            .map_err(store_error::<R>("update"))?;

        self.hydrate_one(model).await
    }

    async fn delete(&self, id: i32) -> AppResult<R> {
        if !R::DELETABLE {
            tracing::warn!(entity = R::NAME, id, "Delete requested for entity without delete support");
            return Err(AppError::not_implemented(format!("{} delete", R::NAME)));
        }

        let existing = self.get_by_id(id).await?;

        let result = <R::Entity as EntityTrait>::delete_many()
            .filter(R::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(store_error::<R>("delete"))?;

        // Removed by a concurrent caller between the lookup and the delete
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(R::NAME));
        }

        tracing::debug!(entity = R::NAME, id, "Deleted record");
        Ok(existing)
    }
}

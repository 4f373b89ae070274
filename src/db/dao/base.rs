use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, IntoActiveModel,
    PrimaryKeyTrait, Select,
};

use super::error::{DaoLayerError, DaoResult};

/// Shared persistence surface for the entity DAOs. Primary keys are
/// auto-incremented i64s assigned by the database, so `insert` never
/// touches the id column.
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = Self::Entity> + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<i64> + Send + Sync,
{
    type Entity: EntityTrait + Send + Sync;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    async fn insert(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        data.into_active_model()
            .insert(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: i64) -> DaoResult<Option<<Self::Entity as EntityTrait>::Model>> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn require(&self, id: i64) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        self.find_by_id(id).await?.ok_or(DaoLayerError::NotFound {
            entity: std::any::type_name::<Self::Entity>(),
            id,
        })
    }

    async fn find_all(
        &self,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        apply(Self::Entity::find())
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn find_one(
        &self,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Option<<Self::Entity as EntityTrait>::Model>> {
        apply(Self::Entity::find())
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn update(
        &self,
        id: i64,
        apply: impl FnOnce(&mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let model = self.require(id).await?;

        let mut active = model.into_active_model();
        apply(&mut active);

        active.update(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn delete(&self, id: i64) -> DaoResult<i64> {
        let result = Self::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: std::any::type_name::<Self::Entity>(),
                id,
            });
        }

        Ok(id)
    }
}

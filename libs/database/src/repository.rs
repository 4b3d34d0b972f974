//! Generic SeaORM gateway over one entity with an integer-like primary key.
//!
//! Domain gateways wrap a `BaseRepository<entity::Entity>` and add their own
//! queries through [`BaseRepository::db`]. Every write runs in its own
//! transaction; gateways that span several tables open one with
//! [`BaseRepository::begin`].

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, PrimaryKeyTrait, TransactionTrait,
};
use std::marker::PhantomData;

type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Starts a transaction. Dropping it without `commit` rolls back.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.db.begin().await
    }

    /// Inserts the row and returns it as stored, with the generated key.
    pub async fn insert(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        let txn = self.begin().await?;
        let stored = model.insert(&txn).await?;
        txn.commit().await?;
        Ok(stored)
    }

    pub async fn find_by_id(
        &self,
        id: impl Into<PrimaryKeyOf<E>>,
    ) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(&self.db).await
    }

    /// Writes every `Set` column. Fails with `RecordNotUpdated` when the key matches nothing.
    pub async fn update(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        let txn = self.begin().await?;
        let stored = model.update(&txn).await?;
        txn.commit().await?;
        Ok(stored)
    }

    /// Returns the number of deleted rows (0 or 1).
    pub async fn delete_by_id(&self, id: impl Into<PrimaryKeyOf<E>>) -> Result<u64, DbErr> {
        let txn = self.begin().await?;
        let result = E::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(result.rows_affected)
    }
}

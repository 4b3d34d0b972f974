use async_trait::async_trait;
use database::BaseRepository;
use domain_users::{UserError, entity::user};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::{
    entity::{address, country, locality},
    error::{LocationError, LocationResult},
    models::{Address, Country, Locality},
    repository::{AddressRepository, CountryRepository, LocalityRepository},
};

fn db_error(e: DbErr) -> LocationError {
    LocationError::Internal(format!("Database error: {}", e))
}

/// A dangling `fk_locality_id` is the caller's mistake, not an outage
fn write_error(e: DbErr) -> LocationError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => LocationError::InvalidLocality,
        _ => db_error(e),
    }
}

pub struct PgAddressRepository {
    base: BaseRepository<address::Entity>,
}

impl PgAddressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn create(&self, input: Address) -> LocationResult<Address> {
        let model = self
            .base
            .insert(address::new_active_model(input))
            .await
            .map_err(write_error)?;

        tracing::info!(address_id = model.address_id, "Created address");
        Ok(model.into())
    }

    async fn create_linked(&self, input: Address, user_id: i32) -> LocationResult<Address> {
        let txn = self.base.begin().await.map_err(db_error)?;

        let model = address::new_active_model(input)
            .insert(&txn)
            .await
            .map_err(write_error)?;

        let linked = user::Entity::update_many()
            .col_expr(user::Column::FkAddressId, Expr::value(model.address_id))
            .filter(user::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(db_error)?;
        if linked.rows_affected == 0 {
            // Dropping the transaction discards the address row
            return Err(UserError::UserNotFound(user_id).into());
        }

        txn.commit().await.map_err(db_error)?;

        tracing::info!(address_id = model.address_id, user_id, "Created linked address");
        Ok(model.into())
    }

    async fn update(&self, input: Address) -> LocationResult<Address> {
        let id = input.id;
        let model = self
            .base
            .update(input.into())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
                    LocationError::AddressNotFound(id)
                }
                e => write_error(e),
            })?;

        tracing::info!(address_id = id, "Updated address");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> LocationResult<bool> {
        let rows = self.base.delete_by_id(id).await.map_err(db_error)?;
        Ok(rows > 0)
    }

    async fn find_by_id(&self, id: i32) -> LocationResult<Option<Address>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> LocationResult<Vec<Address>> {
        let models = address::Entity::find()
            .order_by_asc(address::Column::AddressId)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_street_name(&self, street_name: &str) -> LocationResult<Vec<Address>> {
        let models = address::Entity::find()
            .filter(address::Column::StreetName.eq(street_name))
            .order_by_asc(address::Column::AddressId)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_locality_id(&self, locality_id: i32) -> LocationResult<Vec<Address>> {
        let models = address::Entity::find()
            .filter(address::Column::FkLocalityId.eq(locality_id))
            .order_by_asc(address::Column::AddressId)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

pub struct PgLocalityRepository {
    base: BaseRepository<locality::Entity>,
}

impl PgLocalityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl LocalityRepository for PgLocalityRepository {
    async fn find_by_id(&self, id: i32) -> LocationResult<Option<Locality>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> LocationResult<Vec<Locality>> {
        let models = locality::Entity::find()
            .order_by_asc(locality::Column::PostalCode)
            .order_by_asc(locality::Column::Town)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

pub struct PgCountryRepository {
    base: BaseRepository<country::Entity>,
}

impl PgCountryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn find_by_id(&self, id: i32) -> LocationResult<Option<Country>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> LocationResult<Vec<Country>> {
        let models = country::Entity::find()
            .order_by_asc(country::Column::CountryName)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_locality_row_mapping() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![locality::Model {
                locality_id: 3,
                postal_code: Some("4000".to_string()),
                town: Some("Liège".to_string()),
                sub_town: None,
                main_town: Some("Liège".to_string()),
                province: Some("Liège".to_string()),
                fk_country_id: 1,
            }]])
            .into_connection();
        let repo = PgLocalityRepository::new(db);

        let found = repo.find_by_id(3).await.unwrap().unwrap();
        assert_eq!(found.postal_code.as_deref(), Some("4000"));
        assert_eq!(found.country_id, 1);
    }

    #[tokio::test]
    async fn test_missing_address_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<address::Model>::new()])
            .into_connection();
        let repo = PgAddressRepository::new(db);

        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }
}

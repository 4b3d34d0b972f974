use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    SqlErr,
};

use crate::{
    entity::{role, user},
    error::{UserError, UserResult},
    models::{Role, User},
    repository::UserRepository,
    role_repository::RoleRepository,
};

fn db_error(e: DbErr) -> UserError {
    UserError::Internal(format!("Database error: {}", e))
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Unknown `fk_role_id` on a users row
fn is_role_fk_violation(e: &DbErr) -> bool {
    matches!(
        e.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) if msg.contains(ROLE_FK)
    )
}

const ROLE_FK: &str = "fk_users_role";

pub struct PgUserRepository {
    base: BaseRepository<user::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: User) -> UserResult<User> {
        let model = self
            .base
            .insert(user::new_active_model(input))
            .await
            .map_err(|e| match e {
                e if is_unique_violation(&e) => UserError::EmailAlreadyExists,
                e if is_role_fk_violation(&e) => UserError::InvalidRoleId,
                e => db_error(e),
            })?;

        tracing::info!(user_id = model.user_id, "Created user");
        Ok(model.into())
    }

    async fn update(&self, input: User) -> UserResult<User> {
        let id = input.id;
        let model = self
            .base
            .update(input.into())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => UserError::UserNotFound(id),
                e if is_unique_violation(&e) => UserError::EmailAlreadyExists,
                e if is_role_fk_violation(&e) => UserError::InvalidRoleId,
                e => db_error(e),
            })?;

        tracing::info!(user_id = id, "Updated user");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> UserResult<bool> {
        let rows = self.base.delete_by_id(id).await.map_err(db_error)?;
        if rows > 0 {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(rows > 0)
    }

    async fn delete_by_email(&self, email: &str) -> UserResult<bool> {
        let result = user::Entity::delete_many()
            .filter(user::Column::Email.eq(email))
            .exec(self.base.db())
            .await
            .map_err(db_error)?;

        if result.rows_affected > 0 {
            tracing::info!("Deleted user by email");
        }
        Ok(result.rows_affected > 0)
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::UserId)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }
}

pub struct PgRoleRepository {
    base: BaseRepository<role::Entity>,
}

impl PgRoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn create(&self, name: String) -> UserResult<Role> {
        if self.find_by_name(&name).await?.is_some() {
            return Err(UserError::InvalidRole);
        }

        let model = self
            .base
            .insert(role::ActiveModel {
                role_name: Set(name),
                ..Default::default()
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    UserError::InvalidRole
                } else {
                    db_error(e)
                }
            })?;

        tracing::info!(role_id = model.role_id, name = %model.role_name, "Created role");
        Ok(model.into())
    }

    async fn update(&self, input: Role) -> UserResult<Role> {
        let id = input.id;
        let model = self
            .base
            .update(role::ActiveModel {
                role_id: Set(input.id),
                role_name: Set(input.name),
            })
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => UserError::RoleNotFound(id),
                e if is_unique_violation(&e) => UserError::InvalidRole,
                e => db_error(e),
            })?;

        tracing::info!(role_id = id, "Updated role");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> UserResult<bool> {
        // Roles still referenced by users are protected by the foreign key
        let rows = self.base.delete_by_id(id).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => UserError::InvalidRole,
                _ => db_error(e),
            }
        })?;
        Ok(rows > 0)
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<Role>> {
        let model = self.base.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(Into::into))
    }

    // The roles table holds a handful of rows; matching in memory keeps the
    // comparison identical to the in-memory gateway.
    async fn find_by_name(&self, name: &str) -> UserResult<Option<Role>> {
        let roles = self.find_all().await?;
        Ok(roles
            .into_iter()
            .find(|r| r.name.eq_ignore_ascii_case(name)))
    }

    async fn find_all(&self) -> UserResult<Vec<Role>> {
        let models = role::Entity::find()
            .order_by_asc(role::Column::RoleId)
            .all(self.base.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

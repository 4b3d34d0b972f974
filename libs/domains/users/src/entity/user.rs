use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<Date>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub blacklist: bool,
    pub active: bool,
    pub fk_role_id: i32,
    pub fk_address_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::FkRoleId",
        to = "super::role::Column::RoleId"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.user_id,
            email: model.email,
            password_hash: model.password,
            first_name: model.first_name,
            last_name: model.last_name,
            birthdate: model.birthdate,
            // Rows written outside the app may hold free text
            gender: model.gender.and_then(|g| g.parse().ok()),
            phone: model.phone,
            blacklist: model.blacklist,
            active: model.active,
            role_id: model.fk_role_id,
            address_id: model.fk_address_id,
        }
    }
}

/// Full replacement of an existing row.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            user_id: Set(user.id),
            email: Set(user.email),
            password: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            birthdate: Set(user.birthdate),
            gender: Set(user.gender.map(|g| g.to_string())),
            phone: Set(user.phone),
            blacklist: Set(user.blacklist),
            active: Set(user.active),
            fk_role_id: Set(user.role_id),
            fk_address_id: Set(user.address_id),
        }
    }
}

/// Insert form: the key is left to the sequence.
pub fn new_active_model(user: User) -> ActiveModel {
    ActiveModel {
        user_id: NotSet,
        ..ActiveModel::from(user)
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Hall;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "halls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub hall_id: i32,
    pub label_hall: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::field::Entity")]
    Fields,
}

impl Related<super::field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fields.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Hall {
    fn from(model: Model) -> Self {
        Self {
            id: model.hall_id,
            label: model.label_hall,
            active: model.active,
        }
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Sport;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sport_id: i32,
    pub sport_label: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sport_field::Entity")]
    SportFields,
    #[sea_orm(has_many = "super::subscription::Entity")]
    Subscriptions,
}

impl Related<super::sport_field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SportFields.def()
    }
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sport {
    fn from(model: Model) -> Self {
        Self {
            id: model.sport_id,
            label: model.sport_label,
            active: model.active,
        }
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Field;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fields")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub field_id: i32,
    pub label_field: String,
    pub active: bool,
    pub fk_hall_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hall::Entity",
        from = "Column::FkHallId",
        to = "super::hall::Column::HallId"
    )]
    Hall,
    #[sea_orm(has_many = "super::sport_field::Entity")]
    SportFields,
}

impl Related<super::hall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hall.def()
    }
}

impl Related<super::sport_field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SportFields.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Field {
    fn from(model: Model) -> Self {
        Self {
            id: model.field_id,
            label: model.label_field,
            active: model.active,
            hall_id: model.fk_hall_id,
        }
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::SportField;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sport_field")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sport_field_id: i32,
    pub fk_field_id: i32,
    pub fk_sport_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::field::Entity",
        from = "Column::FkFieldId",
        to = "super::field::Column::FieldId"
    )]
    Field,
    #[sea_orm(
        belongs_to = "super::sport::Entity",
        from = "Column::FkSportId",
        to = "super::sport::Column::SportId"
    )]
    Sport,
    #[sea_orm(has_many = "super::close::Entity")]
    Closes,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Field.def()
    }
}

impl Related<super::sport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sport.def()
    }
}

impl Related<super::close::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Closes.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SportField {
    fn from(model: Model) -> Self {
        Self {
            id: model.sport_field_id,
            field_id: model.fk_field_id,
            sport_id: model.fk_sport_id,
        }
    }
}

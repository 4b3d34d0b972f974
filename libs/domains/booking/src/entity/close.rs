use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::to_utc;
use crate::models::Closure;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "closes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub close_id: i32,
    pub begin_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub fk_sport_field_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sport_field::Entity",
        from = "Column::FkSportFieldId",
        to = "super::sport_field::Column::SportFieldId"
    )]
    SportField,
}

impl Related<super::sport_field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SportField.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Closure {
    fn from(model: Model) -> Self {
        Self {
            id: model.close_id,
            begins_at: to_utc(model.begin_date),
            ends_at: to_utc(model.end_date),
            sport_field_id: model.fk_sport_field_id,
        }
    }
}

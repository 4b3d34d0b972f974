use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::TimeSlot;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "time_slots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub time_slot_id: i32,
    pub time_slot: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TimeSlot {
    fn from(model: Model) -> Self {
        Self {
            id: model.time_slot_id,
            label: model.time_slot,
        }
    }
}

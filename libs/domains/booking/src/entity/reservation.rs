use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::to_utc;
use crate::models::Reservation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reservation_id: i32,
    pub name_reservation: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub statut_payement: Option<String>,
    pub date: DateTimeWithTimeZone,
    pub active: bool,
    pub fk_user_id: i32,
    pub fk_time_slot_id: i32,
    pub fk_sport_field_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::time_slot::Entity",
        from = "Column::FkTimeSlotId",
        to = "super::time_slot::Column::TimeSlotId"
    )]
    TimeSlot,
    #[sea_orm(
        belongs_to = "super::sport_field::Entity",
        from = "Column::FkSportFieldId",
        to = "super::sport_field::Column::SportFieldId"
    )]
    SportField,
}

impl Related<super::time_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSlot.def()
    }
}

impl Related<super::sport_field::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SportField.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Reservation {
    fn from(model: Model) -> Self {
        Self {
            id: model.reservation_id,
            name: model.name_reservation,
            price: model.price,
            payment_status: model.statut_payement,
            date: to_utc(model.date),
            active: model.active,
            user_id: model.fk_user_id,
            time_slot_id: model.fk_time_slot_id,
            sport_field_id: model.fk_sport_field_id,
        }
    }
}

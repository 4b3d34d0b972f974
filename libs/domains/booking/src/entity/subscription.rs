use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Subscription;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub subscription_id: i32,
    pub label: String,
    pub price: i32,
    pub fk_sport_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sport::Entity",
        from = "Column::FkSportId",
        to = "super::sport::Column::SportId"
    )]
    Sport,
    #[sea_orm(has_many = "super::users_subscription::Entity")]
    UsersSubscriptions,
}

impl Related<super::sport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sport.def()
    }
}

impl Related<super::users_subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersSubscriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Subscription {
    fn from(model: Model) -> Self {
        Self {
            id: model.subscription_id,
            label: model.label,
            price: model.price,
            sport_id: model.fk_sport_id,
        }
    }
}

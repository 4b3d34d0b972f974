use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::to_utc;
use crate::models::Order;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_id: i32,
    pub date: DateTimeWithTimeZone,
    pub statut: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub fk_user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::orders_discount::Entity")]
    OrdersDiscounts,
    #[sea_orm(has_many = "super::orders_subscription::Entity")]
    OrdersSubscriptions,
}

impl Related<super::orders_discount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrdersDiscounts.def()
    }
}

impl Related<super::orders_subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrdersSubscriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Link rows are loaded separately and attached by the repository
    pub fn into_order(self, discount_ids: Vec<i32>, subscription_id: Option<i32>) -> Order {
        Order {
            id: self.order_id,
            date: to_utc(self.date),
            status: self.statut,
            price: self.price,
            user_id: self.fk_user_id,
            discount_ids,
            subscription_id,
        }
    }
}

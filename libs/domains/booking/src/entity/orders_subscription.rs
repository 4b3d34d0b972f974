use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// At most one subscription per order (`fk_order_id` is unique)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders_subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_subscription_id: i32,
    pub fk_subscription_id: i32,
    #[sea_orm(unique)]
    pub fk_order_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::FkOrderId",
        to = "super::order::Column::OrderId"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

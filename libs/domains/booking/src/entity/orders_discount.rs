use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Discounts applied to an order
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders_discounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_discount_id: i32,
    pub fk_discount_id: i32,
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
    #[sea_orm(
        belongs_to = "super::discount::Entity",
        from = "Column::FkDiscountId",
        to = "super::discount::Column::DiscountId"
    )]
    Discount,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::discount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

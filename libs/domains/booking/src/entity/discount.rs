use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Discount;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub discount_id: i32,
    pub discount_label: String,
    #[sea_orm(column_type = "Double")]
    pub percent: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::orders_discount::Entity")]
    OrdersDiscounts,
}

impl Related<super::orders_discount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrdersDiscounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Discount {
    fn from(model: Model) -> Self {
        Self {
            id: model.discount_id,
            label: model.discount_label,
            percent: model.percent,
        }
    }
}

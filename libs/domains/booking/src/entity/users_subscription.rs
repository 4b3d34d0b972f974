use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::to_utc;
use crate::models::MemberSubscription;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users_subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_subscription_id: i32,
    pub begin_date_subscription: DateTimeWithTimeZone,
    pub end_date_subscription: DateTimeWithTimeZone,
    pub fk_subscription_id: Option<i32>,
    pub fk_user_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subscription::Entity",
        from = "Column::FkSubscriptionId",
        to = "super::subscription::Column::SubscriptionId"
    )]
    Subscription,
}

impl Related<super::subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscription.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MemberSubscription {
    fn from(model: Model) -> Self {
        Self {
            id: model.user_subscription_id,
            subscription_id: model.fk_subscription_id,
            user_id: model.fk_user_id,
            begins_at: to_utc(model.begin_date_subscription),
            ends_at: to_utc(model.end_date_subscription),
        }
    }
}

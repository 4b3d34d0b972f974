use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_create_users::Users;
use crate::m20250301_000003_create_facilities::{SportField, Sports, TimeSlots};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservations::ReservationId))
                    .col(string(Reservations::NameReservation))
                    .col(double(Reservations::Price))
                    .col(string_null(Reservations::StatutPayement))
                    .col(timestamp_with_time_zone(Reservations::Date))
                    .col(boolean(Reservations::Active).default(true))
                    .col(integer(Reservations::FkUserId))
                    .col(integer(Reservations::FkTimeSlotId))
                    .col(integer(Reservations::FkSportFieldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_user")
                            .from(Reservations::Table, Reservations::FkUserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_time_slot")
                            .from(Reservations::Table, Reservations::FkTimeSlotId)
                            .to(TimeSlots::Table, TimeSlots::TimeSlotId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_sport_field")
                            .from(Reservations::Table, Reservations::FkSportFieldId)
                            .to(SportField::Table, SportField::SportFieldId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_user")
                    .table(Reservations::Table)
                    .col(Reservations::FkUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::OrderId))
                    .col(timestamp_with_time_zone(Orders::Date))
                    .col(string(Orders::Statut))
                    .col(double(Orders::Price))
                    .col(integer(Orders::FkUserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user")
                            .from(Orders::Table, Orders::FkUserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Discounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Discounts::DiscountId))
                    .col(string(Discounts::DiscountLabel))
                    .col(double(Discounts::Percent))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subscriptions::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscriptions::SubscriptionId))
                    .col(string(Subscriptions::Label))
                    .col(integer(Subscriptions::Price))
                    .col(integer_null(Subscriptions::FkSportId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscriptions_sport")
                            .from(Subscriptions::Table, Subscriptions::FkSportId)
                            .to(Sports::Table, Sports::SportId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsersSubscriptions::Table)
                    .if_not_exists()
                    .col(pk_auto(UsersSubscriptions::UserSubscriptionId))
                    .col(timestamp_with_time_zone(
                        UsersSubscriptions::BeginDateSubscription,
                    ))
                    .col(timestamp_with_time_zone(
                        UsersSubscriptions::EndDateSubscription,
                    ))
                    .col(integer_null(UsersSubscriptions::FkSubscriptionId))
                    .col(integer_null(UsersSubscriptions::FkUserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_subscriptions_subscription")
                            .from(UsersSubscriptions::Table, UsersSubscriptions::FkSubscriptionId)
                            .to(Subscriptions::Table, Subscriptions::SubscriptionId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_subscriptions_user")
                            .from(UsersSubscriptions::Table, UsersSubscriptions::FkUserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrdersDiscounts::Table)
                    .if_not_exists()
                    .col(pk_auto(OrdersDiscounts::OrderDiscountId))
                    .col(integer(OrdersDiscounts::FkDiscountId))
                    .col(integer(OrdersDiscounts::FkOrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_discounts_discount")
                            .from(OrdersDiscounts::Table, OrdersDiscounts::FkDiscountId)
                            .to(Discounts::Table, Discounts::DiscountId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_discounts_order")
                            .from(OrdersDiscounts::Table, OrdersDiscounts::FkOrderId)
                            .to(Orders::Table, Orders::OrderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrdersSubscriptions::Table)
                    .if_not_exists()
                    .col(pk_auto(OrdersSubscriptions::OrderSubscriptionId))
                    .col(integer(OrdersSubscriptions::FkSubscriptionId))
                    .col(integer_uniq(OrdersSubscriptions::FkOrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_subscriptions_subscription")
                            .from(
                                OrdersSubscriptions::Table,
                                OrdersSubscriptions::FkSubscriptionId,
                            )
                            .to(Subscriptions::Table, Subscriptions::SubscriptionId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_subscriptions_order")
                            .from(OrdersSubscriptions::Table, OrdersSubscriptions::FkOrderId)
                            .to(Orders::Table, Orders::OrderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrdersSubscriptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OrdersDiscounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsersSubscriptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subscriptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Discounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Reservations {
    Table,
    ReservationId,
    NameReservation,
    Price,
    StatutPayement,
    Date,
    Active,
    FkUserId,
    FkTimeSlotId,
    FkSportFieldId,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    OrderId,
    Date,
    Statut,
    Price,
    FkUserId,
}

#[derive(DeriveIden)]
enum Discounts {
    Table,
    DiscountId,
    DiscountLabel,
    Percent,
}

#[derive(DeriveIden)]
enum Subscriptions {
    Table,
    SubscriptionId,
    Label,
    Price,
    FkSportId,
}

#[derive(DeriveIden)]
enum UsersSubscriptions {
    Table,
    UserSubscriptionId,
    BeginDateSubscription,
    EndDateSubscription,
    FkSubscriptionId,
    FkUserId,
}

#[derive(DeriveIden)]
enum OrdersDiscounts {
    Table,
    OrderDiscountId,
    FkDiscountId,
    FkOrderId,
}

#[derive(DeriveIden)]
enum OrdersSubscriptions {
    Table,
    OrderSubscriptionId,
    FkSubscriptionId,
    FkOrderId,
}

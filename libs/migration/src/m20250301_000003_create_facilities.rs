use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sports::Table)
                    .if_not_exists()
                    .col(pk_auto(Sports::SportId))
                    .col(string(Sports::SportLabel))
                    .col(boolean(Sports::Active).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Halls::Table)
                    .if_not_exists()
                    .col(pk_auto(Halls::HallId))
                    .col(string(Halls::LabelHall))
                    .col(boolean(Halls::Active).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Fields::Table)
                    .if_not_exists()
                    .col(pk_auto(Fields::FieldId))
                    .col(string(Fields::LabelField))
                    .col(boolean(Fields::Active).default(false))
                    .col(integer(Fields::FkHallId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fields_hall")
                            .from(Fields::Table, Fields::FkHallId)
                            .to(Halls::Table, Halls::HallId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SportField::Table)
                    .if_not_exists()
                    .col(pk_auto(SportField::SportFieldId))
                    .col(integer(SportField::FkFieldId))
                    .col(integer(SportField::FkSportId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sport_field_field")
                            .from(SportField::Table, SportField::FkFieldId)
                            .to(Fields::Table, Fields::FieldId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sport_field_sport")
                            .from(SportField::Table, SportField::FkSportId)
                            .to(Sports::Table, Sports::SportId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TimeSlots::Table)
                    .if_not_exists()
                    .col(pk_auto(TimeSlots::TimeSlotId))
                    .col(string(TimeSlots::TimeSlot))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Closes::Table)
                    .if_not_exists()
                    .col(pk_auto(Closes::CloseId))
                    .col(timestamp_with_time_zone(Closes::BeginDate))
                    .col(timestamp_with_time_zone(Closes::EndDate))
                    .col(integer(Closes::FkSportFieldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_closes_sport_field")
                            .from(Closes::Table, Closes::FkSportFieldId)
                            .to(SportField::Table, SportField::SportFieldId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Closes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TimeSlots::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SportField::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Halls::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sports::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Sports {
    Table,
    SportId,
    SportLabel,
    Active,
}

#[derive(DeriveIden)]
pub(crate) enum Halls {
    Table,
    HallId,
    LabelHall,
    Active,
}

#[derive(DeriveIden)]
pub(crate) enum Fields {
    Table,
    FieldId,
    LabelField,
    Active,
    FkHallId,
}

#[derive(DeriveIden)]
pub(crate) enum SportField {
    Table,
    SportFieldId,
    FkFieldId,
    FkSportId,
}

#[derive(DeriveIden)]
pub(crate) enum TimeSlots {
    Table,
    TimeSlotId,
    TimeSlot,
}

#[derive(DeriveIden)]
enum Closes {
    Table,
    CloseId,
    BeginDate,
    EndDate,
    FkSportFieldId,
}

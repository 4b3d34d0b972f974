use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_reference_tables::{Addresses, Roles};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::UserId))
                    .col(string_uniq(Users::Email))
                    .col(string(Users::Password))
                    .col(string_len(Users::FirstName, 90))
                    .col(string_len(Users::LastName, 90))
                    .col(date_null(Users::Birthdate))
                    .col(string_len_null(Users::Gender, 10))
                    .col(string_len_null(Users::Phone, 20))
                    .col(boolean(Users::Blacklist).default(false))
                    .col(boolean(Users::Active).default(true))
                    .col(integer(Users::FkRoleId))
                    .col(integer_null(Users::FkAddressId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_role")
                            .from(Users::Table, Users::FkRoleId)
                            .to(Roles::Table, Roles::RoleId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_address")
                            .from(Users::Table, Users::FkAddressId)
                            .to(Addresses::Table, Addresses::AddressId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_last_name")
                    .table(Users::Table)
                    .col(Users::LastName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    Table,
    UserId,
    Email,
    Password,
    FirstName,
    LastName,
    Birthdate,
    Gender,
    Phone,
    Blacklist,
    Active,
    FkRoleId,
    FkAddressId,
}

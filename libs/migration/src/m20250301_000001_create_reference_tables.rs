use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(pk_auto(Countries::CountryId))
                    .col(string(Countries::CountryName))
                    .col(string_len(Countries::IsoAlpha3, 3))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Localities::Table)
                    .if_not_exists()
                    .col(pk_auto(Localities::LocalityId))
                    .col(string_len_null(Localities::PostalCode, 4))
                    .col(string_len_null(Localities::Town, 50))
                    .col(string_len_null(Localities::SubTown, 3))
                    .col(string_len_null(Localities::MainTown, 50))
                    .col(string_len_null(Localities::Province, 19))
                    .col(integer(Localities::FkCountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_localities_country")
                            .from(Localities::Table, Localities::FkCountryId)
                            .to(Countries::Table, Countries::CountryId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_localities_postal_code")
                    .table(Localities::Table)
                    .col(Localities::PostalCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(pk_auto(Addresses::AddressId))
                    .col(string(Addresses::StreetName))
                    .col(string_len_null(Addresses::Number, 20))
                    .col(string_len_null(Addresses::BoxNumber, 11))
                    .col(integer_null(Addresses::FkLocalityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_locality")
                            .from(Addresses::Table, Addresses::FkLocalityId)
                            .to(Localities::Table, Localities::LocalityId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(pk_auto(Roles::RoleId))
                    .col(string_uniq(Roles::RoleName))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Localities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Countries {
    Table,
    CountryId,
    CountryName,
    IsoAlpha3,
}

#[derive(DeriveIden)]
pub(crate) enum Localities {
    Table,
    LocalityId,
    PostalCode,
    Town,
    SubTown,
    MainTown,
    Province,
    FkCountryId,
}

#[derive(DeriveIden)]
pub(crate) enum Addresses {
    Table,
    AddressId,
    StreetName,
    Number,
    BoxNumber,
    FkLocalityId,
}

#[derive(DeriveIden)]
pub(crate) enum Roles {
    Table,
    RoleId,
    RoleName,
}

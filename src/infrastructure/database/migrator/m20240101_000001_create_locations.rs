//! Create locations table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::Name).string().not_null())
                    .col(ColumnDef::new(Locations::Latitude).double().not_null())
                    .col(ColumnDef::new(Locations::Longitude).double().not_null())
                    .col(ColumnDef::new(Locations::RequestSender).string().not_null())
                    .col(ColumnDef::new(Locations::RequestType).string().not_null())
                    .col(ColumnDef::new(Locations::Status).string().not_null())
                    .col(ColumnDef::new(Locations::NumberPeople).double().not_null())
                    .col(ColumnDef::new(Locations::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Locations::Date).string().not_null())
                    .col(ColumnDef::new(Locations::PhoneOrg).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Lookup by organisation phone
        manager
            .create_index(
                Index::create()
                    .name("idx_locations_phone_org")
                    .table(Locations::Table)
                    .col(Locations::PhoneOrg)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Locations {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    RequestSender,
    RequestType,
    Status,
    NumberPeople,
    PhoneNumber,
    Date,
    PhoneOrg,
}

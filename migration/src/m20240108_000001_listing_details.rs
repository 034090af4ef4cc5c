use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_tables::{Artist, Venue};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Listing {
    Website,
    SeekingTalent,
    SeekingVenue,
    SeekingDescription,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // SQLite only takes one column per ALTER TABLE, so each column gets its own statement.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let venue_columns = [
            ColumnDef::new(Listing::Website).string_len(120).null().to_owned(),
            ColumnDef::new(Listing::SeekingTalent)
                .boolean()
                .not_null()
                .default(false)
                .to_owned(),
            ColumnDef::new(Listing::SeekingDescription).string().null().to_owned(),
        ];
        for mut column in venue_columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(Venue::Table)
                        .add_column(&mut column)
                        .to_owned(),
                )
                .await?;
        }

        let artist_columns = [
            ColumnDef::new(Listing::Website).string_len(120).null().to_owned(),
            ColumnDef::new(Listing::SeekingVenue)
                .boolean()
                .not_null()
                .default(false)
                .to_owned(),
            ColumnDef::new(Listing::SeekingDescription).string().null().to_owned(),
        ];
        for mut column in artist_columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(Artist::Table)
                        .add_column(&mut column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Listing::Website,
            Listing::SeekingTalent,
            Listing::SeekingDescription,
        ] {
            manager
                .alter_table(Table::alter().table(Venue::Table).drop_column(column).to_owned())
                .await?;
        }
        for column in [
            Listing::Website,
            Listing::SeekingVenue,
            Listing::SeekingDescription,
        ] {
            manager
                .alter_table(Table::alter().table(Artist::Table).drop_column(column).to_owned())
                .await?;
        }
        Ok(())
    }
}

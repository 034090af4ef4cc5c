use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240101_000001_create_tables" // Make sure this matches with the file name
    }
}

#[derive(Iden)]
pub enum Venue {
    Table,
    Id,
    Name,
    Genres,
    Address,
    City,
    State,
    Phone,
    ImageLink,
    FacebookLink,
}

#[derive(Iden)]
pub enum Artist {
    Table,
    Id,
    Name,
    City,
    State,
    Phone,
    Genres,
    ImageLink,
    FacebookLink,
}

#[derive(Iden)]
enum Show {
    Table,
    Id,
    ArtistId,
    VenueId,
    StartTime,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venue::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Venue::Name).string().not_null())
                    .col(ColumnDef::new(Venue::Genres).json().not_null())
                    .col(ColumnDef::new(Venue::Address).string_len(200).null())
                    .col(ColumnDef::new(Venue::City).string_len(120).not_null())
                    .col(ColumnDef::new(Venue::State).string_len(120).not_null())
                    .col(ColumnDef::new(Venue::Phone).string_len(120).null())
                    .col(ColumnDef::new(Venue::ImageLink).string_len(500).null())
                    .col(ColumnDef::new(Venue::FacebookLink).string_len(120).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artist::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artist::Name).string().not_null())
                    .col(ColumnDef::new(Artist::City).string_len(120).not_null())
                    .col(ColumnDef::new(Artist::State).string_len(120).not_null())
                    .col(ColumnDef::new(Artist::Phone).string_len(120).null())
                    .col(ColumnDef::new(Artist::Genres).json().not_null())
                    .col(ColumnDef::new(Artist::ImageLink).string_len(500).null())
                    .col(ColumnDef::new(Artist::FacebookLink).string_len(120).null())
                    .to_owned(),
            )
            .await?;

        // A show can't outlive its artist or venue
        manager
            .create_table(
                Table::create()
                    .table(Show::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Show::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Show::ArtistId).integer().not_null())
                    .col(ColumnDef::new(Show::VenueId).integer().not_null())
                    .col(ColumnDef::new(Show::StartTime).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-show-artist_id")
                            .from(Show::Table, Show::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-show-venue_id")
                            .from(Show::Table, Show::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Show::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await?;
        Ok(())
    }
}

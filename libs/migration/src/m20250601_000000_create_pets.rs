use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pets::Table)
                    .if_not_exists()
                    .col(pk_auto(Pets::Id))
                    .col(string_len(Pets::Name, 100))
                    .col(string_len(Pets::Species, 50))
                    .col(string_len_null(Pets::Breed, 100))
                    .col(integer_null(Pets::Age))
                    .col(string_len_null(Pets::Color, 50))
                    .col(double_null(Pets::Weight))
                    .col(text_null(Pets::Description))
                    .col(string_len_null(Pets::ImageUrl, 255))
                    .col(boolean(Pets::IsAvailable).default(true))
                    .col(
                        timestamp_with_time_zone(Pets::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Pets::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pets_species")
                    .table(Pets::Table)
                    .col(Pets::Species)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pets_available")
                    .table(Pets::Table)
                    .col(Pets::IsAvailable)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pets::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pets {
    Table,
    Id,
    Name,
    Species,
    Breed,
    Age,
    Color,
    Weight,
    Description,
    ImageUrl,
    IsAvailable,
    CreatedAt,
    UpdatedAt,
}

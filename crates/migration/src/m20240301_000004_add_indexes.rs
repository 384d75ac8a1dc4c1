use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Actor: unique name
        manager
            .create_index(
                Index::create()
                    .name("uniq_actor_name")
                    .table(Actor::Table)
                    .col(Actor::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Movie: composite unique (title, release_date)
        manager
            .create_index(
                Index::create()
                    .name("uniq_movie_title_release_date")
                    .table(Movie::Table)
                    .col(Movie::Title)
                    .col(Movie::ReleaseDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // MovieActor: lookups by actor
        manager
            .create_index(
                Index::create()
                    .name("idx_movie_actor_actor")
                    .table(MovieActor::Table)
                    .col(MovieActor::ActorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_actor_name").table(Actor::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_movie_title_release_date").table(Movie::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_movie_actor_actor").table(MovieActor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Actor { Table, Name }

#[derive(DeriveIden)]
enum Movie { Table, Title, ReleaseDate }

#[derive(DeriveIden)]
enum MovieActor { Table, ActorId }

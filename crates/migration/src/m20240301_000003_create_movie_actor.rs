//! Create `movie_actor` join table with FKs to `movie` and `actor`.
//!
//! Rows go away with their movie; an actor still referenced here cannot be deleted
//! (default NO ACTION, checked at the end of each statement).
//! `position` keeps the order actors were listed in.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieActor::Table)
                    .if_not_exists()
                    .col(integer(MovieActor::MovieId).not_null())
                    .col(integer(MovieActor::ActorId).not_null())
                    .col(integer(MovieActor::Position).not_null())
                    .primary_key(
                        Index::create()
                            .col(MovieActor::MovieId)
                            .col(MovieActor::ActorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actor_movie")
                            .from(MovieActor::Table, MovieActor::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actor_actor")
                            .from(MovieActor::Table, MovieActor::ActorId)
                            .to(Actor::Table, Actor::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieActor::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MovieActor { Table, MovieId, ActorId, Position }

#[derive(DeriveIden)]
enum Movie { Table, Id }

#[derive(DeriveIden)]
enum Actor { Table, Id }

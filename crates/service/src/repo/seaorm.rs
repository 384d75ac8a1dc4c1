use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use models::errors::ModelError;
use models::{actor, movie, movie_actor};

use crate::domain::{Actor, Movie, NewMovie};
use crate::errors::ServiceError;
use crate::repository::{ActorRepository, MovieRepository};

fn db_err(e: sea_orm::DbErr) -> ServiceError {
    ServiceError::Repository(e.to_string())
}

/// Unique-index violations surface as the matching duplicate error.
fn conflict_as(dup: ServiceError) -> impl Fn(ModelError) -> ServiceError {
    move |e| match e {
        ModelError::Conflict(_) => dup.clone(),
        other => other.into(),
    }
}

pub struct SeaOrmActorRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ActorRepository for SeaOrmActorRepository {
    async fn list(&self) -> Result<Vec<Actor>, ServiceError> {
        let rows = actor::list(&self.db).await?;
        Ok(rows.into_iter().map(Actor::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Actor>, ServiceError> {
        let found = actor::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(found.map(Actor::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Actor>, ServiceError> {
        Ok(actor::find_by_name(&self.db, name).await?.map(Actor::from))
    }

    async fn insert(&self, name: &str) -> Result<Actor, ServiceError> {
        let created = actor::create(&self.db, name)
            .await
            .map_err(conflict_as(ServiceError::DuplicateActor))?;
        Ok(created.into())
    }

    async fn rename(&self, id: i32, name: &str) -> Result<Actor, ServiceError> {
        let updated = actor::rename(&self.db, id, name)
            .await
            .map_err(conflict_as(ServiceError::DuplicateActor))?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        // the join table's FK restricts deletion of referenced actors
        actor::delete(&self.db, id).await.map_err(conflict_as(ServiceError::ActorInMovie))
    }
}

pub struct SeaOrmMovieRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    async fn hydrate(&self, m: movie::Model) -> Result<Movie, ServiceError> {
        let actors = movie_actor::actors_of(&self.db, m.id).await?;
        Ok(Movie {
            id: m.id,
            title: m.title,
            release_date: m.release_date,
            actors: actors.into_iter().map(Actor::from).collect(),
        })
    }

    async fn hydrate_all(&self, rows: Vec<movie::Model>) -> Result<Vec<Movie>, ServiceError> {
        let mut out = Vec::with_capacity(rows.len());
        for m in rows {
            out.push(self.hydrate(m).await?);
        }
        Ok(out)
    }
}

#[async_trait::async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, ServiceError> {
        let rows = movie::list(&self.db).await?;
        self.hydrate_all(rows).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, ServiceError> {
        match movie::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)? {
            Some(m) => Ok(Some(self.hydrate(m).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_title_and_release_date(&self, title: &str, release_date: &str) -> Result<Option<Movie>, ServiceError> {
        match movie::find_by_title_and_release_date(&self.db, title, release_date).await? {
            Some(m) => Ok(Some(self.hydrate(m).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_actor_id(&self, actor_id: i32) -> Result<Vec<Movie>, ServiceError> {
        let Some(a) = actor::Entity::find_by_id(actor_id).one(&self.db).await.map_err(db_err)? else {
            return Ok(Vec::new());
        };
        let rows = movie::find_by_actor(&self.db, &a).await?;
        self.hydrate_all(rows).await
    }

    async fn find_by_actor_name(&self, name: &str) -> Result<Vec<Movie>, ServiceError> {
        let Some(a) = actor::find_by_name(&self.db, name).await? else {
            return Ok(Vec::new());
        };
        let rows = movie::find_by_actor(&self.db, &a).await?;
        self.hydrate_all(rows).await
    }

    async fn insert(&self, new: NewMovie) -> Result<Movie, ServiceError> {
        let actor_ids: Vec<i32> = new.actors.iter().map(|a| a.id).collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        let created = movie::create(&txn, &new.title, &new.release_date)
            .await
            .map_err(conflict_as(ServiceError::DuplicateMovie))?;
        movie_actor::link_all(&txn, created.id, &actor_ids).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(Movie { id: created.id, title: created.title, release_date: created.release_date, actors: new.actors })
    }

    async fn update(&self, id: i32, new: NewMovie) -> Result<Movie, ServiceError> {
        let actor_ids: Vec<i32> = new.actors.iter().map(|a| a.id).collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        let updated = movie::update(&txn, id, &new.title, &new.release_date)
            .await
            .map_err(conflict_as(ServiceError::DuplicateMovie))?;
        movie_actor::unlink_all(&txn, id).await?;
        movie_actor::link_all(&txn, id, &actor_ids).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(Movie { id: updated.id, title: updated.title, release_date: updated.release_date, actors: new.actors })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let removed = movie::delete(&txn, id).await?;
        txn.commit().await.map_err(db_err)?;
        Ok(removed)
    }
}

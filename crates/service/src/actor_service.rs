use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::{Actor, ActorInput, Movie};
use crate::errors::ServiceError;
use crate::repository::{ActorRepository, MovieRepository};
use crate::validation::{check_length, required};

/// Actor CRUD independent of the web framework.
pub struct ActorService<A: ActorRepository + ?Sized, M: MovieRepository + ?Sized> {
    actors: Arc<A>,
    movies: Arc<M>,
}

impl<A: ActorRepository + ?Sized, M: MovieRepository + ?Sized> ActorService<A, M> {
    pub fn new(actors: Arc<A>, movies: Arc<M>) -> Self { Self { actors, movies } }

    /// All actors ordered by id; an empty store yields an empty list.
    pub async fn get_all(&self) -> Result<Vec<Actor>, ServiceError> {
        self.actors.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Actor, ServiceError> {
        self.actors.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("actor"))
    }

    /// Store a new actor. Names are unique, compared exactly.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::actor_service::ActorService;
    /// use service::domain::ActorInput;
    /// use service::errors::ServiceError;
    /// use service::repository::mock::InMemoryCatalog;
    /// let catalog = Arc::new(InMemoryCatalog::default());
    /// let svc = ActorService::new(catalog.clone(), catalog);
    /// let actor = tokio_test::block_on(svc.create(ActorInput::new("Keanu Reeves"))).unwrap();
    /// assert_eq!(actor.name, "Keanu Reeves");
    /// let again = tokio_test::block_on(svc.create(ActorInput::new("Keanu Reeves")));
    /// assert_eq!(again, Err(ServiceError::DuplicateActor));
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: ActorInput) -> Result<Actor, ServiceError> {
        let name = required(Some(input.name.as_str())).ok_or(ServiceError::FieldRequired("name"))?;
        check_length("name", name)?;
        if let Some(existing) = self.actors.find_by_name(name).await? {
            debug!(actor_id = existing.id, "actor exists");
            return Err(ServiceError::DuplicateActor);
        }
        let actor = self.actors.insert(name).await?;
        info!(actor_id = actor.id, "actor_created");
        Ok(actor)
    }

    /// Rename an actor, keeping its id.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn update(&self, id: i32, input: ActorInput) -> Result<Actor, ServiceError> {
        let current = self.get_by_id(id).await?;
        let name = required(Some(input.name.as_str())).ok_or(ServiceError::FieldRequired("name"))?;
        check_length("name", name)?;
        if name == current.name {
            return Ok(current);
        }
        if let Some(other) = self.actors.find_by_name(name).await? {
            debug!(other_id = other.id, "name taken");
            return Err(ServiceError::DuplicateActor);
        }
        let actor = self.actors.rename(id, name).await?;
        info!(actor_id = actor.id, "actor_renamed");
        Ok(actor)
    }

    /// Remove an actor that no movie lists.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get_by_id(id).await?;
        if !self.movies.find_by_actor_id(id).await?.is_empty() {
            debug!("actor still linked to movies");
            return Err(ServiceError::ActorInMovie);
        }
        if !self.actors.delete(id).await? {
            return Err(ServiceError::not_found("actor"));
        }
        info!("actor_deleted");
        Ok(())
    }

    /// Movies that list the actor.
    pub async fn get_movies_by_actor(&self, actor_id: i32) -> Result<Vec<Movie>, ServiceError> {
        self.get_by_id(actor_id).await?;
        self.movies.find_by_actor_id(actor_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewMovie;
    use crate::repository::mock::InMemoryCatalog;

    fn service() -> (Arc<InMemoryCatalog>, ActorService<InMemoryCatalog, InMemoryCatalog>) {
        let catalog = Arc::new(InMemoryCatalog::default());
        (catalog.clone(), ActorService::new(catalog.clone(), catalog))
    }

    #[tokio::test]
    async fn create_and_fetch() {
        let (_, svc) = service();
        assert!(svc.get_all().await.unwrap().is_empty());

        let a = svc.create(ActorInput::new("Laura Dern")).await.unwrap();
        let b = svc.create(ActorInput::new("Sam Neill")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(svc.get_by_id(a.id).await.unwrap(), a);
        assert_eq!(svc.get_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn duplicate_names_compare_exactly() {
        let (_, svc) = service();
        svc.create(ActorInput::new("Laura Dern")).await.unwrap();
        assert_eq!(svc.create(ActorInput::new("Laura Dern")).await, Err(ServiceError::DuplicateActor));
        // only the store check applies here, so a case variant is a different actor
        assert!(svc.create(ActorInput::new("laura dern")).await.is_ok());
    }

    #[tokio::test]
    async fn blank_name_is_required() {
        let (_, svc) = service();
        assert_eq!(svc.create(ActorInput::new("  ")).await, Err(ServiceError::FieldRequired("name")));
    }

    #[tokio::test]
    async fn names_compare_without_trimming() {
        let (_, svc) = service();
        let plain = svc.create(ActorInput::new("Laura Dern")).await.unwrap();
        let padded = svc.create(ActorInput::new(" Laura Dern ")).await.unwrap();
        assert_ne!(plain.id, padded.id);
        assert_eq!(padded.name, " Laura Dern ");
    }

    #[tokio::test]
    async fn overlong_name_is_rejected() {
        let (_, svc) = service();
        let long = "n".repeat(256);
        assert!(matches!(svc.create(ActorInput::new(long.clone())).await, Err(ServiceError::Validation(_))));
        let a = svc.create(ActorInput::new("Short")).await.unwrap();
        assert!(matches!(svc.update(a.id, ActorInput::new(long)).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn missing_actor_is_not_found() {
        let (_, svc) = service();
        assert_eq!(svc.get_by_id(7).await, Err(ServiceError::not_found("actor")));
        assert_eq!(svc.update(7, ActorInput::new("X")).await, Err(ServiceError::not_found("actor")));
        assert_eq!(svc.delete(7).await, Err(ServiceError::not_found("actor")));
        assert_eq!(svc.get_movies_by_actor(7).await, Err(ServiceError::not_found("actor")));
    }

    #[tokio::test]
    async fn update_renames_and_keeps_id() {
        let (_, svc) = service();
        let a = svc.create(ActorInput::new("Jeff Goldblum")).await.unwrap();
        let b = svc.create(ActorInput::new("Richard Attenborough")).await.unwrap();

        let renamed = svc.update(a.id, ActorInput::new("J. Goldblum")).await.unwrap();
        assert_eq!(renamed, Actor { id: a.id, name: "J. Goldblum".into() });

        // same name is a no-op, not a conflict with itself
        assert_eq!(svc.update(a.id, ActorInput::new("J. Goldblum")).await.unwrap(), renamed);
        assert_eq!(svc.update(a.id, ActorInput::new(b.name.clone())).await, Err(ServiceError::DuplicateActor));
    }

    #[tokio::test]
    async fn delete_blocked_while_in_movie() {
        let (catalog, svc) = service();
        let cast = svc.create(ActorInput::new("Bob Peck")).await.unwrap();
        let free = svc.create(ActorInput::new("Wayne Knight")).await.unwrap();
        let movie = MovieRepository::insert(&*catalog, NewMovie { title: "Jurassic Park".into(), release_date: "1993-06-11".into(), actors: vec![cast.clone()] })
            .await
            .unwrap();

        assert_eq!(svc.delete(cast.id).await, Err(ServiceError::ActorInMovie));
        assert_eq!(svc.get_movies_by_actor(cast.id).await.unwrap(), vec![movie]);

        svc.delete(free.id).await.unwrap();
        assert_eq!(svc.get_by_id(free.id).await, Err(ServiceError::not_found("actor")));
        assert!(svc.get_by_id(cast.id).await.is_ok());
    }
}

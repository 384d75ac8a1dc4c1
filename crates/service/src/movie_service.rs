use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::{Actor, ActorInput, Movie, MovieInput, NewMovie};
use crate::errors::ServiceError;
use crate::repository::{ActorRepository, MovieRepository};
use crate::validation::{check_length, has_duplicate_actors, is_date_in_format, required};

/// Movie CRUD plus actor resolve-or-create on writes.
pub struct MovieService<A: ActorRepository + ?Sized, M: MovieRepository + ?Sized> {
    actors: Arc<A>,
    movies: Arc<M>,
}

impl<A: ActorRepository + ?Sized, M: MovieRepository + ?Sized> MovieService<A, M> {
    pub fn new(actors: Arc<A>, movies: Arc<M>) -> Self { Self { actors, movies } }

    pub async fn get_all(&self) -> Result<Vec<Movie>, ServiceError> {
        self.movies.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Movie, ServiceError> {
        self.movies.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("movie"))
    }

    /// Movies listing an actor with exactly this actor's name.
    pub async fn get_movies_by_actor(&self, actor: &Actor) -> Result<Vec<Movie>, ServiceError> {
        self.movies.find_by_actor_name(&actor.name).await
    }

    /// Validate and store a new movie, creating any actors not stored yet.
    ///
    /// Checks run in order and the first failure wins: required fields, date
    /// format, duplicate actors in the request, an existing movie with the same
    /// title and date, then an empty actor list.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::domain::MovieInput;
    /// use service::errors::ServiceError;
    /// use service::movie_service::MovieService;
    /// use service::repository::mock::InMemoryCatalog;
    /// let catalog = Arc::new(InMemoryCatalog::default());
    /// let svc = MovieService::new(catalog.clone(), catalog);
    /// let movie = tokio_test::block_on(svc.create(MovieInput::new("Heat", "1995-12-15", &["Al Pacino", "Robert De Niro"]))).unwrap();
    /// assert_eq!(movie.actors.len(), 2);
    /// let bad = tokio_test::block_on(svc.create(MovieInput::new("Heat", "1995-12-32", &["Al Pacino"])));
    /// assert_eq!(bad, Err(ServiceError::DateFormat("1995-12-32".into())));
    /// ```
    #[instrument(skip(self, input), fields(title = ?input.title))]
    pub async fn create(&self, input: MovieInput) -> Result<Movie, ServiceError> {
        let (title, release_date) = self.check(&input, None).await?;
        let actors = self.resolve_actors(&input.actors).await?;
        let movie = self.movies.insert(NewMovie { title, release_date, actors }).await?;
        info!(movie_id = movie.id, actors = movie.actors.len(), "movie_created");
        Ok(movie)
    }

    /// Replace title, release date and actor list of an existing movie.
    #[instrument(skip(self, input), fields(title = ?input.title))]
    pub async fn update(&self, id: i32, input: MovieInput) -> Result<Movie, ServiceError> {
        self.get_by_id(id).await?;
        let (title, release_date) = self.check(&input, Some(id)).await?;
        let actors = self.resolve_actors(&input.actors).await?;
        let movie = self.movies.update(id, NewMovie { title, release_date, actors }).await?;
        info!(movie_id = movie.id, actors = movie.actors.len(), "movie_updated");
        Ok(movie)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.movies.delete(id).await? {
            return Err(ServiceError::not_found("movie"));
        }
        info!("movie_deleted");
        Ok(())
    }

    /// Map each submitted actor to a stored one, reusing exact-name matches and
    /// creating the rest. Output keeps input order.
    pub async fn resolve_actors(&self, inputs: &[ActorInput]) -> Result<Vec<Actor>, ServiceError> {
        let mut resolved = Vec::with_capacity(inputs.len());
        for input in inputs {
            let name = required(Some(input.name.as_str())).ok_or(ServiceError::FieldRequired("actor name"))?;
            let actor = match self.actors.find_by_name(name).await? {
                Some(existing) => existing,
                None => {
                    let created = self.actors.insert(name).await?;
                    debug!(actor_id = created.id, "actor created for movie");
                    created
                }
            };
            resolved.push(actor);
        }
        Ok(resolved)
    }

    /// Input checks shared by create and update; `own_id` is the movie being
    /// updated, which may keep its own title and date.
    async fn check(&self, input: &MovieInput, own_id: Option<i32>) -> Result<(String, String), ServiceError> {
        let title = required(input.title.as_deref()).ok_or(ServiceError::FieldRequired("title"))?;
        let release_date = required(input.release_date.as_deref()).ok_or(ServiceError::FieldRequired("releaseDate"))?;
        check_length("title", title)?;
        if !is_date_in_format(release_date) {
            debug!(release_date, "bad release date");
            return Err(ServiceError::DateFormat(release_date.to_string()));
        }
        for actor in &input.actors {
            if actor.name.trim().is_empty() {
                return Err(ServiceError::FieldRequired("actor name"));
            }
            check_length("actor name", &actor.name)?;
        }
        if has_duplicate_actors(&input.actors) {
            debug!("duplicate actors in request");
            return Err(ServiceError::DuplicateActors);
        }
        if let Some(existing) = self.movies.find_by_title_and_release_date(title, release_date).await? {
            if Some(existing.id) != own_id {
                debug!(existing_id = existing.id, "movie exists");
                return Err(ServiceError::DuplicateMovie);
            }
        }
        if input.actors.is_empty() {
            return Err(ServiceError::MissingActors);
        }
        Ok((title.to_string(), release_date.to_string()))
    }
}

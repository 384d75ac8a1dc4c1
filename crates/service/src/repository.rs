use async_trait::async_trait;

use crate::domain::{Actor, Movie, NewMovie};
use crate::errors::ServiceError;

/// Actor persistence: lookup by id and by unique name, save, delete, list.
#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Actor>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Actor>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Actor>, ServiceError>;
    async fn insert(&self, name: &str) -> Result<Actor, ServiceError>;
    async fn rename(&self, id: i32, name: &str) -> Result<Actor, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Movie persistence, including the actor join queries.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Movie>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, ServiceError>;
    async fn find_by_title_and_release_date(&self, title: &str, release_date: &str) -> Result<Option<Movie>, ServiceError>;
    async fn find_by_actor_id(&self, actor_id: i32) -> Result<Vec<Movie>, ServiceError>;
    async fn find_by_actor_name(&self, name: &str) -> Result<Vec<Movie>, ServiceError>;
    async fn insert(&self, movie: NewMovie) -> Result<Movie, ServiceError>;
    async fn update(&self, id: i32, movie: NewMovie) -> Result<Movie, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CatalogState {
        actors: BTreeMap<i32, Actor>,
        movies: BTreeMap<i32, StoredMovie>,
        next_actor_id: i32,
        next_movie_id: i32,
    }

    struct StoredMovie {
        title: String,
        release_date: String,
        actor_ids: Vec<i32>,
    }

    impl CatalogState {
        fn materialize(&self, id: i32, m: &StoredMovie) -> Movie {
            Movie {
                id,
                title: m.title.clone(),
                release_date: m.release_date.clone(),
                actors: m.actor_ids.iter().filter_map(|a| self.actors.get(a).cloned()).collect(),
            }
        }

        fn movies_where(&self, pred: impl Fn(&StoredMovie) -> bool) -> Vec<Movie> {
            self.movies
                .iter()
                .filter(|(_, m)| pred(m))
                .map(|(id, m)| self.materialize(*id, m))
                .collect()
        }

        fn key_taken(&self, title: &str, release_date: &str, except: Option<i32>) -> bool {
            self.movies
                .iter()
                .any(|(id, m)| Some(*id) != except && m.title == title && m.release_date == release_date)
        }
    }

    /// Actors and movies in one store, enforcing the same constraints as the schema.
    #[derive(Default)]
    pub struct InMemoryCatalog {
        state: Mutex<CatalogState>,
    }

    impl InMemoryCatalog {
        fn lock(&self) -> Result<std::sync::MutexGuard<'_, CatalogState>, ServiceError> {
            self.state.lock().map_err(|_| ServiceError::Repository("catalog lock poisoned".into()))
        }
    }

    #[async_trait]
    impl ActorRepository for InMemoryCatalog {
        async fn list(&self) -> Result<Vec<Actor>, ServiceError> {
            Ok(self.lock()?.actors.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Actor>, ServiceError> {
            Ok(self.lock()?.actors.get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Actor>, ServiceError> {
            Ok(self.lock()?.actors.values().find(|a| a.name == name).cloned())
        }

        async fn insert(&self, name: &str) -> Result<Actor, ServiceError> {
            let mut state = self.lock()?;
            if state.actors.values().any(|a| a.name == name) {
                return Err(ServiceError::DuplicateActor);
            }
            state.next_actor_id += 1;
            let actor = Actor { id: state.next_actor_id, name: name.to_string() };
            state.actors.insert(actor.id, actor.clone());
            Ok(actor)
        }

        async fn rename(&self, id: i32, name: &str) -> Result<Actor, ServiceError> {
            let mut state = self.lock()?;
            if state.actors.values().any(|a| a.id != id && a.name == name) {
                return Err(ServiceError::DuplicateActor);
            }
            let actor = state.actors.get_mut(&id).ok_or_else(|| ServiceError::not_found("actor"))?;
            actor.name = name.to_string();
            Ok(actor.clone())
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut state = self.lock()?;
            if state.movies.values().any(|m| m.actor_ids.contains(&id)) {
                return Err(ServiceError::ActorInMovie);
            }
            Ok(state.actors.remove(&id).is_some())
        }
    }

    #[async_trait]
    impl MovieRepository for InMemoryCatalog {
        async fn list(&self) -> Result<Vec<Movie>, ServiceError> {
            Ok(self.lock()?.movies_where(|_| true))
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, ServiceError> {
            let state = self.lock()?;
            Ok(state.movies.get(&id).map(|m| state.materialize(id, m)))
        }

        async fn find_by_title_and_release_date(&self, title: &str, release_date: &str) -> Result<Option<Movie>, ServiceError> {
            let state = self.lock()?;
            Ok(state
                .movies_where(|m| m.title == title && m.release_date == release_date)
                .into_iter()
                .next())
        }

        async fn find_by_actor_id(&self, actor_id: i32) -> Result<Vec<Movie>, ServiceError> {
            Ok(self.lock()?.movies_where(|m| m.actor_ids.contains(&actor_id)))
        }

        async fn find_by_actor_name(&self, name: &str) -> Result<Vec<Movie>, ServiceError> {
            let state = self.lock()?;
            let Some(actor_id) = state.actors.values().find(|a| a.name == name).map(|a| a.id) else {
                return Ok(Vec::new());
            };
            Ok(state.movies_where(|m| m.actor_ids.contains(&actor_id)))
        }

        async fn insert(&self, movie: NewMovie) -> Result<Movie, ServiceError> {
            let mut state = self.lock()?;
            if state.key_taken(&movie.title, &movie.release_date, None) {
                return Err(ServiceError::DuplicateMovie);
            }
            state.next_movie_id += 1;
            let id = state.next_movie_id;
            let stored = StoredMovie {
                title: movie.title,
                release_date: movie.release_date,
                actor_ids: movie.actors.iter().map(|a| a.id).collect(),
            };
            let out = state.materialize(id, &stored);
            state.movies.insert(id, stored);
            Ok(out)
        }

        async fn update(&self, id: i32, movie: NewMovie) -> Result<Movie, ServiceError> {
            let mut state = self.lock()?;
            if !state.movies.contains_key(&id) {
                return Err(ServiceError::not_found("movie"));
            }
            if state.key_taken(&movie.title, &movie.release_date, Some(id)) {
                return Err(ServiceError::DuplicateMovie);
            }
            let stored = StoredMovie {
                title: movie.title,
                release_date: movie.release_date,
                actor_ids: movie.actors.iter().map(|a| a.id).collect(),
            };
            let out = state.materialize(id, &stored);
            state.movies.insert(id, stored);
            Ok(out)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.lock()?.movies.remove(&id).is_some())
        }
    }
}

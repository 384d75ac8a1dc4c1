use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::actor_service::ActorService;
use service::movie_service::MovieService;
use service::repo::seaorm::{SeaOrmActorRepository, SeaOrmMovieRepository};
use service::repository::mock::InMemoryCatalog;
use service::repository::{ActorRepository, MovieRepository};

pub type SharedActorService = ActorService<dyn ActorRepository, dyn MovieRepository>;
pub type SharedMovieService = MovieService<dyn ActorRepository, dyn MovieRepository>;

/// Services shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub actors: Arc<SharedActorService>,
    pub movies: Arc<SharedMovieService>,
}

impl ServerState {
    pub fn new(actor_repo: Arc<dyn ActorRepository>, movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self {
            actors: Arc::new(ActorService::new(actor_repo.clone(), movie_repo.clone())),
            movies: Arc::new(MovieService::new(actor_repo, movie_repo)),
        }
    }

    pub fn with_db(db: DatabaseConnection) -> Self {
        let actors = Arc::new(SeaOrmActorRepository { db: db.clone() });
        let movies = Arc::new(SeaOrmMovieRepository { db });
        Self::new(actors, movies)
    }

    /// Non-persistent store, used by router tests.
    pub fn in_memory() -> Self {
        let catalog = Arc::new(InMemoryCatalog::default());
        Self::new(catalog.clone(), catalog)
    }
}

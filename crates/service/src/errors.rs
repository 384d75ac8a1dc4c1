use thiserror::Error;

use models::errors::ModelError;

/// Business failures raised by the catalog services and repositories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("actor already exists")]
    DuplicateActor,
    #[error("duplicate actors listed in request")]
    DuplicateActors,
    #[error("duplicate movie entry")]
    DuplicateMovie,
    #[error("no actors in this movie")]
    MissingActors,
    #[error("{0} is required")]
    FieldRequired(&'static str),
    #[error("release date '{0}' is not in YYYY-MM-DD format")]
    DateFormat(String),
    #[error("actor is in a movie and cannot be deleted")]
    ActorInMovie,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(entity.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 2001,
            ServiceError::DuplicateActor => 2002,
            ServiceError::DuplicateActors => 2003,
            ServiceError::DuplicateMovie => 2004,
            ServiceError::MissingActors => 2005,
            ServiceError::FieldRequired(_) => 2006,
            ServiceError::DateFormat(_) => 2007,
            ServiceError::ActorInMovie => 2008,
            ServiceError::Validation(_) => 2009,
            ServiceError::Repository(_) => 2100,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::NotFound(entity) => ServiceError::NotFound(entity),
            ModelError::Conflict(msg) | ModelError::Db(msg) => ServiceError::Repository(msg),
        }
    }
}

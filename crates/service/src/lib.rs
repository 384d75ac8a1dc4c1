//! Service layer for the movie catalog.
//! - Validation and actor resolve-or-create live here, independent of axum.
//! - Persistence goes through the repository traits; `repo::seaorm` backs them with the `models` entities.
//! - Every failure is a `ServiceError` variant.

pub mod errors;
pub mod domain;
pub mod validation;
pub mod repository;
pub mod repo;
pub mod actor_service;
pub mod movie_service;
#[cfg(test)]
pub mod test_support;

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use service::domain::{Movie, MovieInput};
use service::errors::ServiceError;
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/movies", tag = "movies",
    responses(
        (status = 200, description = "All movies", body = [crate::openapi::MovieDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.movies.get_all().await.map_err(|e| ApiError::from_service(e, None))?;
    info!(count = movies.len(), "list movies");
    Ok(Json(movies))
}

#[utoipa::path(
    get, path = "/api/movies/{id}", tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie", body = crate::openapi::MovieDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<Movie>, ApiError> {
    let Path(id) = path.map_err(ApiError::from_path_rejection)?;
    info!(id, "get movie");
    state.movies.get_by_id(id).await.map(Json).map_err(|e| ApiError::from_service(e, None))
}

#[utoipa::path(
    post, path = "/api/movies", tag = "movies",
    request_body = crate::openapi::MovieRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MovieDoc),
        (status = 409, description = "Duplicate movie entry", body = crate::openapi::ErrorBody),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let Json(input) = payload.map_err(ApiError::from_rejection)?;
    info!(title = ?input.title, release_date = ?input.release_date, actors = input.actors.len(), "create movie");
    match state.movies.create(input.clone()).await {
        Ok(movie) => Ok((StatusCode::CREATED, Json(movie))),
        Err(e) => Err(ApiError::from_service(e, Some(&ServiceError::DuplicateMovie)).with_data(&input)),
    }
}

#[utoipa::path(
    put, path = "/api/movies/{id}", tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    request_body = crate::openapi::MovieRequest,
    responses(
        (status = 201, description = "Updated", body = crate::openapi::MovieDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let Path(id) = path.map_err(ApiError::from_path_rejection)?;
    let Json(input) = payload.map_err(ApiError::from_rejection)?;
    info!(id, title = ?input.title, "update movie");
    match state.movies.update(id, input.clone()).await {
        Ok(movie) => Ok((StatusCode::CREATED, Json(movie))),
        Err(e) => Err(ApiError::from_service(e, None).with_data(&input)),
    }
}

#[utoipa::path(
    delete, path = "/api/movies/{id}", tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<StatusCode, ApiError> {
    let Path(id) = path.map_err(ApiError::from_path_rejection)?;
    info!(id, "delete movie");
    state.movies.delete(id).await.map_err(|e| ApiError::from_service(e, None))?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/movies/actors/{actor_id}/movies", tag = "movies",
    params(("actor_id" = i32, Path, description = "Actor id")),
    responses(
        (status = 200, description = "Movies listing the actor", body = [crate::openapi::MovieDoc]),
        (status = 404, description = "Actor not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn by_actor(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<Vec<Movie>>, ApiError> {
    let Path(actor_id) = path.map_err(ApiError::from_path_rejection)?;
    info!(actor_id, "movies by actor");
    let actor = state.actors.get_by_id(actor_id).await.map_err(|e| ApiError::from_service(e, None))?;
    state.movies.get_movies_by_actor(&actor).await.map(Json).map_err(|e| ApiError::from_service(e, None))
}

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use service::domain::{Actor, ActorInput, Movie};
use service::errors::ServiceError;
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/actors", tag = "actors",
    responses(
        (status = 200, description = "All actors", body = [crate::openapi::ActorDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Actor>>, ApiError> {
    let actors = state.actors.get_all().await.map_err(|e| ApiError::from_service(e, None))?;
    info!(count = actors.len(), "list actors");
    Ok(Json(actors))
}

#[utoipa::path(
    get, path = "/api/actors/{id}", tag = "actors",
    params(("id" = i32, Path, description = "Actor id")),
    responses(
        (status = 200, description = "Actor", body = crate::openapi::ActorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<Actor>, ApiError> {
    let Path(id) = path.map_err(ApiError::from_path_rejection)?;
    info!(id, "get actor");
    state.actors.get_by_id(id).await.map(Json).map_err(|e| ApiError::from_service(e, None))
}

#[utoipa::path(
    post, path = "/api/actors", tag = "actors",
    request_body = crate::openapi::ActorRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ActorDoc),
        (status = 409, description = "Actor already exists", body = crate::openapi::ErrorBody),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ActorInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Actor>), ApiError> {
    let Json(input) = payload.map_err(ApiError::from_rejection)?;
    info!(name = %input.name, "create actor");
    match state.actors.create(input.clone()).await {
        Ok(actor) => Ok((StatusCode::CREATED, Json(actor))),
        Err(e) => Err(ApiError::from_service(e, Some(&ServiceError::DuplicateActor)).with_data(&input)),
    }
}

#[utoipa::path(
    put, path = "/api/actors/{id}", tag = "actors",
    params(("id" = i32, Path, description = "Actor id")),
    request_body = crate::openapi::ActorRequest,
    responses(
        (status = 201, description = "Updated", body = crate::openapi::ActorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ActorInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Actor>), ApiError> {
    let Path(id) = path.map_err(ApiError::from_path_rejection)?;
    let Json(input) = payload.map_err(ApiError::from_rejection)?;
    info!(id, name = %input.name, "update actor");
    match state.actors.update(id, input.clone()).await {
        Ok(actor) => Ok((StatusCode::CREATED, Json(actor))),
        Err(e) => Err(ApiError::from_service(e, None).with_data(&input)),
    }
}

#[utoipa::path(
    delete, path = "/api/actors/{id}", tag = "actors",
    params(("id" = i32, Path, description = "Actor id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 400, description = "Actor is in a movie", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<StatusCode, ApiError> {
    let Path(id) = path.map_err(ApiError::from_path_rejection)?;
    info!(id, "delete actor");
    state.actors.delete(id).await.map_err(|e| ApiError::from_service(e, None))?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/actors/{id}/movies", tag = "actors",
    params(("id" = i32, Path, description = "Actor id")),
    responses(
        (status = 200, description = "Movies the actor appears in", body = [crate::openapi::MovieDoc]),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn movies(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<Vec<Movie>>, ApiError> {
    let Path(id) = path.map_err(ApiError::from_path_rejection)?;
    state.actors.get_movies_by_actor(id).await.map(Json).map_err(|e| ApiError::from_service(e, None))
}

pub mod actors;
pub mod movies;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router: health, OpenAPI document, actor and movie APIs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let actor_routes = Router::new()
        .route("/api/actors", get(actors::list).post(actors::create))
        .route("/api/actors/:id", get(actors::get).put(actors::update).delete(actors::delete))
        .route("/api/actors/:id/movies", get(actors::movies));

    let movie_routes = Router::new()
        .route("/api/movies", get(movies::list).post(movies::create))
        .route("/api/movies/:id", get(movies::get).put(movies::update).delete(movies::delete))
        .route("/api/movies/actors/:actor_id/movies", get(movies::by_actor));

    public
        .merge(actor_routes)
        .merge(movie_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and transport failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ActorRequest { pub name: String }

#[derive(Serialize, ToSchema)]
pub struct ActorDoc { pub id: i32, pub name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    pub title: String,
    /// `YYYY-MM-DD`
    pub release_date: String,
    pub actors: Vec<ActorRequest>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDoc {
    pub id: i32,
    pub title: String,
    pub release_date: String,
    pub actors: Vec<ActorDoc>,
}

/// Error body; `data` echoes the request payload on POST/PUT and is absent otherwise.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    pub message: String,
    pub status_code: u16,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::actors::list,
        crate::routes::actors::get,
        crate::routes::actors::create,
        crate::routes::actors::update,
        crate::routes::actors::delete,
        crate::routes::actors::movies,
        crate::routes::movies::list,
        crate::routes::movies::get,
        crate::routes::movies::create,
        crate::routes::movies::update,
        crate::routes::movies::delete,
        crate::routes::movies::by_actor,
    ),
    components(
        schemas(
            HealthResponse,
            ActorRequest,
            ActorDoc,
            MovieRequest,
            MovieDoc,
            ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "actors"),
        (name = "movies")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in [
            "/health",
            "/api/actors",
            "/api/actors/{id}",
            "/api/actors/{id}/movies",
            "/api/movies",
            "/api/movies/{id}",
            "/api/movies/actors/{actor_id}/movies",
        ] {
            assert!(paths.contains(&p), "missing {p}");
        }
    }
}

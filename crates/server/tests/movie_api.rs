use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

fn app() -> Router {
    routes::build_router(ServerState::in_memory(), CorsLayer::very_permissive())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

fn movie(title: &str, date: &str, actors: &[&str]) -> Value {
    let actors: Vec<Value> = actors.iter().map(|n| json!({"name": n})).collect();
    json!({"title": title, "releaseDate": date, "actors": actors})
}

#[tokio::test]
async fn create_then_get() {
    let app = app();
    let (status, created) = call(&app, Method::POST, "/api/movies", Some(movie("Alien", "1979-05-25", &["A", "B"]))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Alien");
    assert_eq!(created["releaseDate"], "1979-05-25");
    assert_eq!(created["actors"][0]["name"], "A");
    assert_eq!(created["actors"][1]["name"], "B");

    let (status, fetched) = call(&app, Method::GET, &format!("/api/movies/{}", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, actors) = call(&app, Method::GET, "/api/actors", None).await;
    assert_eq!(actors.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn duplicate_movie_is_conflict() {
    let app = app();
    let body = movie("Heat", "1995-12-15", &["Al Pacino"]);
    call(&app, Method::POST, "/api/movies", Some(body.clone())).await;

    let (status, err) = call(&app, Method::POST, "/api/movies", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["statusCode"], 409);
    assert_eq!(err["message"], "duplicate movie entry");
    assert_eq!(err["data"]["title"], "Heat");
    assert_eq!(err["data"]["releaseDate"], "1995-12-15");

    let (status, _) = call(&app, Method::POST, "/api/movies", Some(movie("Heat", "1986-01-01", &["Al Pacino"]))).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn validation_failures_are_bad_request() {
    let app = app();
    let cases = [
        (json!({"releaseDate": "1995-12-15", "actors": [{"name": "A"}]}), "title is required"),
        (movie("Heat", "1995-13-15", &["A"]), "release date '1995-13-15' is not in YYYY-MM-DD format"),
        (movie("Heat", "1995-12-15", &["John Doe", "john-doe"]), "duplicate actors listed in request"),
        (movie("Heat", "1995-12-15", &[]), "no actors in this movie"),
    ];
    for (body, message) in cases {
        let (status, err) = call(&app, Method::POST, "/api/movies", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{message}");
        assert_eq!(err["message"], message);
        assert_eq!(err["statusCode"], 400);
        assert_eq!(err["data"]["releaseDate"], body["releaseDate"]);
    }
}

#[tokio::test]
async fn overlong_title_is_bad_request() {
    let app = app();
    let title = "x".repeat(256);
    let (status, err) = call(&app, Method::POST, "/api/movies", Some(movie(&title, "1995-12-15", &["A"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "validation error: title longer than 255 characters");
    assert_eq!(err["statusCode"], 400);
}

#[tokio::test]
async fn bad_id_uses_error_shape() {
    let app = app();
    for uri in ["/api/movies/abc", "/api/movies/99999999999", "/api/movies/actors/x/movies"] {
        let (status, err) = call(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(err["statusCode"], 400);
        assert!(err.get("data").is_none());
    }
    let (status, _) = call(&app, Method::DELETE, "/api/movies/-", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_and_delete() {
    let app = app();
    let (_, a) = call(&app, Method::POST, "/api/movies", Some(movie("Alien", "1979-05-25", &["Sigourney Weaver"]))).await;
    call(&app, Method::POST, "/api/movies", Some(movie("Aliens", "1986-07-18", &["Sigourney Weaver"]))).await;
    let uri = format!("/api/movies/{}", a["id"]);

    let (status, updated) = call(&app, Method::PUT, &uri, Some(movie("Alien", "1979-05-25", &["Tom Skerritt"]))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(updated["id"], a["id"]);
    assert_eq!(updated["actors"][0]["name"], "Tom Skerritt");

    // a duplicate on update is a plain validation failure
    let (status, err) = call(&app, Method::PUT, &uri, Some(movie("Aliens", "1986-07-18", &["X"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "duplicate movie entry");

    let (status, err) = call(&app, Method::PUT, "/api/movies/999", Some(movie("Alien", "1979-05-25", &["X"]))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["data"]["title"], "Alien");

    let (status, _) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, err) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err, json!({"message": "movie not found", "statusCode": 404}));

    let (status, _) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn movies_by_actor() {
    let app = app();
    let (_, heat) = call(&app, Method::POST, "/api/movies", Some(movie("Heat", "1995-12-15", &["Al Pacino", "Val Kilmer"]))).await;
    call(&app, Method::POST, "/api/movies", Some(movie("Top Gun", "1986-05-16", &["Val Kilmer"]))).await;

    let val = &heat["actors"][1]["id"];
    let (status, movies) = call(&app, Method::GET, &format!("/api/movies/actors/{val}/movies"), None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = movies.as_array().unwrap().iter().filter_map(|m| m["title"].as_str()).collect();
    assert_eq!(titles, vec!["Heat", "Top Gun"]);

    let (status, err) = call(&app, Method::GET, "/api/movies/actors/999/movies", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], "actor not found");

    let (status, all) = call(&app, Method::GET, "/api/movies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);
}

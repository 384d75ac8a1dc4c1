use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Map, Value};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// HTTP error with the `{"data", "message", "statusCode"}` body.
///
/// `data` is only emitted when set, so GET/DELETE failures leave it out.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub data: Option<Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), data: None }
    }

    /// Map a service failure; `conflict` is the one variant this endpoint reports as 409.
    pub fn from_service(err: ServiceError, conflict: Option<&ServiceError>) -> Self {
        let status = status_for(&err, conflict);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(code = err.code(), error = %err, "request failed");
            return Self::new(status, "internal server error");
        }
        warn!(code = err.code(), status = status.as_u16(), error = %err, "request rejected");
        Self::new(status, err.to_string())
    }

    /// Unreadable request body; the original input is unknown, so `data` is null.
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "invalid request body");
        Self { status: StatusCode::BAD_REQUEST, message: rejection.body_text(), data: Some(Value::Null) }
    }

    /// Path parameter that is not a valid id.
    pub fn from_path_rejection(rejection: PathRejection) -> Self {
        warn!(error = %rejection, "invalid path parameter");
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }

    /// Echo the request payload back in `data`.
    pub fn with_data<T: Serialize>(mut self, data: &T) -> Self {
        self.data = Some(serde_json::to_value(data).unwrap_or(Value::Null));
        self
    }
}

pub fn status_for(err: &ServiceError, conflict: Option<&ServiceError>) -> StatusCode {
    match err {
        e if Some(e) == conflict => StatusCode::CONFLICT,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        if let Some(data) = self.data {
            body.insert("data".into(), data);
        }
        body.insert("message".into(), json!(self.message));
        body.insert("statusCode".into(), json!(self.status.as_u16()));
        (self.status, Json(Value::Object(body))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_only_for_the_named_variant() {
        let dup = ServiceError::DuplicateMovie;
        assert_eq!(status_for(&dup, Some(&ServiceError::DuplicateMovie)), StatusCode::CONFLICT);
        assert_eq!(status_for(&dup, None), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&ServiceError::DuplicateActors, Some(&ServiceError::DuplicateMovie)), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&ServiceError::not_found("movie"), Some(&ServiceError::DuplicateMovie)), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&ServiceError::ActorInMovie, None), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&ServiceError::Repository("down".into()), None), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn repository_detail_is_not_exposed() {
        let e = ApiError::from_service(ServiceError::Repository("password=hunter2".into()), None);
        assert_eq!(e.message, "internal server error");
        assert!(e.data.is_none());
    }

    #[test]
    fn data_is_echoed() {
        let e = ApiError::from_service(ServiceError::DuplicateActor, Some(&ServiceError::DuplicateActor))
            .with_data(&json!({"name": "Ada"}));
        assert_eq!(e.status, StatusCode::CONFLICT);
        assert_eq!(e.data, Some(json!({"name": "Ada"})));
    }
}

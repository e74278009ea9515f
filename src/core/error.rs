// Centralized error handling for the directory service

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::models::response::ErrorResponse;

/// Errors raised by a user store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Request body failed the presence checks for an operation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing item")]
    MissingFields(Vec<&'static str>),

    #[error("Empty item")]
    EmptyFields(Vec<&'static str>),
}

/// Errors returned by the HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error 404, id Not Found")]
    NotFound(i64),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        match self {
            ApiError::NotFound(id) => {
                payload.insert("id".to_string(), json!(id));
            }
            ApiError::Validation(ValidationError::MissingFields(fields)) => {
                payload.insert("missing".to_string(), json!(fields));
            }
            ApiError::Validation(ValidationError::EmptyFields(fields)) => {
                payload.insert("fields".to_string(), json!(fields));
            }
            ApiError::BadRequest(_) | ApiError::Internal(_) => {}
        }
        payload
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed");
        }

        (
            self.status(),
            Json(ErrorResponse {
                message: self.to_string(),
                payload: self.payload(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> Value {
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError::NotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Error 404, id Not Found");
        assert_eq!(body["id"], 42);
    }

    #[tokio::test]
    async fn test_missing_fields_response() {
        let err: ApiError = ValidationError::MissingFields(vec!["last", "email"]).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Missing item");
        assert_eq!(body["missing"], json!(["last", "email"]));
    }

    #[tokio::test]
    async fn test_empty_fields_response() {
        let err: ApiError = ValidationError::EmptyFields(vec!["first"]).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Empty item");
        assert_eq!(body["fields"], json!(["first"]));
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let response = ApiError::BadRequest("Invalid id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "Invalid id" }));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = ApiError::Internal("disk I/O error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "Internal server error" }));
    }

    #[test]
    fn test_store_not_found_maps_to_api_not_found() {
        let err: ApiError = StoreError::NotFound(7).into();
        assert!(matches!(err, ApiError::NotFound(7)));
    }
}

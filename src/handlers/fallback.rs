use crate::models::response::ErrorResponse;
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde_json::Map;
use tracing::debug;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "Not Found".to_string(),
            payload: Map::new(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_fallback_is_json_404() {
        let response = fallback_handler(Uri::from_static("/Users")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "Not Found");
        assert!(body.payload.is_empty());
    }
}

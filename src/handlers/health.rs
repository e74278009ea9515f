use crate::core::state::AppState;
use crate::models::response::HealthResponse;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Health check handler
///
/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            backend: state.store.backend().to_string(),
            timestamp,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::memory::MemoryStore;
    use axum::body::Body;
    use http_body_util::BodyExt;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Arc::new(MemoryStore::seeded())))
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler(State(create_test_state())).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_response_has_backend_and_timestamp() {
        let response = health_handler(State(create_test_state())).await.into_response();

        let (parts, body) = response.into_parts();
        assert_eq!(parts.status, StatusCode::OK);

        let body = Body::new(body);
        let bytes = body.collect().await.unwrap().to_bytes();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(health.status, "ok");
        assert_eq!(health.backend, "memory");
        assert!(health.timestamp > 0);
    }
}

use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::user::{User, UserFields};
use crate::validation::fields::{validate_create, validate_update};
use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// List every user in insertion order
///
/// GET /users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list_all().await?;
    debug!(count = users.len(), "Listed users");

    Ok(Json(users))
}

/// Fetch one user
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;

    let user = state.store.get(id).await.inspect_err(|e| {
        debug!(user_id = id, error = %e, "User lookup failed");
    })?;

    Ok(Json(user))
}

/// Create a user from `{first, last, email, role?}`
///
/// POST /users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UserFields>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(fields) = body?;

    let new_user = validate_create(fields).inspect_err(|e| {
        warn!(error = ?e, "Rejected user creation");
    })?;

    let user = state.store.create(new_user).await?;

    info!(user_id = user.id, email = %user.email, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Apply the supplied fields to a user
///
/// PATCH /users/{id}, POST /users/{id}
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UserFields>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;

    // An unknown id is a 404 whatever the body holds
    let current = state.store.get(id).await?;

    let Json(fields) = body?;

    let patch = validate_update(fields).inspect_err(|e| {
        warn!(user_id = id, error = ?e, "Rejected user update");
    })?;

    if patch.is_empty() {
        debug!(user_id = id, "Update carried no known fields");
        return Ok(Json(current));
    }

    let user = state.store.update(id, patch).await?;

    info!(user_id = id, "User updated");

    Ok(Json(user))
}

/// Mark a user inactive
///
/// POST /users/{id}/deactivate
pub async fn deactivate_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;

    let user = state.store.deactivate(id).await?;

    info!(user_id = id, "User deactivated");

    Ok(Json(user))
}

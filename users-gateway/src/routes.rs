//! Axum route handlers for the users API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use users_core::{UserId, UserInput};
use users_store::UserStore;

use crate::error::ApiError;

// ── Shared state ─────────────────────────────────────────────────────────────

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn UserStore>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given store.
pub fn create_router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /users` — validate and persist a new user.
///
/// # Errors
/// Returns [`ApiError::InvalidJson`] for an undecodable body,
/// [`ApiError::Validation`] listing every violated constraint, or
/// [`ApiError::Store`] if the store fails.
pub async fn create_user(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let input = decode_input(&body)?;
    let user = store
        .create_user(&input)
        .await
        .map_err(ApiError::store("create user"))?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users` — every user, in store order.
///
/// # Errors
/// Returns [`ApiError::Store`] if the store fails.
pub async fn list_users(State(store): State<SharedStore>) -> Result<impl IntoResponse, ApiError> {
    let users = store
        .list_users()
        .await
        .map_err(ApiError::store("list users"))?;
    Ok(Json(users))
}

/// `GET /users/{id}` — a single user.
///
/// # Errors
/// Returns [`ApiError::InvalidId`], [`ApiError::UserNotFound`], or
/// [`ApiError::Store`].
pub async fn get_user(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: UserId = raw_id.parse()?;
    let user = store
        .get_user(id)
        .await
        .map_err(ApiError::lookup("get user"))?;
    Ok(Json(user))
}

/// `PUT /users/{id}` — replace name, email and age of an existing user.
///
/// The id is checked before the body is decoded.
///
/// # Errors
/// Returns [`ApiError::InvalidId`], [`ApiError::InvalidJson`],
/// [`ApiError::Validation`], [`ApiError::UserNotFound`], or
/// [`ApiError::Store`].
pub async fn update_user(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id: UserId = raw_id.parse()?;
    let input = decode_input(&body)?;
    let user = store
        .update_user(id, &input)
        .await
        .map_err(ApiError::lookup("update user"))?;
    Ok(Json(user))
}

/// `DELETE /users/{id}` — remove a user.
///
/// Responds 204 whether or not the id existed.
///
/// # Errors
/// Returns [`ApiError::InvalidId`] or [`ApiError::Store`].
pub async fn delete_user(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: UserId = raw_id.parse()?;
    store
        .delete_user(id)
        .await
        .map_err(ApiError::store("delete user"))?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Body decoding ─────────────────────────────────────────────────────────────

/// Decode a create/update body and run the validation routine on it.
///
/// # Errors
/// Returns [`ApiError::InvalidJson`] if the bytes are not a user object, or
/// [`ApiError::Validation`] with every violation found.
pub fn decode_input(body: &[u8]) -> Result<UserInput, ApiError> {
    let input: UserInput = serde_json::from_slice(body)?;
    let errors = input.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    Ok(input)
}

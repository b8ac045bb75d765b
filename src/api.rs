//! HTTP API
//!
//! TigerStyle: Thin translation between HTTP and the storage contract.
//!
//! The router holds `Arc<dyn StorageBackend>` and never a concrete backend,
//! so the same handlers serve every storage medium.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use newsdesk_store::{Post, StorageBackend, StorageError};
use serde::{Deserialize, Serialize};

// =============================================================================
// State
// =============================================================================

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn StorageBackend>,
}

impl AppState {
    /// Wrap a backend.
    pub fn new(store: Arc<dyn StorageBackend>) -> Self {
        Self { store }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Storage(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Storage(e) if e.is_duplicate() => StatusCode::CONFLICT,
            Self::Storage(e) if e.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

// =============================================================================
// Responses
// =============================================================================

/// Body returned after a successful add
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
}

// =============================================================================
// Router
// =============================================================================

/// Build the router over a storage backend.
pub fn router(store: Arc<dyn StorageBackend>) -> Router {
    Router::new()
        .route(
            "/posts",
            get(list_posts)
                .post(add_post)
                .put(update_post)
                .delete(delete_post),
        )
        .route("/health", get(health))
        .with_state(AppState::new(store))
}

async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.store.list_posts().await?))
}

async fn add_post(
    State(state): State<AppState>,
    Json(post): Json<Post>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.store.add_post(&post).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

async fn update_post(
    State(state): State<AppState>,
    Json(post): Json<Post>,
) -> Result<StatusCode, ApiError> {
    state.store.update_post(&post).await?;
    Ok(StatusCode::OK)
}

async fn delete_post(
    State(state): State<AppState>,
    Json(post): Json<Post>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_post(&post).await?;
    Ok(StatusCode::OK)
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.store.ping().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        backend: state.store.name().to_string(),
    }))
}

// =============================================================================
// Tests
// =============================================================================

//! Session provisioning handlers for the REST API.
//!
//! The external path that stores, inspects, and clears the cart session
//! token. Unlike the count endpoints these are fallible: a broken store is
//! a real error here, not something to silently degrade.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use storefront_core::session::store::SessionStore;
use storefront_types::config::CART_SESSION_KEY;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Body for PUT /api/v1/session.
#[derive(Debug, Deserialize)]
pub struct SetSessionBody {
    pub session: String,
}

/// Session payload.
#[derive(Debug, Serialize)]
pub struct SessionPayload {
    /// Stored token, or null when none is provisioned.
    pub session: Option<String>,
}

/// GET /api/v1/session - Show the stored session token, if any.
pub async fn get_session(
    State(state): State<AppState>,
) -> Result<ApiResponse<SessionPayload>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let session = state.session_store.get(CART_SESSION_KEY).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(ApiResponse::success(
        SessionPayload { session },
        request_id,
        elapsed,
    ))
}

/// PUT /api/v1/session - Store a session token.
pub async fn set_session(
    State(state): State<AppState>,
    Json(body): Json<SetSessionBody>,
) -> Result<ApiResponse<SessionPayload>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let token = body.session.trim();
    if token.is_empty() {
        return Err(AppError::Validation(
            "session token cannot be empty".to_string(),
        ));
    }

    state.session_store.set(CART_SESSION_KEY, token).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(ApiResponse::success(
        SessionPayload {
            session: Some(token.to_string()),
        },
        request_id,
        elapsed,
    ))
}

/// DELETE /api/v1/session - Remove the stored session token.
pub async fn clear_session(
    State(state): State<AppState>,
) -> Result<ApiResponse<SessionPayload>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    state.session_store.clear(CART_SESSION_KEY).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(ApiResponse::success(
        SessionPayload { session: None },
        request_id,
        elapsed,
    ))
}

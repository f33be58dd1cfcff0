//! Cart badge count handler for the REST API.

use std::time::Instant;

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use storefront_types::cart::CartCount;
use storefront_types::session::SessionId;

use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for the badge count endpoint.
#[derive(Debug, Deserialize)]
pub struct CountQuery {
    /// Externally provisioned session token. When absent, the stored
    /// session (or the configured default) is used.
    pub session: Option<String>,
}

/// Badge count payload.
#[derive(Debug, Serialize)]
pub struct CountPayload {
    pub session: SessionId,
    pub cart_count: CartCount,
}

/// GET /api/v1/cart/count - Compute the badge count.
///
/// Total by contract: retrieval failures degrade to a count of `0` with a
/// warn-level diagnostic; the endpoint never returns an error for them.
pub async fn get_count(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> ApiResponse<CountPayload> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let session = match query.session {
        Some(token) => SessionId::new(token),
        None => state.shell_service.resolver().resolve().await,
    };
    let cart_count = state.shell_service.cart().badge_count(&session).await;
    let elapsed = start.elapsed().as_millis() as u64;

    ApiResponse::success(
        CountPayload {
            session,
            cart_count,
        },
        request_id,
        elapsed,
    )
}

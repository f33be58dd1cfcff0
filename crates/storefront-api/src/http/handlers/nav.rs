//! Navigation shell handler for the REST API.

use std::time::Instant;

use axum::extract::State;

use storefront_types::nav::NavShell;

use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/nav - Mount and return the navigation shell.
///
/// One mount per request: the badge count is computed exactly once here and
/// not refreshed until the client requests the shell again. Always resolves
/// successfully; a failing item store yields a shell with a zero count.
pub async fn get_nav(State(state): State<AppState>) -> ApiResponse<NavShell> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let shell = state.shell_service.mount().await;
    let elapsed = start.elapsed().as_millis() as u64;

    ApiResponse::success(shell, request_id, elapsed)
}

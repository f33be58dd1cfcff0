//! HTTP/REST API layer for Storefront.
//!
//! Axum-based REST API at `/api/v1/` with envelope response format and CORS
//! support. The cart count endpoints honor the total-function contract:
//! retrieval failures surface as a `0` count, never as an error response.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;

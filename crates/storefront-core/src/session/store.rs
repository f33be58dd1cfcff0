//! Session store trait.
//!
//! Defines the interface for the persistent client-side state the session
//! token lives in. Implementations live in storefront-infra.

use storefront_types::error::RepositoryError;

/// Trait for persistent key-value client state.
///
/// The cart session token is stored under the fixed key
/// [`storefront_types::config::CART_SESSION_KEY`]. The resolver only ever
/// reads; `set` and `clear` exist for the external provisioning path.
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait SessionStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, RepositoryError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Remove a key. No-op if the key does not exist.
    fn clear(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}

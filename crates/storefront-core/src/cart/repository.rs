//! Cart item repository trait definition.

use storefront_types::cart::CartLineItem;
use storefront_types::error::RepositoryError;
use storefront_types::session::SessionId;

/// Repository trait for reading cart line items.
///
/// The aggregation side is strictly read-only: items are created and mutated
/// by an external cart management path. Implementations live in
/// storefront-infra (e.g., SqliteCartItemRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait CartItemRepository: Send + Sync {
    /// Fetch all line items held for a session.
    ///
    /// Zero-to-many items; ordering is irrelevant to the aggregation.
    fn items_for_session(
        &self,
        session: &SessionId,
    ) -> impl std::future::Future<Output = Result<Vec<CartLineItem>, RepositoryError>> + Send;
}

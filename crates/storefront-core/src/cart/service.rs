//! Cart aggregation service.
//!
//! Reduces a session's line items to the single badge count. The contract
//! is a total function: retrieval failures are caught at this boundary,
//! logged for diagnostics, and reported as a zero count -- a broken badge
//! must never break page rendering.

use storefront_types::cart::CartCount;
use storefront_types::session::SessionId;
use tracing::{debug, warn};

use crate::cart::repository::CartItemRepository;

/// Computes the cart badge count for a session.
///
/// Generic over `CartItemRepository` to maintain clean architecture
/// (storefront-core never depends on storefront-infra).
pub struct CartService<R: CartItemRepository> {
    items: R,
}

impl<R: CartItemRepository> CartService<R> {
    /// Create a new cart service with the given item repository.
    pub fn new(items: R) -> Self {
        Self { items }
    }

    /// Access the item repository.
    pub fn items(&self) -> &R {
        &self.items
    }

    /// Compute the badge count for a session.
    ///
    /// Sums `quantity` over the session's line items; an empty cart yields
    /// `0`. Quantities are summed as-is (the store guarantees positive
    /// values; no clamping). Duplicate `product_id` entries both contribute.
    ///
    /// Any repository failure degrades to `0` with a warn-level diagnostic.
    /// This method never fails and never distinguishes "session not found"
    /// from transport errors.
    pub async fn badge_count(&self, session: &SessionId) -> CartCount {
        match self.items.items_for_session(session).await {
            Ok(items) => {
                let count = items.iter().map(|item| item.quantity).sum();
                debug!(session = %session, count, "Cart badge count computed");
                count
            }
            Err(err) => {
                warn!(session = %session, error = %err, "Cart item retrieval failed, degrading badge count to 0");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_types::cart::CartLineItem;
    use storefront_types::error::RepositoryError;

    /// Repository returning a fixed set of items for one session.
    struct FixedRepository {
        session: SessionId,
        items: Vec<CartLineItem>,
    }

    impl CartItemRepository for FixedRepository {
        async fn items_for_session(
            &self,
            session: &SessionId,
        ) -> Result<Vec<CartLineItem>, RepositoryError> {
            if *session == self.session {
                Ok(self.items.clone())
            } else {
                Ok(Vec::new())
            }
        }
    }

    /// Repository whose reads always fail.
    struct FailingRepository;

    impl CartItemRepository for FailingRepository {
        async fn items_for_session(
            &self,
            _session: &SessionId,
        ) -> Result<Vec<CartLineItem>, RepositoryError> {
            Err(RepositoryError::Query("connection reset".to_string()))
        }
    }

    fn line_item(id: &str, product_id: &str, quantity: i64, session: &SessionId) -> CartLineItem {
        CartLineItem {
            id: id.to_string(),
            session: session.clone(),
            product_id: product_id.to_string(),
            quantity,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_badge_count_sums_quantities() {
        let session = SessionId::new("test_session_123");
        let service = CartService::new(FixedRepository {
            session: session.clone(),
            items: vec![
                line_item("p1", "abc", 2, &session),
                line_item("p2", "def", 1, &session),
            ],
        });

        assert_eq!(service.badge_count(&session).await, 3);
    }

    #[tokio::test]
    async fn test_badge_count_empty_cart_is_zero() {
        let session = SessionId::new("s");
        let service = CartService::new(FixedRepository {
            session: session.clone(),
            items: Vec::new(),
        });

        assert_eq!(service.badge_count(&session).await, 0);
    }

    #[tokio::test]
    async fn test_badge_count_unknown_session_is_zero() {
        let session = SessionId::new("known");
        let service = CartService::new(FixedRepository {
            session,
            items: vec![],
        });

        assert_eq!(service.badge_count(&SessionId::new("other")).await, 0);
    }

    #[tokio::test]
    async fn test_badge_count_failure_degrades_to_zero() {
        let service = CartService::new(FailingRepository);
        assert_eq!(service.badge_count(&SessionId::new("any")).await, 0);
    }

    #[tokio::test]
    async fn test_badge_count_is_deterministic() {
        let session = SessionId::new("s");
        let service = CartService::new(FixedRepository {
            session: session.clone(),
            items: vec![
                line_item("p1", "abc", 4, &session),
                line_item("p2", "def", 5, &session),
            ],
        });

        let first = service.badge_count(&session).await;
        let second = service.badge_count(&session).await;
        assert_eq!(first, 9);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_badge_count_duplicate_products_both_counted() {
        let session = SessionId::new("s");
        let service = CartService::new(FixedRepository {
            session: session.clone(),
            items: vec![
                line_item("p1", "abc", 2, &session),
                line_item("p2", "abc", 3, &session),
            ],
        });

        assert_eq!(service.badge_count(&session).await, 5);
    }

    #[tokio::test]
    async fn test_badge_count_sums_negative_quantities_as_is() {
        // The store contract guarantees positive quantities; if it is
        // violated the values are summed without clamping.
        let session = SessionId::new("s");
        let service = CartService::new(FixedRepository {
            session: session.clone(),
            items: vec![
                line_item("p1", "abc", 5, &session),
                line_item("p2", "def", -2, &session),
            ],
        });

        assert_eq!(service.badge_count(&session).await, 3);
    }
}

//! Shell service assembling the navigation shell.
//!
//! `mount` is the single display-refresh trigger: it resolves the session,
//! computes the badge count exactly once, and publishes the assembled shell.
//! The count is not refreshed when the cart mutates elsewhere -- that
//! staleness window is accepted behavior, and re-invoking `mount` is the
//! explicit refresh signal.

use storefront_types::nav::NavShell;
use storefront_types::session::SessionId;
use tracing::info;

use crate::cart::repository::CartItemRepository;
use crate::cart::service::CartService;
use crate::nav::menu::{self, CART_ITEM_TITLE};
use crate::session::resolver::SessionResolver;
use crate::session::store::SessionStore;

/// Assembles the navigation shell for the storefront.
///
/// Generic over the session store and cart item repository so the core
/// stays free of infrastructure concerns.
pub struct ShellService<S: SessionStore, R: CartItemRepository> {
    resolver: SessionResolver<S>,
    cart: CartService<R>,
}

impl<S: SessionStore, R: CartItemRepository> ShellService<S, R> {
    /// Create a shell service from its collaborators.
    pub fn new(resolver: SessionResolver<S>, cart: CartService<R>) -> Self {
        Self { resolver, cart }
    }

    /// Access the session resolver.
    pub fn resolver(&self) -> &SessionResolver<S> {
        &self.resolver
    }

    /// Access the cart service.
    pub fn cart(&self) -> &CartService<R> {
        &self.cart
    }

    /// Assemble the shell: resolve the session, compute the badge count
    /// once, and attach it to the Cart menu entry.
    ///
    /// Total: resolution and aggregation both degrade rather than fail, so
    /// a shell is always produced. Only one aggregation request is issued
    /// per mount; there is no interleaving to guard against.
    pub async fn mount(&self) -> NavShell {
        let session = self.resolver.resolve().await;
        self.mount_for(session).await
    }

    /// Assemble the shell for an externally provisioned session identifier,
    /// bypassing the resolver.
    pub async fn mount_for(&self, session: SessionId) -> NavShell {
        let cart_count = self.cart.badge_count(&session).await;

        let mut items = menu::navigation_items();
        if cart_count > 0 {
            for item in &mut items {
                if item.title == CART_ITEM_TITLE {
                    item.badge = Some(cart_count);
                }
            }
        }

        info!(session = %session, cart_count, "Navigation shell mounted");

        NavShell {
            header: menu::brand_header(),
            items,
            brands: menu::brand_links(),
            session,
            cart_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_types::cart::CartLineItem;
    use storefront_types::config::CART_SESSION_KEY;
    use storefront_types::error::RepositoryError;

    struct StaticStore {
        token: Option<String>,
    }

    impl SessionStore for StaticStore {
        async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
            if key == CART_SESSION_KEY {
                Ok(self.token.clone())
            } else {
                Ok(None)
            }
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn clear(&self, _key: &str) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    struct SessionItems {
        session: SessionId,
        quantities: Vec<i64>,
    }

    impl CartItemRepository for SessionItems {
        async fn items_for_session(
            &self,
            session: &SessionId,
        ) -> Result<Vec<CartLineItem>, RepositoryError> {
            if *session != self.session {
                return Ok(Vec::new());
            }
            Ok(self
                .quantities
                .iter()
                .enumerate()
                .map(|(i, &quantity)| CartLineItem {
                    id: format!("p{i}"),
                    session: session.clone(),
                    product_id: format!("prod-{i}"),
                    quantity,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
                .collect())
        }
    }

    struct FailingItems;

    impl CartItemRepository for FailingItems {
        async fn items_for_session(
            &self,
            _session: &SessionId,
        ) -> Result<Vec<CartLineItem>, RepositoryError> {
            Err(RepositoryError::Connection)
        }
    }

    fn shell_service<R: CartItemRepository>(
        token: Option<&str>,
        items: R,
    ) -> ShellService<StaticStore, R> {
        let store = StaticStore {
            token: token.map(str::to_string),
        };
        let resolver = SessionResolver::new(store, SessionId::new("default_session"));
        ShellService::new(resolver, CartService::new(items))
    }

    #[tokio::test]
    async fn test_mount_attaches_badge_to_cart_entry() {
        let session = SessionId::new("test_session_123");
        let service = shell_service(
            Some("test_session_123"),
            SessionItems {
                session,
                quantities: vec![2, 1],
            },
        );

        let shell = service.mount().await;
        assert_eq!(shell.cart_count, 3);
        assert_eq!(shell.session.as_str(), "test_session_123");

        let cart = shell.items.iter().find(|i| i.title == "Cart").unwrap();
        assert_eq!(cart.badge, Some(3));

        // Other entries never carry a badge.
        assert!(shell
            .items
            .iter()
            .filter(|i| i.title != "Cart")
            .all(|i| i.badge.is_none()));
    }

    #[tokio::test]
    async fn test_mount_no_stored_session_uses_default_and_zero_count() {
        let service = shell_service(
            None,
            SessionItems {
                session: SessionId::new("someone_else"),
                quantities: vec![7],
            },
        );

        let shell = service.mount().await;
        assert_eq!(shell.session.as_str(), "default_session");
        assert_eq!(shell.cart_count, 0);

        let cart = shell.items.iter().find(|i| i.title == "Cart").unwrap();
        assert!(cart.badge.is_none(), "zero count must not render a badge");
    }

    #[tokio::test]
    async fn test_mount_retrieval_failure_degrades_to_zero() {
        let service = shell_service(Some("test_session_123"), FailingItems);

        let shell = service.mount().await;
        assert_eq!(shell.cart_count, 0);
        assert!(shell.items.iter().all(|i| i.badge.is_none()));
    }

    #[tokio::test]
    async fn test_mount_for_bypasses_resolver() {
        let session = SessionId::new("handed_in");
        let service = shell_service(
            Some("stored_token"),
            SessionItems {
                session: session.clone(),
                quantities: vec![4],
            },
        );

        let shell = service.mount_for(session.clone()).await;
        assert_eq!(shell.session, session);
        assert_eq!(shell.cart_count, 4);
    }

    #[tokio::test]
    async fn test_mount_includes_static_scaffolding() {
        let service = shell_service(
            None,
            SessionItems {
                session: SessionId::new("s"),
                quantities: vec![],
            },
        );

        let shell = service.mount().await;
        assert_eq!(shell.header.name, "GameCtrl");
        assert_eq!(shell.items.len(), 3);
        assert_eq!(shell.brands.len(), 4);
    }
}

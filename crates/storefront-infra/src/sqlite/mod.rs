//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools.

pub mod cart;
pub mod pool;
pub mod session;

#[cfg(test)]
mod shell_tests {
    //! End-to-end shell assembly over the real SQLite implementations.

    use chrono::Utc;
    use storefront_core::cart::service::CartService;
    use storefront_core::nav::shell::ShellService;
    use storefront_core::session::resolver::SessionResolver;
    use storefront_core::session::store::SessionStore;
    use storefront_types::config::CART_SESSION_KEY;
    use storefront_types::session::SessionId;

    use super::cart::SqliteCartItemRepository;
    use super::pool::DatabasePool;
    use super::session::SqliteSessionStore;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn shell_service(pool: &DatabasePool) -> ShellService<SqliteSessionStore, SqliteCartItemRepository> {
        let resolver = SessionResolver::new(
            SqliteSessionStore::new(pool.clone()),
            SessionId::new("default_session"),
        );
        let cart = CartService::new(SqliteCartItemRepository::new(pool.clone()));
        ShellService::new(resolver, cart)
    }

    async fn insert_item(pool: &DatabasePool, id: &str, session: &str, product_id: &str, quantity: i64) {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO cart_items (id, user_session, product_id, quantity, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(session)
        .bind(product_id)
        .bind(quantity)
        .bind(&now)
        .bind(&now)
        .execute(&pool.writer)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_stored_session_with_items_shows_badge() {
        let pool = test_pool().await;
        let store = SqliteSessionStore::new(pool.clone());
        store.set(CART_SESSION_KEY, "test_session_123").await.unwrap();

        insert_item(&pool, "p1", "test_session_123", "abc", 2).await;
        insert_item(&pool, "p2", "test_session_123", "def", 1).await;

        let shell = shell_service(&pool).mount().await;
        assert_eq!(shell.session.as_str(), "test_session_123");
        assert_eq!(shell.cart_count, 3);

        let cart_entry = shell.items.iter().find(|i| i.title == "Cart").unwrap();
        assert_eq!(cart_entry.badge, Some(3));
    }

    #[tokio::test]
    async fn test_no_session_falls_back_to_default_with_zero_count() {
        let pool = test_pool().await;

        // Items for some other shopper must not leak into the default cart.
        insert_item(&pool, "p1", "someone_else", "abc", 5).await;

        let shell = shell_service(&pool).mount().await;
        assert_eq!(shell.session.as_str(), "default_session");
        assert_eq!(shell.cart_count, 0);
    }

    #[tokio::test]
    async fn test_remount_reflects_external_mutation() {
        // The count is computed once per mount; an external mutation shows
        // up only after an explicit re-mount.
        let pool = test_pool().await;
        let store = SqliteSessionStore::new(pool.clone());
        store.set(CART_SESSION_KEY, "s").await.unwrap();

        let service = shell_service(&pool);
        let first = service.mount().await;
        assert_eq!(first.cart_count, 0);

        insert_item(&pool, "p1", "s", "abc", 4).await;
        assert_eq!(first.cart_count, 0, "mounted shell stays stale");

        let second = service.mount().await;
        assert_eq!(second.cart_count, 4);
    }
}

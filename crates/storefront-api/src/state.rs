//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST
//! API. Services are generic over the session store and cart repository
//! traits, but AppState pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use storefront_core::cart::service::CartService;
use storefront_core::nav::shell::ShellService;
use storefront_core::session::resolver::SessionResolver;
use storefront_infra::config::load_global_config;
use storefront_infra::filesystem::resolve_data_dir;
use storefront_infra::sqlite::cart::SqliteCartItemRepository;
use storefront_infra::sqlite::pool::DatabasePool;
use storefront_infra::sqlite::session::SqliteSessionStore;
use storefront_types::session::SessionId;

/// Concrete type aliases for the service generics pinned to infra
/// implementations.
pub type ConcreteShellService = ShellService<SqliteSessionStore, SqliteCartItemRepository>;

/// Shared application state holding the shell service.
///
/// Used by both CLI commands and REST API handlers. The shell service owns
/// the session resolver and cart aggregator; `session_store` is a second
/// store handle for the provisioning CLI.
#[derive(Clone)]
pub struct AppState {
    pub shell_service: Arc<ConcreteShellService>,
    pub session_store: Arc<SqliteSessionStore>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to DB, load config, wire
    /// services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("storefront.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let config = load_global_config(&data_dir).await;
        let default_session = SessionId::new(config.default_session);

        // Wire the shell service: resolver over the session store, cart
        // aggregator over the item repository.
        let resolver = SessionResolver::new(
            SqliteSessionStore::new(db_pool.clone()),
            default_session,
        );
        let cart_service = CartService::new(SqliteCartItemRepository::new(db_pool.clone()));
        let shell_service = ShellService::new(resolver, cart_service);

        // Separate store handle for the session provisioning commands
        // (the resolver's store is read-only by contract).
        let session_store = SqliteSessionStore::new(db_pool.clone());

        Ok(Self {
            shell_service: Arc::new(shell_service),
            session_store: Arc::new(session_store),
            data_dir,
            db_pool,
        })
    }
}

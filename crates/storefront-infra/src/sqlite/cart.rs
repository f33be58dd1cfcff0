//! SQLite cart item repository implementation.
//!
//! Implements `CartItemRepository` from `storefront-core` using sqlx with
//! split read/write pools. The aggregation side only reads; rows are
//! written by the external cart-mutation path.

use chrono::{DateTime, Utc};
use sqlx::Row;
use storefront_core::cart::repository::CartItemRepository;
use storefront_types::cart::CartLineItem;
use storefront_types::error::RepositoryError;
use storefront_types::session::SessionId;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `CartItemRepository`.
pub struct SqliteCartItemRepository {
    pool: DatabasePool,
}

impl SqliteCartItemRepository {
    /// Create a new cart item repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct CartItemRow {
    id: String,
    user_session: String,
    product_id: String,
    quantity: i64,
    created_at: String,
    updated_at: String,
}

impl CartItemRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_session: row.try_get("user_session")?,
            product_id: row.try_get("product_id")?,
            quantity: row.try_get("quantity")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_item(self) -> Result<CartLineItem, RepositoryError> {
        Ok(CartLineItem {
            id: self.id,
            session: SessionId::new(self.user_session),
            product_id: self.product_id,
            quantity: self.quantity,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

// ---------------------------------------------------------------------------
// CartItemRepository implementation
// ---------------------------------------------------------------------------

impl CartItemRepository for SqliteCartItemRepository {
    async fn items_for_session(
        &self,
        session: &SessionId,
    ) -> Result<Vec<CartLineItem>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM cart_items WHERE user_session = ?")
            .bind(session.as_str())
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            let item_row =
                CartItemRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            items.push(item_row.into_item()?);
        }

        Ok(items)
    }
}

//! Cart line item and derived count types.
//!
//! A line item is one product-and-quantity entry held in a cart for a given
//! session. Line items are created by an external cart-mutation path and are
//! read-only snapshots from the aggregation side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// The derived scalar shown on the cart badge.
///
/// Always `sum(quantity)` over the session's line items, or `0` when the
/// cart is empty or retrieval failed. Quantities are summed as-is: the item
/// store is expected to guarantee positive values, and no clamping or
/// de-duplication by product is performed here.
pub type CartCount = i64;

/// One product entry held in a cart for a given session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Unique identifier of the line item.
    pub id: String,
    /// Session this entry belongs to.
    pub session: SessionId,
    /// Referenced product (opaque, no referential integrity enforced here).
    pub product_id: String,
    /// Unit count for this product.
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_serialize() {
        let item = CartLineItem {
            id: "p1".to_string(),
            session: SessionId::new("test_session_123"),
            product_id: "abc".to_string(),
            quantity: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"session\":\"test_session_123\""));
        assert!(json.contains("\"quantity\":2"));
    }
}

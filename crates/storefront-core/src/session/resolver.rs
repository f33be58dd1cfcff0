//! Session resolver.
//!
//! Determines the current cart session identifier from persistent client
//! state, falling back to the configured default token when none is stored.

use storefront_types::config::CART_SESSION_KEY;
use storefront_types::session::SessionId;
use tracing::warn;

use crate::session::store::SessionStore;

/// Resolves the current shopping session from a [`SessionStore`].
///
/// Resolution is total: a missing token is not an error (first-time
/// visitors simply get the default session), and a store read failure
/// degrades to the default as well. The resolver never persists anything.
pub struct SessionResolver<S: SessionStore> {
    store: S,
    default_session: SessionId,
}

impl<S: SessionStore> SessionResolver<S> {
    /// Create a resolver with the given store and configured default token.
    pub fn new(store: S, default_session: SessionId) -> Self {
        Self {
            store,
            default_session,
        }
    }

    /// The token handed out when nothing is stored.
    pub fn default_session(&self) -> &SessionId {
        &self.default_session
    }

    /// Resolve the current session identifier.
    ///
    /// Reads the token under the well-known `cart_session` key. Idempotent:
    /// repeated calls without intervening writes return the same identifier.
    pub async fn resolve(&self) -> SessionId {
        match self.store.get(CART_SESSION_KEY).await {
            Ok(Some(token)) => SessionId::new(token),
            Ok(None) => self.default_session.clone(),
            Err(err) => {
                warn!(key = CART_SESSION_KEY, error = %err, "Session store read failed, using default session");
                self.default_session.clone()
            }
        }
    }
}

//! Session identifier type.
//!
//! A session identifier is an opaque string token scoping a cart to one
//! anonymous or authenticated shopper. It is provisioned externally (cookie,
//! auth layer, browser ID) and only consumed here -- never generated or
//! rotated by this service.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Opaque token identifying one shopping session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an externally provisioned token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for SessionId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_display() {
        let session = SessionId::new("test_session_123");
        assert_eq!(session.to_string(), "test_session_123");
        assert_eq!(session.as_str(), "test_session_123");
    }

    #[test]
    fn test_session_id_serde_transparent() {
        let session = SessionId::new("abc");
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, "\"abc\"");
        let parsed: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}

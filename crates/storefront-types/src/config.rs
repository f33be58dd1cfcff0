//! Global configuration types.
//!
//! Deserialized from `config.toml` in the data directory. The default
//! session token lives here as a single named constant rather than a
//! literal scattered through the code.

use serde::{Deserialize, Serialize};

/// Fallback session token used when no session has been provisioned yet.
///
/// Keeps the badge functional for first-time visitors: resolving against
/// this token yields an empty cart (count 0) until a real session is stored.
pub const DEFAULT_SESSION_TOKEN: &str = "default_session";

/// Well-known storage key under which the cart session token is persisted.
pub const CART_SESSION_KEY: &str = "cart_session";

/// Global configuration loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Session token the resolver falls back to when none is stored.
    pub default_session: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_session: DEFAULT_SESSION_TOKEN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.default_session, DEFAULT_SESSION_TOKEN);
    }

    #[test]
    fn test_config_from_toml() {
        let config: GlobalConfig = toml::from_str("default_session = \"kiosk_7\"").unwrap();
        assert_eq!(config.default_session, "kiosk_7");
    }

    #[test]
    fn test_config_from_empty_toml_uses_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_session, DEFAULT_SESSION_TOKEN);
    }
}

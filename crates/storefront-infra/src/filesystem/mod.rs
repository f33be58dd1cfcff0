//! Filesystem helpers.

use std::path::PathBuf;

/// Resolve the data directory holding the database and `config.toml`.
///
/// Order: `STOREFRONT_DATA_DIR` env var, then `~/.storefront`, then a
/// `.storefront` directory relative to the working directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STOREFRONT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".storefront");
    }

    PathBuf::from(".storefront")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_is_absolute_or_local() {
        let dir = resolve_data_dir();
        assert!(dir.to_string_lossy().contains(".storefront") || dir.is_absolute());
    }
}

//! Infrastructure layer for Storefront.
//!
//! Contains implementations of the repository traits defined in
//! `storefront-core`: SQLite storage for cart items and session state, plus
//! filesystem configuration loading.

pub mod config;
pub mod filesystem;
pub mod sqlite;

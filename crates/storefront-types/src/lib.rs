//! Shared domain types for Storefront.
//!
//! This crate contains the core domain types used across the Storefront
//! service: cart line items, session identifiers, navigation shell types,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod cart;
pub mod config;
pub mod error;
pub mod nav;
pub mod session;

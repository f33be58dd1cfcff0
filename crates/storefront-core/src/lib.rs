//! Business logic and repository trait definitions for Storefront.
//!
//! This crate defines the "ports" (repository traits) that the
//! infrastructure layer implements. It depends only on `storefront-types` --
//! never on `storefront-infra` or any database/IO crate.

pub mod cart;
pub mod nav;
pub mod session;

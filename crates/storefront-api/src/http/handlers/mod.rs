//! REST API request handlers.

pub mod cart;
pub mod nav;
pub mod session;

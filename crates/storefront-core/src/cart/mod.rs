//! Cart aggregation.
//!
//! The cart item repository trait and the service reducing a session's line
//! items to the badge count.

pub mod repository;
pub mod service;

pub use repository::CartItemRepository;
pub use service::CartService;

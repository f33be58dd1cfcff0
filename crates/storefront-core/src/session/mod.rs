//! Session resolution.
//!
//! The session store trait and the resolver that turns stored client state
//! into a usable session identifier.

pub mod resolver;
pub mod store;

pub use resolver::SessionResolver;
pub use store::SessionStore;

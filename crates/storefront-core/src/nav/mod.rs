//! Navigation shell assembly.
//!
//! Static menu and brand definitions plus the shell service that attaches
//! the cart badge count on mount.

pub mod menu;
pub mod shell;

pub use shell::ShellService;

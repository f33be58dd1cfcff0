//! Session provisioning subcommands.
//!
//! The shell core only ever reads the session token; storing or rotating it
//! is an external concern. These commands are that external path, writing
//! the token under the well-known `cart_session` key.

use anyhow::Result;
use clap::Subcommand;
use console::style;

use storefront_core::session::store::SessionStore;
use storefront_types::config::CART_SESSION_KEY;

use crate::state::AppState;

/// Session token subcommands.
#[derive(Subcommand)]
pub enum SessionCommand {
    /// Store a session token.
    Set {
        /// Opaque session token (e.g. from the web frontend's cookie).
        token: String,
    },

    /// Show the stored session token, if any.
    Show,

    /// Remove the stored session token.
    Clear,
}

/// Handle a session subcommand.
pub async fn handle_session_command(
    cmd: SessionCommand,
    state: &AppState,
    json: bool,
) -> Result<()> {
    match cmd {
        SessionCommand::Set { token } => session_set(state, &token, json).await,
        SessionCommand::Show => session_show(state, json).await,
        SessionCommand::Clear => session_clear(state, json).await,
    }
}

async fn session_set(state: &AppState, token: &str, json: bool) -> Result<()> {
    state.session_store.set(CART_SESSION_KEY, token).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "session": token }))?
        );
    } else {
        println!(
            "  {} Session set to {}",
            style("✓").green(),
            style(token).cyan()
        );
    }
    Ok(())
}

async fn session_show(state: &AppState, json: bool) -> Result<()> {
    let stored = state.session_store.get(CART_SESSION_KEY).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "session": stored }))?
        );
        return Ok(());
    }

    match stored {
        Some(token) => println!("  Session: {}", style(token).cyan()),
        None => println!(
            "  No session stored (the resolver will use the configured default)"
        ),
    }
    Ok(())
}

async fn session_clear(state: &AppState, json: bool) -> Result<()> {
    state.session_store.clear(CART_SESSION_KEY).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "session": null }))?
        );
    } else {
        println!("  {} Session cleared", style("✓").green());
    }
    Ok(())
}

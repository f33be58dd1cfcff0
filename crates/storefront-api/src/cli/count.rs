//! Cart badge count command.

use anyhow::Result;
use console::style;

use storefront_types::session::SessionId;

use crate::state::AppState;

/// Print the badge count for the given or resolved session.
///
/// Mirrors the badge contract: this never fails on retrieval problems, it
/// prints `0` (the diagnostic lands in the logs).
pub async fn count(state: &AppState, session: Option<String>, json: bool) -> Result<()> {
    let session = match session {
        Some(token) => SessionId::new(token),
        None => state.shell_service.resolver().resolve().await,
    };

    let count = state.shell_service.cart().badge_count(&session).await;

    if json {
        let out = serde_json::json!({
            "session": session,
            "cart_count": count,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} item(s) in cart for session {}",
        style("🛒").bold(),
        style(count).bold().cyan(),
        style(&session).dim()
    );
    println!();

    Ok(())
}

//! System status command.

use anyhow::Result;
use console::style;

use storefront_core::session::store::SessionStore;
use storefront_types::config::CART_SESSION_KEY;

use crate::state::AppState;

/// Display service status: data dir, database health, session, badge count.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    // A trivial query doubles as the database health probe.
    let db_ok = sqlx_ping(state).await;

    let stored_session = state
        .session_store
        .get(CART_SESSION_KEY)
        .await
        .unwrap_or(None);
    let resolved = state.shell_service.resolver().resolve().await;
    let count = state.shell_service.cart().badge_count(&resolved).await;

    if json {
        let out = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "database_ok": db_ok,
            "stored_session": stored_session,
            "resolved_session": resolved,
            "cart_count": count,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Storefront v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  Data dir:  {}", state.data_dir.display());
    println!(
        "  Database:  {}",
        if db_ok {
            format!("{}", style("ok").green())
        } else {
            format!("{}", style("unreachable").red())
        }
    );
    match &stored_session {
        Some(token) => println!("  Session:   {}", style(token).cyan()),
        None => println!("  Session:   {} (default)", style(&resolved).cyan()),
    }
    println!("  Cart:      {} item(s)", style(count).bold());
    println!();

    Ok(())
}

async fn sqlx_ping(state: &AppState) -> bool {
    use storefront_infra::sqlite::pool::DatabasePool;

    async fn ping(pool: &DatabasePool) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&pool.reader).await?;
        Ok(())
    }

    ping(&state.db_pool).await.is_ok()
}

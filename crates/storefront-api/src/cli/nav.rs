//! Navigation shell display command.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

/// Mount the shell once and print it.
pub async fn nav(state: &AppState, json: bool) -> Result<()> {
    let shell = state.shell_service.mount().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&shell)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} {}",
        style("🎮").bold(),
        style(&shell.header.name).bold().cyan(),
        style(&shell.header.tagline).dim()
    );
    println!();

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "URL", "Icon", "Badge"]);

    for item in &shell.items {
        let badge = item
            .badge
            .map(|b| Cell::new(b.to_string()).fg(Color::Blue))
            .unwrap_or_else(|| Cell::new(""));
        table.add_row(vec![
            Cell::new(&item.title),
            Cell::new(&item.url),
            Cell::new(item.icon.to_string()),
            badge,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {}", style("Shop by Brand").dim());
    for brand in &shell.brands {
        println!("    {} -> {}", brand.name, style(&brand.url).dim());
    }
    println!();
    println!(
        "  Session {} | cart count {}",
        style(&shell.session).dim(),
        style(shell.cart_count).bold()
    );
    println!();

    Ok(())
}

//! `notegram status` — show config path, token, vault, and channels.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use notegram_core::config::{get_config_path, load_config};
use notegram_core::utils::mask_secret;

/// Run the status command.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path);
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    println!();
    println!("{}", "  Notegram Status".cyan().bold());
    println!();

    println!(
        "  {:<14} {} {}",
        "Config:".bold(),
        path.display(),
        if path.exists() {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    let token = if config.has_token() {
        format!("{} {}", "✓".green(), mask_secret(&config.bot_token, 10))
    } else {
        format!("{}", "· not configured".dimmed())
    };
    println!("  {:<14} {}", "Bot token:".bold(), token);

    let vault = match config.vault_path.as_deref() {
        Some(v) => {
            let expanded = crate::helpers::expand_tilde(v);
            let mark = if expanded.is_dir() {
                "✓".green().to_string()
            } else {
                "(not found)".red().to_string()
            };
            format!("{} {}", expanded.display(), mark)
        }
        None => format!("{}", "note's directory".dimmed()),
    };
    println!("  {:<14} {}", "Vault:".bold(), vault);

    println!("  {:<14} {}", "API:".bold(), config.api_base());
    println!("  {:<14} {}", "Channels:".bold(), config.channels.len());
    println!();

    Ok(())
}

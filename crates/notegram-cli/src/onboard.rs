//! `notegram onboard` — create the config file with defaults.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use notegram_core::config::{get_config_path, save_config, Config};

/// Run the onboard command.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    println!();
    println!("{}", "  Notegram — Setup".cyan().bold());
    println!();

    if ensure_config(&path)? {
        println!("  {} created config at {}", "✓".green(), path.display());
    } else {
        println!("  {} config already exists at {}", "✓".green(), path.display());
    }

    println!();
    println!("  Next:");
    println!("    notegram token set <BOT_TOKEN>");
    println!("    notegram channels add <NAME> <CHAT_ID>");
    println!("    notegram send <NOTE.md>");
    println!();

    Ok(())
}

/// Write a default config unless one exists. Returns whether it was created.
fn ensure_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(&Config::default(), Some(path))?;
    Ok(true)
}

//! `notegram token` — set or clear the bot token.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;

use notegram_core::config::{save_config, try_load_config_file};
use notegram_core::utils::mask_secret;

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Store the bot token from @BotFather
    Set {
        token: String,
    },

    /// Remove the stored bot token
    Clear,
}

pub fn dispatch(cmd: TokenCommands, config_path: Option<&Path>) -> Result<()> {
    let mut config = try_load_config_file(config_path)?;

    match cmd {
        TokenCommands::Set { token } => {
            let token = token.trim();
            if token.is_empty() {
                bail!("token must not be empty");
            }
            config.bot_token = token.to_string();
            save_config(&config, config_path).context("failed to save config")?;
            println!("  {} token set ({})", "✓".green(), mask_secret(token, 10));
        }
        TokenCommands::Clear => {
            config.bot_token.clear();
            save_config(&config, config_path).context("failed to save config")?;
            println!("  {} token cleared", "✓".green());
        }
    }
    Ok(())
}

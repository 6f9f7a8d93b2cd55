//! `notegram channels` — manage destination channels from the CLI.
//!
//! - `notegram channels list` — show configured channels
//! - `notegram channels add NAME ID` — add or replace a channel
//! - `notegram channels remove NAME` — delete a channel

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;

use notegram_core::config::{load_config, save_config, try_load_config_file, Config};

// ─────────────────────────────────────────────
// Subcommand enum
// ─────────────────────────────────────────────

/// Channels subcommands.
#[derive(Subcommand)]
pub enum ChannelsCommands {
    /// Show configured channels
    List,

    /// Add a channel (replaces an existing one with the same name)
    Add {
        /// Display name shown in the channel prompt
        name: String,
        /// Chat id or @username, passed to Telegram as-is
        id: String,
    },

    /// Remove a channel
    Remove {
        /// Display name of the channel
        name: String,
    },
}

// ─────────────────────────────────────────────
// Dispatcher
// ─────────────────────────────────────────────

/// Dispatch a channels subcommand.
pub fn dispatch(cmd: ChannelsCommands, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ChannelsCommands::List => {
            print_channels(&load_config(config_path));
            Ok(())
        }
        ChannelsCommands::Add { name, id } => {
            let mut config = try_load_config_file(config_path)?;
            let replaced = add_channel(&mut config, &name, &id)?;
            save_config(&config, config_path).context("failed to save config")?;
            let verb = if replaced { "updated" } else { "added" };
            println!("  {} {} channel {}", "✓".green(), verb, name.bold());
            Ok(())
        }
        ChannelsCommands::Remove { name } => {
            let mut config = try_load_config_file(config_path)?;
            remove_channel(&mut config, &name)?;
            save_config(&config, config_path).context("failed to save config")?;
            println!("  {} removed channel {}", "✓".green(), name.bold());
            Ok(())
        }
    }
}

/// Insert `name → id`. Returns whether an existing entry was replaced.
fn add_channel(config: &mut Config, name: &str, id: &str) -> Result<bool> {
    let name = name.trim();
    let id = id.trim();
    if name.is_empty() || id.is_empty() {
        bail!("channel name and id must both be non-empty");
    }
    Ok(config
        .channels
        .insert(name.to_string(), id.to_string())
        .is_some())
}

fn remove_channel(config: &mut Config, name: &str) -> Result<()> {
    if config.channels.remove(name).is_none() {
        bail!("no channel named '{name}'");
    }
    Ok(())
}

fn print_channels(config: &Config) {
    println!();
    println!("{}", "  Channels".cyan().bold());
    println!();

    if config.channels.is_empty() {
        println!(
            "  {}",
            "none — add one with `notegram channels add NAME ID`".dimmed()
        );
        println!();
        return;
    }

    println!("  {:<24} {}", "Name".bold(), "Chat id".bold());
    println!("  {}", "─".repeat(48));
    for (name, id) in &config.channels {
        println!("  {:<24} {}", name, id);
    }
    println!();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

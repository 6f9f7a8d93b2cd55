//! Notegram CLI — entry point.
//!
//! # Commands
//!
//! - `notegram send NOTE [-c CHANNEL]` — send a note (and its first image) to a channel
//! - `notegram channels list|add|remove` — manage destination channels
//! - `notegram token set|clear` — manage the bot token
//! - `notegram onboard` — create the config file
//! - `notegram status` — show configuration status

mod channels_cmd;
mod helpers;
mod onboard;
mod send_cmd;
mod status;
mod token_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use notegram_core::config::load_config;
use notegram_vault::NoteFile;

use crate::helpers::{FixedPicker, TerminalNotifier, TerminalPicker};
use crate::send_cmd::{SendContext, SendReport};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Notegram — send Markdown notes to Telegram channels
#[derive(Parser)]
#[command(name = "notegram", version, about, long_about = None)]
struct Cli {
    /// Config file (default: ~/.notegram/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a note to one of the configured channels
    Send {
        /// Markdown note to send
        note: PathBuf,

        /// Channel name (skips the interactive prompt)
        #[arg(short, long)]
        channel: Option<String>,

        /// Vault root for resolving attachments (default: the note's directory)
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Manage destination channels
    Channels {
        #[command(subcommand)]
        action: channels_cmd::ChannelsCommands,
    },

    /// Manage the bot token
    Token {
        #[command(subcommand)]
        action: token_cmd::TokenCommands,
    },

    /// Create the config file
    Onboard,

    /// Show configuration status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Send {
            note,
            channel,
            vault,
            logs,
        } => {
            init_logging(logs);
            run_send(config_path, note, channel, vault).await
        }
        Commands::Channels { action } => {
            init_logging(false);
            channels_cmd::dispatch(action, config_path)
        }
        Commands::Token { action } => {
            init_logging(false);
            token_cmd::dispatch(action, config_path)
        }
        Commands::Onboard => {
            init_logging(false);
            onboard::run(config_path)
        }
        Commands::Status => {
            init_logging(false);
            status::run(config_path)
        }
    }
}

// ─────────────────────────────────────────────
// Send command
// ─────────────────────────────────────────────

async fn run_send(
    config_path: Option<&std::path::Path>,
    note: PathBuf,
    channel: Option<String>,
    vault: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(config_path);
    if let Some(vault) = vault {
        config.vault_path = Some(vault.to_string_lossy().into_owned());
    }

    let notes = NoteFile::new(Some(note));
    let notifier = TerminalNotifier;
    let terminal_picker = TerminalPicker;
    let fixed_picker = channel.map(FixedPicker::new);
    let picker: &dyn notegram_core::ChannelPicker = match &fixed_picker {
        Some(p) => p,
        None => &terminal_picker,
    };

    let ctx = SendContext {
        config: &config,
        notes: &notes,
        picker,
        notifier: &notifier,
    };

    match send_cmd::send_current_note(&ctx).await? {
        SendReport::Finished(outcome) if outcome.is_success() => Ok(()),
        SendReport::Aborted(notegram_core::SendError::Cancelled) => Ok(()),
        _ => std::process::exit(1),
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("notegram=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

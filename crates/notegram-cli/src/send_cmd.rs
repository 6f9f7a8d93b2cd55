//! `notegram send` — the "send current note" command.
//!
//! Checks run in order, and any failure stops before the network:
//! active note, configured channels, channel choice. Then the note is split
//! into text + first image and handed to the dispatcher.

use anyhow::Result;
use tracing::{debug, warn};

use notegram_core::config::Config;
use notegram_core::types::DispatchOutcome;
use notegram_core::{ChannelPicker, NoteSource, Notifier, SendError};
use notegram_telegram::{Dispatcher, TelegramClient};
use notegram_vault::{extract, FsVault};

use crate::helpers::expand_tilde;

/// Collaborators for one send.
pub struct SendContext<'a> {
    pub config: &'a Config,
    pub notes: &'a dyn NoteSource,
    pub picker: &'a dyn ChannelPicker,
    pub notifier: &'a dyn Notifier,
}

/// How a send ended.
#[derive(Debug, PartialEq, Eq)]
pub enum SendReport {
    /// Stopped before any network call.
    Aborted(SendError),
    /// The dispatcher ran.
    Finished(DispatchOutcome),
}

/// Send the active note to a channel chosen through the picker.
///
/// User-facing results go through the notifier; the returned error is only
/// for failures outside the send itself (unreadable note, broken terminal).
pub async fn send_current_note(ctx: &SendContext<'_>) -> Result<SendReport> {
    let config = ctx.config;

    let Some(snapshot) = ctx.notes.active_note()? else {
        return Ok(abort(ctx.notifier, SendError::NoActiveNote));
    };

    let names = config.channel_names();
    if names.is_empty() {
        return Ok(abort(ctx.notifier, SendError::NoChannels));
    }

    let Some(name) = ctx.picker.choose(&names)? else {
        return Ok(abort(ctx.notifier, SendError::Cancelled));
    };
    let Some(channel_id) = config.channel_id(&name) else {
        return Ok(abort(ctx.notifier, SendError::UnknownChannel(name)));
    };
    debug!(channel = %name, "channel selected");

    let vault_root = config.vault_path.as_deref().map(expand_tilde);
    let vault = FsVault::for_note(&snapshot.path, vault_root.as_deref());

    let content = extract(&snapshot.text, &snapshot.embeds, &vault);
    debug!(
        note = %snapshot.path.display(),
        image = content.image.as_ref().map(|f| f.name.as_str()).unwrap_or("-"),
        "extracted note content"
    );

    if !config.has_token() {
        warn!("no bot token configured, Telegram will reject the request");
    }
    let client = TelegramClient::new(config.bot_token.clone()).with_api_base(config.api_base());
    let outcome = Dispatcher::new(client)
        .dispatch(&content.text, content.image.as_ref(), channel_id, &vault)
        .await;

    match &outcome {
        DispatchOutcome::Delivered(_) => ctx.notifier.info("Sent to Telegram"),
        DispatchOutcome::Failed { reason } => {
            ctx.notifier.error(&format!("Send failed: {reason}"))
        }
    }
    Ok(SendReport::Finished(outcome))
}

fn abort(notifier: &dyn Notifier, e: SendError) -> SendReport {
    if e.is_reportable() {
        notifier.error(&e.to_string());
    }
    SendReport::Aborted(e)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

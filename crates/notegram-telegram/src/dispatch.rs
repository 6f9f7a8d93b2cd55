//! Note dispatcher.
//!
//! ```text
//! START ── image? ──yes──▶ SEND_PHOTO ──ok──▶ DONE(success)
//!            │                 │
//!            no             any failure
//!            │                 │
//!            ▼                 ▼
//!        SEND_TEXT ◀───────────┘ ──ok──▶ DONE(success)
//!            │
//!          failure ──▶ DONE(failure)
//! ```
//!
//! Photo-path failures are logged and never retried beyond the single fall
//! back to text. Only a text-path failure is reported as a failed send.

use tracing::{debug, info, warn};

use notegram_core::host::Vault;
use notegram_core::types::{DeliveryPath, DispatchOutcome, VaultFile};

use crate::api::{ApiError, TelegramClient};

/// Sends one note to one chat.
#[derive(Debug)]
pub struct Dispatcher {
    client: TelegramClient,
}

impl Dispatcher {
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }

    /// Deliver `text` (and `image`, if any) to `channel_id`.
    pub async fn dispatch<V>(
        &self,
        text: &str,
        image: Option<&VaultFile>,
        channel_id: &str,
        vault: &V,
    ) -> DispatchOutcome
    where
        V: Vault + ?Sized,
    {
        let Some(image) = image else {
            debug!(channel_id, "no image attached, sending text");
            return self.send_text(text, channel_id, DeliveryPath::Text).await;
        };

        match self.send_photo(text, image, channel_id, vault).await {
            Ok(()) => {
                info!(channel_id, file = %image.name, "photo delivered");
                DispatchOutcome::Delivered(DeliveryPath::Photo)
            }
            Err(e) => {
                warn!(
                    channel_id,
                    file = %image.name,
                    error = %e,
                    "photo delivery failed, falling back to text"
                );
                let path = DeliveryPath::TextFallback {
                    photo_error: e.to_string(),
                };
                self.send_text(text, channel_id, path).await
            }
        }
    }

    async fn send_photo<V>(
        &self,
        caption: &str,
        image: &VaultFile,
        channel_id: &str,
        vault: &V,
    ) -> Result<(), ApiError>
    where
        V: Vault + ?Sized,
    {
        let bytes = vault
            .read_binary(image)
            .await
            .map_err(|e| ApiError::Resource(format!("{e:#}")))?;
        self.client
            .send_photo(channel_id, bytes, &image.name, caption)
            .await?;
        Ok(())
    }

    async fn send_text(
        &self,
        text: &str,
        channel_id: &str,
        on_success: DeliveryPath,
    ) -> DispatchOutcome {
        match self.client.send_message(channel_id, text).await {
            Ok(_) => {
                info!(channel_id, "text delivered");
                DispatchOutcome::Delivered(on_success)
            }
            Err(e) => {
                warn!(channel_id, error = %e, "text delivery failed");
                DispatchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

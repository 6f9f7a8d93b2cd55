//! Host collaborator traits.
//!
//! The extractor and dispatcher only see these narrow interfaces, so they run
//! the same against a vault on disk, a terminal prompt, or test doubles.

use async_trait::async_trait;

use crate::types::{DocumentSnapshot, VaultEntry, VaultFile};

/// Access to the note being sent.
pub trait NoteSource {
    /// The current note with its embed metadata, or `None` if nothing is open.
    fn active_note(&self) -> anyhow::Result<Option<DocumentSnapshot>>;
}

/// Attachment storage.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Resolve an embed link to a vault entry. `None` = nothing there.
    fn resolve(&self, link: &str) -> Option<VaultEntry>;

    /// Read a file's bytes. No handle is kept after the call.
    async fn read_binary(&self, file: &VaultFile) -> anyhow::Result<Vec<u8>>;
}

/// Modal single choice among labelled options.
pub trait ChannelPicker {
    /// Returns the chosen label, or `None` if the user dismissed the prompt.
    fn choose(&self, options: &[String]) -> anyhow::Result<Option<String>>;
}

/// Transient user-facing notifications.
pub trait Notifier {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

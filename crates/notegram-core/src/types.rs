//! Per-send value objects passed from the vault through the extractor and
//! into the dispatcher. Nothing here outlives a single send operation.

use std::path::PathBuf;

// ─────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────

/// A reference inside note text to an attached resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Embed {
    /// Resolvable path of the target, relative to the vault root.
    pub link: String,
    /// Literal markup as it appears in the note text.
    pub original: String,
}

impl Embed {
    pub fn new(link: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            original: original.into(),
        }
    }
}

/// The active note, captured once when a send starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSnapshot {
    /// Where the note was read from.
    pub path: PathBuf,
    /// Raw text at the moment of dispatch.
    pub text: String,
    /// Embeds in document order.
    pub embeds: Vec<Embed>,
}

// ─────────────────────────────────────────────
// Vault resources
// ─────────────────────────────────────────────

/// A plain file inside the vault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultFile {
    /// Absolute location on disk.
    pub path: PathBuf,
    /// File name, used as the upload name.
    pub name: String,
}

impl VaultFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// What a link resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VaultEntry {
    File(VaultFile),
    Folder(PathBuf),
}

/// Output of the content extractor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionResult {
    /// The attachment to upload, if any.
    pub image: Option<VaultFile>,
    /// Note text with the attachment markup removed.
    pub text: String,
}

impl ExtractionResult {
    /// Text only, no attachment.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            image: None,
            text: text.into(),
        }
    }
}

// ─────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────

/// How a delivered note reached Telegram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryPath {
    /// Image with caption.
    Photo,
    /// Text message, no image was attached.
    Text,
    /// Photo upload failed; the text went out on its own.
    TextFallback { photo_error: String },
}

/// Terminal result of one send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered(DeliveryPath),
    Failed { reason: String },
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered(_))
    }
}

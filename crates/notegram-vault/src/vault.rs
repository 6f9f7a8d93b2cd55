//! Filesystem vault: a directory of notes and attachments.
//!
//! Embed links resolve relative to the vault root, never outside it.

use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use notegram_core::host::{NoteSource, Vault};
use notegram_core::types::{DocumentSnapshot, VaultEntry, VaultFile};

use crate::embeds::parse_embeds;

// ─────────────────────────────────────────────
// FsVault
// ─────────────────────────────────────────────

/// A vault rooted at a directory on disk.
#[derive(Clone, Debug)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the vault for a note: the configured root if any, else the
    /// directory containing the note.
    pub fn for_note(note: &Path, configured_root: Option<&Path>) -> Self {
        let root = configured_root
            .map(PathBuf::from)
            .or_else(|| note.parent().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join `link` to the root, refusing absolute links and `..` escapes.
    fn vault_path(&self, link: &str) -> Option<PathBuf> {
        let rel = Path::new(link);
        let inside = rel
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !inside {
            return None;
        }
        Some(self.root.join(rel))
    }
}

#[async_trait]
impl Vault for FsVault {
    fn resolve(&self, link: &str) -> Option<VaultEntry> {
        let path = self.vault_path(link)?;

        // Symlinks are followed, but the target must still be inside the root.
        let target = path.canonicalize().ok()?;
        let root = self.root.canonicalize().ok()?;
        if !target.starts_with(&root) {
            debug!(link, target = %target.display(), "link resolves outside the vault");
            return None;
        }

        let meta = std::fs::metadata(&target).ok()?;
        if meta.is_file() {
            Some(VaultEntry::File(VaultFile::new(path)))
        } else if meta.is_dir() {
            Some(VaultEntry::Folder(path))
        } else {
            None
        }
    }

    async fn read_binary(&self, file: &VaultFile) -> anyhow::Result<Vec<u8>> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .with_context(|| format!("failed to read {}", file.path.display()))?;
        debug!(path = %file.path.display(), bytes = bytes.len(), "read attachment");
        Ok(bytes)
    }
}

// ─────────────────────────────────────────────
// NoteFile
// ─────────────────────────────────────────────

/// The note selected on the command line.
#[derive(Clone, Debug, Default)]
pub struct NoteFile {
    path: Option<PathBuf>,
}

impl NoteFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl NoteSource for NoteFile {
    fn active_note(&self) -> anyhow::Result<Option<DocumentSnapshot>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read note {}", path.display()))?;
        let embeds = parse_embeds(&text);
        debug!(path = %path.display(), embeds = embeds.len(), "loaded note");
        Ok(Some(DocumentSnapshot {
            path: path.clone(),
            text,
            embeds,
        }))
    }
}

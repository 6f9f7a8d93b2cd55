//! Content extractor: choose the attachment that goes out with a note.
//!
//! Only the first embed with an image extension is considered. If it doesn't
//! resolve to a plain file, the note is sent as text, unchanged.

use tracing::debug;

use notegram_core::host::Vault;
use notegram_core::types::{Embed, ExtractionResult, VaultEntry};

/// Extensions Telegram accepts as photos. Matched case-sensitively.
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif"];

/// Whether `link` names an image attachment.
pub fn is_image_link(link: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| link.ends_with(ext))
}

/// Split a note into its first image attachment and the remaining text.
pub fn extract<V>(raw_text: &str, embeds: &[Embed], vault: &V) -> ExtractionResult
where
    V: Vault + ?Sized,
{
    let Some(embed) = embeds.iter().find(|e| is_image_link(&e.link)) else {
        return ExtractionResult::text_only(raw_text);
    };
    debug!(link = %embed.link, "found image embed");

    let file = match vault.resolve(&embed.link) {
        Some(VaultEntry::File(file)) => file,
        other => {
            debug!(link = %embed.link, resolved = ?other, "image embed is not a file, sending text only");
            return ExtractionResult::text_only(raw_text);
        }
    };

    ExtractionResult {
        image: Some(file),
        text: raw_text.replacen(&embed.original, "", 1).trim().to_string(),
    }
}

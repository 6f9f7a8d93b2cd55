//! Notegram vault — reads notes and attachments from a Markdown vault on disk
//! and decides which attachment (if any) goes out with a note.
//!
//! - [`embeds`] — embed metadata parser (`![[...]]`, `![...](...)`)
//! - [`vault::FsVault`] — link resolution and binary reads under a vault root
//! - [`extract`] — picks the first image embed and strips its markup

pub mod embeds;
pub mod extract;
pub mod vault;

pub use embeds::parse_embeds;
pub use extract::{extract, is_image_link};
pub use vault::{FsVault, NoteFile};

//! Notegram core — shared types, configuration, and the host traits that
//! the extractor and dispatcher are written against.

pub mod config;
pub mod error;
pub mod host;
pub mod types;
pub mod utils;

pub use error::SendError;
pub use host::{ChannelPicker, NoteSource, Notifier, Vault};
pub use types::{
    DeliveryPath, DispatchOutcome, DocumentSnapshot, Embed, ExtractionResult, VaultEntry,
    VaultFile,
};

//! Telegram delivery for Notegram.
//!
//! - [`api::TelegramClient`] — `sendMessage` / `sendPhoto` over the Bot HTTP API
//! - [`dispatch::Dispatcher`] — photo-with-caption delivery, falling back to
//!   a plain text message when the photo path fails

pub mod api;
pub mod dispatch;

pub use api::{ApiError, TelegramClient, TelegramResponse};
pub use dispatch::Dispatcher;

//! Errors that abort a send before anything goes over the network.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendError {
    /// No note to send.
    #[error("Open a note to send")]
    NoActiveNote,

    /// The channel map is empty.
    #[error("Add channels in the settings (`notegram channels add <NAME> <ID>`)")]
    NoChannels,

    /// The requested channel is not configured.
    #[error("Unknown channel '{0}'")]
    UnknownChannel(String),

    /// The user dismissed the channel prompt.
    #[error("No channel selected")]
    Cancelled,
}

impl SendError {
    /// Whether this should be shown to the user as an error notice.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, SendError::Cancelled)
    }
}

//! Messaging errors.

use shopfront_data::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MessagingError {
    /// The assistant did not answer within the configured timeout.
    #[error("Request timeout - server took too long to respond")]
    Timeout,

    /// The exchange was cancelled before a reply arrived.
    #[error("request cancelled")]
    Cancelled,

    /// The assistant answered with a document that carries no reply.
    #[error("Invalid response format from API")]
    InvalidReply,

    /// A message is already waiting for a reply.
    #[error("a message is already being sent")]
    Busy,

    /// The chat panel is not open.
    #[error("open the chat assistant first")]
    NotOpen,

    /// The assistant is switched off in the widget configuration.
    #[error("chat assistant is disabled")]
    Disabled,

    #[error("API error: {0}")]
    Fetch(#[from] FetchError),

    #[error("cache error: {0}")]
    Cache(#[from] shopfront_cache::CacheError),
}

impl MessagingError {
    /// Whether the visitor should be told replies are canned.
    ///
    /// A disabled assistant is a configuration choice, not an outage.
    pub fn shows_offline_notice(&self) -> bool {
        !matches!(
            self,
            MessagingError::Disabled | MessagingError::Busy | MessagingError::NotOpen
        )
    }
}

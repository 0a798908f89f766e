//! Error types for layout queries and decoding

use std::time::Duration;
use thiserror::Error;

/// The layout response could not be decoded at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The engine answered without a bundle
    #[error("form layout decoding expects a response bundle, but got nothing")]
    MissingResponse,
}

/// Reasons a selector option is rejected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOption {
    #[error("option key must not be empty")]
    EmptyKey,
    #[error("option label must not be empty")]
    EmptyLabel,
}

/// Failures of the query transport between caller and engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// No engine is attached to the dispatcher yet
    #[error("engine is not ready to answer queries")]
    NotReady,
    /// The engine went away before answering
    #[error("query channel closed")]
    Closed,
    #[error("engine did not answer within {0:?}")]
    Timeout(Duration),
    /// The engine refused the query
    #[error("query rejected by engine: {0}")]
    Rejected(String),
}

/// Error returned by a form layout request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_error_passes_through_unchanged() {
        let err: LayoutError = ChannelError::Rejected("unknown event".to_string()).into();
        assert_eq!(
            err,
            LayoutError::Channel(ChannelError::Rejected("unknown event".to_string()))
        );
        assert_eq!(err.to_string(), "query rejected by engine: unknown event");
    }

    #[test]
    fn test_decode_error_message() {
        let err: LayoutError = DecodeError::MissingResponse.into();
        assert!(err.to_string().contains("got nothing"));
    }

    #[test]
    fn test_timeout_message_mentions_duration() {
        let err = ChannelError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "engine did not answer within 250ms");
    }
}

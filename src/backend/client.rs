//! The backend seam.
//!
//! [`ReplyBackend`] is the one async boundary in the crate: everything above
//! it (reducer, TUI) is synchronous and talks to it through spawned tasks.
//! Test doubles implement the trait directly; the real HTTP client lives in
//! [`super::http`].

use async_trait::async_trait;
use std::fmt;

use super::types::ChatReply;

/// A destination that can answer one chat message at a time.
#[async_trait]
pub trait ReplyBackend: Send + Sync {
    /// Short identifier for this backend, shown in the title bar.
    fn name(&self) -> &str;

    /// Sends one user message and resolves to the backend's reply.
    ///
    /// There is no timeout and no cancellation; the future runs until the
    /// transport gives up on its own.
    async fn send(&self, message: &str) -> Result<ChatReply, ReplyError>;
}

/// Ways a send can fail.
///
/// The `Display` text is shown to the user behind an `Error: ` prefix, so
/// variants carry a human-readable description instead of a source error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    /// The request never produced a response body (connect, DNS, I/O).
    Network(String),
    /// A response arrived but its body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyError::Network(description) | ReplyError::Decode(description) => {
                write!(f, "{description}")
            }
        }
    }
}

impl std::error::Error for ReplyError {}

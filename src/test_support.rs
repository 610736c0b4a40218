//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::backend::{ChatReply, ReplyBackend, ReplyError};

/// A no-op backend for tests that don't need real HTTP calls.
pub struct NoopBackend;

#[async_trait]
impl ReplyBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn send(&self, _message: &str) -> Result<ChatReply, ReplyError> {
        Ok(ChatReply { reply: None })
    }
}

/// A backend that answers every send with a canned result.
pub struct StubBackend {
    pub result: Result<ChatReply, ReplyError>,
}

impl StubBackend {
    pub fn replying(text: &str) -> Self {
        Self {
            result: Ok(ChatReply {
                reply: Some(text.to_string()),
            }),
        }
    }

    pub fn failing(description: &str) -> Self {
        Self {
            result: Err(ReplyError::Network(description.to_string())),
        }
    }
}

#[async_trait]
impl ReplyBackend for StubBackend {
    fn name(&self) -> &str {
        "stub"
    }

    async fn send(&self, _message: &str) -> Result<ChatReply, ReplyError> {
        self.result.clone()
    }
}

/// Creates a test App with a NoopBackend.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopBackend))
}

//! HTTP implementation of [`ReplyBackend`].
//!
//! Speaks the one-shot chat protocol: POST `{"message": <text>}` to
//! `<base>/chat` and decode the JSON body that comes back. Response status is
//! logged but never branched on; backends report errors inside the body.

use async_trait::async_trait;
use log::{debug, info};

use super::client::{ReplyBackend, ReplyError};
use super::types::{ChatReply, ChatRequest};

/// Chat client for a single HTTP endpoint.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Builds a client for `base_url`, which should already be fully
    /// resolved (config handles defaults and overrides). Trailing slashes
    /// are trimmed so path joining stays predictable.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }
}

#[async_trait]
impl ReplyBackend for HttpBackend {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, message: &str) -> Result<ChatReply, ReplyError> {
        let request = ChatRequest { message };

        info!(
            "chat request: {} chars to {}",
            message.chars().count(),
            self.chat_url()
        );

        let response = self
            .client
            .post(self.chat_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| ReplyError::Network(e.to_string()))?;

        debug!("chat response status: {}", response.status());

        // Any response that arrives is decoded regardless of status; error
        // payloads deserialize to a missing reply and render as the
        // placeholder downstream.
        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ReplyError::Decode(e.to_string()))
    }
}

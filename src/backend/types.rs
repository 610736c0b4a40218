//! Wire types for the chat endpoint.
//!
//! The protocol is a single POST of `{"message": <text>}` answered by
//! `{"reply": <text>}`. Backends signal problems with arbitrary other JSON
//! bodies (for example `{"error": <text>}`), which simply deserialize to a
//! missing reply here; there is no status-code handling anywhere in this
//! crate.

use serde::{Deserialize, Serialize};

/// Rendered in place of a reply the backend did not provide.
pub const NO_REPLY: &str = "(no reply)";

/// Body POSTed to the backend's `/chat` endpoint.
#[derive(Serialize, Debug, PartialEq)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Body the backend answers with.
///
/// `reply` may be absent, `null`, or present; unknown sibling fields are
/// ignored, so error payloads parse as a reply-less response rather than
/// failing decode.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

impl ChatReply {
    /// The text to display for this reply.
    ///
    /// An absent, `null`, or empty-string reply maps to [`NO_REPLY`]. A
    /// whitespace-only reply counts as present and is shown verbatim.
    pub fn into_text(self) -> String {
        match self.reply {
            Some(text) if !text.is_empty() => text,
            _ => NO_REPLY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_message_object() {
        let request = ChatRequest { message: "hello" };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"message": "hello"})
        );
    }

    #[test]
    fn reply_present() {
        let reply: ChatReply = serde_json::from_value(json!({"reply": "hey"})).unwrap();
        assert_eq!(reply.into_text(), "hey");
    }

    #[test]
    fn reply_absent_renders_placeholder() {
        let reply: ChatReply = serde_json::from_value(json!({})).unwrap();
        assert_eq!(reply.into_text(), NO_REPLY);
    }

    #[test]
    fn reply_null_renders_placeholder() {
        let reply: ChatReply = serde_json::from_value(json!({"reply": null})).unwrap();
        assert_eq!(reply.into_text(), NO_REPLY);
    }

    #[test]
    fn reply_empty_string_renders_placeholder() {
        let reply: ChatReply = serde_json::from_value(json!({"reply": ""})).unwrap();
        assert_eq!(reply.into_text(), NO_REPLY);
    }

    #[test]
    fn reply_whitespace_is_shown_verbatim() {
        let reply: ChatReply = serde_json::from_value(json!({"reply": "   "})).unwrap();
        assert_eq!(reply.into_text(), "   ");
    }

    #[test]
    fn error_payload_parses_as_missing_reply() {
        let reply: ChatReply =
            serde_json::from_value(json!({"error": "something broke"})).unwrap();
        assert_eq!(reply.reply, None);
        assert_eq!(reply.into_text(), NO_REPLY);
    }

    #[test]
    fn non_string_reply_fails_decode() {
        let result = serde_json::from_value::<ChatReply>(json!({"reply": 42}));
        assert!(result.is_err());
    }
}

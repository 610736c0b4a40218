pub mod client;
pub mod http;
pub mod types;

pub use client::{ReplyBackend, ReplyError};
pub use http::HttpBackend;
pub use types::{ChatReply, ChatRequest, NO_REPLY};

//! # Application State
//!
//! Core business state for wicket. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ReplyBackend>  // where messages go
//! ├── transcript: Transcript          // everything on screen
//! └── pending: usize                  // sends awaiting a reply
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::backend::ReplyBackend;
use crate::core::transcript::Transcript;
use std::sync::Arc;

pub struct App {
    pub backend: Arc<dyn ReplyBackend>,
    pub transcript: Transcript,
    /// Number of sends still waiting on a reply.
    ///
    /// Submission is not gated on this. Several sends can be in flight at
    /// once and their replies append in arrival order, which may differ from
    /// submission order.
    pub pending: usize,
}

impl App {
    pub fn new(backend: Arc<dyn ReplyBackend>) -> Self {
        Self {
            backend,
            transcript: Transcript::new(),
            pending: 0,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.pending > 0
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.transcript.is_empty());
        assert_eq!(app.pending, 0);
        assert!(!app.is_waiting());
    }
}

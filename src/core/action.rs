//! # Actions
//!
//! Everything that can happen in wicket becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The backend answers? That's `Action::ReplyReceived(reply)`.
//!
//! The `update()` function takes the current state and an action, applies
//! it, and returns an `Effect` describing the I/O the caller now owes. No
//! side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the
//! transcript and the returned effect.

use crate::backend::{ChatReply, ReplyError};
use crate::core::state::App;

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The user submitted the composed text, passed through untrimmed.
    Submit(String),
    /// A send resolved to a reply body.
    ReplyReceived(ChatReply),
    /// A send failed before producing a reply body.
    SendFailed(ReplyError),
    /// The user asked to leave.
    Quit,
}

/// Work the event loop must perform after an action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// POST this already-trimmed message to the backend.
    SendMessage(String),
    Quit,
}

/// Applies `action` to `app` and returns the follow-up work.
///
/// Submission trims first: a whitespace-only submit changes nothing and
/// requests no send. A real submit appends the trimmed text as a user entry
/// before the send is even spawned, so the user's line is on screen while
/// the request is in flight.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(raw) => {
            let text = raw.trim();
            if text.is_empty() {
                return Effect::None;
            }
            let text = text.to_string();
            app.transcript.push_user(text.clone());
            app.pending = app.pending.saturating_add(1);
            Effect::SendMessage(text)
        }
        Action::ReplyReceived(reply) => {
            app.transcript.push_bot(reply.into_text());
            app.pending = app.pending.saturating_sub(1);
            Effect::None
        }
        Action::SendFailed(err) => {
            app.transcript.push_bot(format!("Error: {err}"));
            app.pending = app.pending.saturating_sub(1);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::Role;
    use crate::test_support::test_app;

    #[test]
    fn submit_appends_trimmed_text_and_requests_send() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("  hello there  ".to_string()));

        assert_eq!(effect, Effect::SendMessage("hello there".to_string()));
        assert_eq!(app.transcript.len(), 1);
        assert_eq!(app.transcript.entries()[0].role, Role::User);
        assert_eq!(app.transcript.entries()[0].text, "hello there");
        assert_eq!(app.pending, 1);
    }

    #[test]
    fn whitespace_only_submit_is_a_no_op() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("   \n\t ".to_string()));

        assert_eq!(effect, Effect::None);
        assert!(app.transcript.is_empty());
        assert_eq!(app.pending, 0);
    }

    #[test]
    fn reply_appends_bot_entry() {
        let mut app = test_app();
        update(&mut app, Action::Submit("hi".to_string()));
        let effect = update(
            &mut app,
            Action::ReplyReceived(ChatReply {
                reply: Some("hey there".to_string()),
            }),
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(app.transcript.len(), 2);
        assert_eq!(app.transcript.entries()[1].role, Role::Bot);
        assert_eq!(app.transcript.entries()[1].text, "hey there");
        assert_eq!(app.pending, 0);
    }

    #[test]
    fn missing_reply_appends_placeholder() {
        let mut app = test_app();
        update(&mut app, Action::Submit("hi".to_string()));
        update(&mut app, Action::ReplyReceived(ChatReply { reply: None }));

        assert_eq!(app.transcript.entries()[1].text, "(no reply)");
    }

    #[test]
    fn failure_appends_error_line() {
        let mut app = test_app();
        update(&mut app, Action::Submit("hi".to_string()));
        update(
            &mut app,
            Action::SendFailed(ReplyError::Network("connection refused".to_string())),
        );

        assert_eq!(app.transcript.entries()[1].role, Role::Bot);
        assert_eq!(app.transcript.entries()[1].text, "Error: connection refused");
        assert_eq!(app.pending, 0);
    }

    #[test]
    fn overlapping_sends_append_replies_in_arrival_order() {
        let mut app = test_app();
        update(&mut app, Action::Submit("first".to_string()));
        update(&mut app, Action::Submit("second".to_string()));
        assert_eq!(app.pending, 2);

        // The reply to "second" can land first; it still appends next.
        update(
            &mut app,
            Action::ReplyReceived(ChatReply {
                reply: Some("answer to second".to_string()),
            }),
        );
        update(
            &mut app,
            Action::ReplyReceived(ChatReply {
                reply: Some("answer to first".to_string()),
            }),
        );

        let texts: Vec<&str> = app
            .transcript
            .entries()
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec!["first", "second", "answer to second", "answer to first"]
        );
        assert_eq!(app.pending, 0);
    }

    #[test]
    fn quit_requests_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

//! # Transcript
//!
//! The display list: everything shown in the chat window, in the order it was
//! appended. Entries are immutable once pushed and are never removed for the
//! lifetime of the session, so the `Vec` is kept private and only append
//! operations are exposed.

/// Who authored an entry. Used only for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    /// Label rendered as the entry card's title.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

/// One rendered line of the conversation, tagged with its originating role.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub role: Role,
    pub text: String,
}

/// Append-only list of entries for the current session.
///
/// There is no deduplication, no size limit, and no pruning: every entry
/// accumulates in the view until the process exits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry authored by the user.
    pub fn push_user(&mut self, text: String) {
        self.entries.push(Entry {
            role: Role::User,
            text,
        });
    }

    /// Appends an entry authored by the bot. Error entries use this too;
    /// role classifies the author for styling, nothing more.
    pub fn push_bot(&mut self, text: String) {
        self.entries.push(Entry {
            role: Role::Bot,
            text,
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

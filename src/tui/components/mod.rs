//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: Top bar showing the backend endpoint and status
//! - `EntryCard`: Individual transcript entry rendering
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Multi-line text input with internal scrolling
//! - `TranscriptView`: Scrollable transcript with layout caching
//!
//! ## Design Philosophy
//!
//! ### Composition Over Inheritance
//!
//! Components compose naturally. `TranscriptView` renders one `EntryCard`
//! per visible entry rather than duplicating the card layout.
//!
//! ### Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! - State types
//! - Event types
//! - Rendering logic
//! - Event handling
//! - Tests
//!
//! Reading one file is enough to understand how a component works.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into global
//! state. Dependencies stay explicit and components stay testable:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! let mut view = TranscriptView::new(&mut tui.transcript_view, app.transcript());
//! view.render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! view.render(frame, area); // reads from a global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── entry.rs            (Single transcript entry card)
//! ├── transcript_view.rs  (Scrollable transcript container)
//! └── input_box.rs        (Multi-line text input)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod entry;
pub use entry::EntryCard;

pub mod input_box;
pub use input_box::{InputBox, InputEvent, SEND_LABEL};

pub mod transcript_view;
pub use transcript_view::{TranscriptView, TranscriptViewState};

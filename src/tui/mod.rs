//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter in the
//! future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Idle**: sleeps up to 500ms in the event poll, only redraws on events.
//! - **Waiting on replies**: polls every ~100ms so a reply arriving from a
//!   background task renders promptly instead of sitting in the channel
//!   until the next keypress.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::backend::{HttpBackend, ReplyBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TranscriptViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub transcript_view: TranscriptViewState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            transcript_view: TranscriptViewState::new(),
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable Kitty keyboard protocol unconditionally (allows Shift+Enter detection)
        // Detection via supports_keyboard_enhancement() fails in WSL, but the protocol
        // is harmlessly ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Run an action through the reducer and keep the transcript view pinned.
///
/// Every action that appends to the transcript must re-attach the view to
/// the bottom, even if the user had scrolled up, so the growth check lives
/// here rather than at each dispatch site.
fn apply_action(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let len_before = app.transcript.len();
    let effect = update(app, action);
    if app.transcript.len() > len_before {
        tui.transcript_view.pin_to_bottom();
    }
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn ReplyBackend> = Arc::new(HttpBackend::new(&config.endpoint));
    let mut app = App::new(backend);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background send tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while replies are in flight so their
        // arrival renders without waiting for the next key event
        let timeout = if app.is_waiting() {
            std::time::Duration::from_millis(100)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if matches!(event, TuiEvent::Quit) {
                let effect = apply_action(&mut app, &mut tui, Action::Quit);
                if effect == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Scroll events always go to the transcript view
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.transcript_view.handle_event(&event);
                continue;
            }

            // A click on the Send label acts exactly like Enter, including
            // the whitespace-only refusal inside the input box. Clicks
            // anywhere else do nothing.
            let event = if let TuiEvent::MouseClick(col, row) = event {
                let frame_area = terminal.get_frame().area();
                let input_height = tui.input_box.calculate_height(frame_area.width);
                if ui::hit_test_send(col, row, frame_area, input_height) {
                    TuiEvent::Submit
                } else {
                    continue;
                }
            } else {
                event
            };

            // InputBox handles everything else
            if let Some(input_event) = tui.input_box.handle_event(&event) {
                match input_event {
                    InputEvent::Submit(text) => {
                        // No in-flight gate here: overlapping sends are
                        // allowed and replies append in arrival order
                        let effect = apply_action(&mut app, &mut tui, Action::Submit(text));
                        if let Effect::SendMessage(message) = effect {
                            spawn_send(app.backend.clone(), message, tx.clone());
                        }
                    }
                    InputEvent::ContentChanged => {}
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle actions from background send tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = apply_action(&mut app, &mut tui, action);
            if effect == Effect::Quit {
                break;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Fire off one backend send on the tokio runtime.
///
/// The task owns its Arc handle to the backend and reports back through the
/// action channel. There is no timeout and no cancellation; a send that
/// never completes simply never delivers an action.
fn spawn_send(backend: Arc<dyn ReplyBackend>, message: String, tx: mpsc::Sender<Action>) {
    info!("Spawning backend send");

    tokio::spawn(async move {
        let action = match backend.send(&message).await {
            Ok(reply) => Action::ReplyReceived(reply),
            Err(e) => Action::SendFailed(e),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver send result: receiver dropped");
        }
    });
}

//! # Frame Layout
//!
//! Splits the terminal into the three fixed regions and delegates each to
//! its component:
//!
//! ```text
//! ┌─────────────────────────────┐
//! │ TitleBar            (1 row) │
//! ├─────────────────────────────┤
//! │ TranscriptView     (rest)   │
//! ├─────────────────────────────┤
//! │ InputBox      (3 to 7 rows) │
//! └─────────────────────────────┘
//! ```
//!
//! The input box height is content-driven, so the layout is recomputed
//! every frame. `hit_test_send` reruns the same split to map mouse clicks
//! onto the Send label without storing rects between frames.

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{SEND_LABEL, TitleBar, TranscriptView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Render one frame: title bar, transcript, input box.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let input_height = tui.input_box.calculate_height(frame.area().width);

    let [title_area, transcript_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(input_height),
    ])
    .areas(frame.area());

    let mut title_bar = TitleBar {
        backend_name: app.backend.name().to_string(),
        status_message: status_text(app),
    };
    title_bar.render(frame, title_area);

    let mut transcript_view = TranscriptView::new(&mut tui.transcript_view, &app.transcript);
    transcript_view.render(frame, transcript_area);

    tui.input_box.render(frame, input_area);
}

/// Status line for the title bar, derived from in-flight sends.
fn status_text(app: &App) -> String {
    match app.pending {
        0 => String::new(),
        1 => "waiting for reply".to_string(),
        n => format!("waiting for {n} replies"),
    }
}

/// Check whether a mouse click at (column, row) landed on the Send label in
/// the input box border.
///
/// Recomputes the frame layout from the click-time dimensions rather than
/// caching rects from the last render. The label is drawn right-aligned in
/// the bottom border row, ending one cell before the corner glyph.
pub fn hit_test_send(column: u16, row: u16, frame_area: Rect, input_height: u16) -> bool {
    let [_title_area, _transcript_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(input_height),
    ])
    .areas(frame_area);

    if input_area.width < 3 || input_area.height == 0 {
        return false;
    }

    let border_row = input_area.y + input_area.height - 1;
    if row != border_row {
        return false;
    }

    let right_corner = input_area.x + input_area.width - 1;
    let label_start = right_corner.saturating_sub(SEND_LABEL.len() as u16);

    (label_start..right_corner).contains(&column)
}

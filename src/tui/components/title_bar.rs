//! # TitleBar Component
//!
//! Top status bar identifying the application and the backend in use.
//!
//! ## Responsibilities
//!
//! - Display the backend endpoint the session talks to
//! - Display a status message (e.g., "waiting for reply")
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state, which makes it trivial to test:
//!
//! ```rust,ignore
//! let title_bar = TitleBar {
//!     backend_name: "http://localhost:5000".to_string(),
//!     status_message: "waiting for reply".to_string(),
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! The caller rebuilds it every frame from `App` state; construction is a
//! couple of string clones, so there is nothing worth caching.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Top bar showing the backend endpoint and a transient status message.
pub struct TitleBar {
    /// Backend identifier shown in parentheses (the endpoint URL)
    pub backend_name: String,
    /// Status text appended after a separator; empty hides the separator
    pub status_message: String,
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = if self.status_message.is_empty() {
            format!("Wicket ({})", self.backend_name)
        } else {
            format!("Wicket ({}) | {}", self.backend_name, self.status_message)
        };

        let title = Paragraph::new(Span::raw(text)).style(Style::default().fg(Color::Cyan));

        frame.render_widget(title, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_shows_backend_name() {
        let mut title_bar = TitleBar {
            backend_name: "http://localhost:5000".to_string(),
            status_message: String::new(),
        };

        let text = render_to_text(&mut title_bar, 60);
        assert!(text.contains("Wicket (http://localhost:5000)"));
    }

    #[test]
    fn test_no_separator_without_status() {
        let mut title_bar = TitleBar {
            backend_name: "http://localhost:5000".to_string(),
            status_message: String::new(),
        };

        let text = render_to_text(&mut title_bar, 60);
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_status_message_appended() {
        let mut title_bar = TitleBar {
            backend_name: "http://localhost:5000".to_string(),
            status_message: "waiting for reply".to_string(),
        };

        let text = render_to_text(&mut title_bar, 80);
        assert!(text.contains("Wicket (http://localhost:5000) | waiting for reply"));
    }
}

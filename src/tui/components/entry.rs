use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::transcript::{Entry, Role};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single transcript entry with
/// role-based styling.
///
/// `EntryCard` is a transient component: it's created fresh each frame with
/// the entry it needs to render and holds no state of its own.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// using `textwrap` with options that match Ratatui's `Paragraph` wrapping.
/// This lets the parent `TranscriptView` lay out scroll positions without
/// actually rendering each entry.
#[derive(Clone, Copy)]
pub struct EntryCard<'a> {
    pub entry: &'a Entry,
}

impl<'a> EntryCard<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        Self { entry }
    }

    /// Calculate the height required for this entry given a width.
    ///
    /// The wrapping options must match the Ratatui default for `Paragraph`
    /// to keep a 1:1 mapping between calculated and actual height.
    pub fn calculate_height(entry: &Entry, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            // Return 1 row so the entry still occupies space in the layout.
            return 1;
        }

        let content = entry.text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        // Ensure at least 1 content line even if textwrap returns empty
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }
}

/// Text style for a role. The border uses a dimmed version of the same
/// color so the content stays the focal point.
fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Green),
        Role::Bot => Style::default().fg(Color::Blue),
    }
}

// Implement Widget for easy usage in ScrollView
impl<'a> Widget for EntryCard<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = role_style(self.entry.role);
        let border_style = style.add_modifier(Modifier::DIM);

        let block = Block::bordered()
            .title(self.entry.role.label())
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(self.entry.text.trim())
            .style(style)
            .wrap(Wrap { trim: true });

        paragraph.render(inner_area, buf);
    }
}

/// Component trait implementation.
///
/// `EntryCard` is stateless, so the `&mut self` required by the trait is a
/// no-op; rendering is delegated to the [`Widget`] implementation.
impl<'a> Component for EntryCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

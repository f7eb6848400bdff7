//! Standard input pane (plain text)

use super::text_area::{render_text_area, EditorScroll};
use crate::ui::editor::TextBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

fn plain_line(line: &str) -> Line<'_> {
    Line::from(Span::styled(line, Style::default().fg(DEFAULT_THEME.fg)))
}

/// Render the input pane
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    buffer: &TextBuffer,
    is_focused: bool,
    scroll: &mut EditorScroll,
) {
    render_text_area(frame, area, " Input ", buffer, is_focused, scroll, plain_line);
}

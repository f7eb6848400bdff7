//! Shared rendering for the editable panes

use super::border_style;
use crate::ui::display::{column_of, expand_tabs, slice_spans};
use crate::ui::editor::TextBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the line number gutter ("  12 ")
const GUTTER_WIDTH: usize = 5;

/// Scroll state for an editable pane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorScroll {
    /// First visible line
    pub offset: usize,
    /// First visible display column
    pub column: usize,
}

/// Render an editable text area with line numbers
///
/// The scroll state is adjusted so the cursor stays in view both vertically
/// and horizontally.  Tabs are expanded for display only.  The terminal
/// cursor is placed only when the pane is focused.
pub fn render_text_area(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    buffer: &TextBuffer,
    is_focused: bool,
    scroll: &mut EditorScroll,
    highlight: fn(&str) -> Line<'_>,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    let text_width = (area.width.saturating_sub(2) as usize)
        .saturating_sub(GUTTER_WIDTH)
        .max(1);
    let (row, col) = buffer.cursor();
    let cursor_x = buffer
        .lines()
        .get(row)
        .map(|line| column_of(line, col))
        .unwrap_or(0);

    // Keep the cursor row on screen
    if row < scroll.offset {
        scroll.offset = row;
    } else if row >= scroll.offset + visible_height {
        scroll.offset = row + 1 - visible_height;
    }

    // Keep the cursor column on screen
    if cursor_x < scroll.column {
        scroll.column = cursor_x;
    } else if cursor_x >= scroll.column + text_width {
        scroll.column = cursor_x + 1 - text_width;
    }

    let visible_lines: Vec<Line> = buffer
        .lines()
        .iter()
        .enumerate()
        .skip(scroll.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let num_style = if idx == row && is_focused {
                Style::default().fg(DEFAULT_THEME.secondary)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let expanded = expand_tabs(line);
            let content = highlight(&expanded);
            let mut spans = vec![Span::styled(format!("{:4} ", idx + 1), num_style)];
            spans.extend(slice_spans(&content.spans, scroll.column, text_width));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);

    if is_focused {
        let x = area.x as usize + 1 + GUTTER_WIDTH + (cursor_x - scroll.column);
        let y = area.y as usize + 1 + (row - scroll.offset);
        frame.set_cursor_position((x as u16, y as u16));
    }
}

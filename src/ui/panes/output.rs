//! Output pane rendering
//!
//! Shows the last run's output exactly as returned.  Long lines wrap at the
//! pane edge and the scroll offset counts wrapped rows, so nothing is cut off.
//! An empty output renders an empty pane.

use super::border_style;
use crate::ui::display::{expand_tabs, wrap_to_width};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &str,
    is_error: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let text_style = if is_error {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    // Borders (2) and left padding (1)
    let inner_width = area.width.saturating_sub(3).max(1) as usize;
    let rows: Vec<String> = if output.is_empty() {
        Vec::new()
    } else {
        output
            .split('\n')
            .flat_map(|line| wrap_to_width(&expand_tabs(line), inner_width))
            .collect()
    };

    let total_rows = rows.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_rows > visible_height {
        let max_scroll = total_rows - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = rows
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| ListItem::new(row).style(text_style))
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

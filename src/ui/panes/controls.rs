//! Version selector and run hint

use super::border_style;
use crate::session::Version;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the selector row: every version, the selected one highlighted
pub fn render_controls_pane(frame: &mut Frame, area: Rect, selected: Version, is_focused: bool) {
    let block = Block::default()
        .title(" Version ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut spans = Vec::new();
    for version in Version::ALL {
        let style = if version == selected {
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        spans.push(Span::styled(format!(" {} ", version.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        " ▶ Run ",
        Style::default()
            .bg(DEFAULT_THEME.success)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

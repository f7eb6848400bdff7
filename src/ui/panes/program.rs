//! Program pane with Brewin' syntax highlighting
//!
//! Highlighting is cosmetic: a single pass over each line classifies words,
//! string literals, numbers and `//` comments.  Nothing here understands the
//! grammar, so unbalanced quotes simply color the rest of the line.

use super::text_area::{render_text_area, EditorScroll};
use crate::ui::editor::TextBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Highlight one line of Brewin' source
pub fn highlight_brewin_line(line: &str) -> Line<'_> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map(|(b, _)| *b).unwrap_or(line.len());
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        // Comments run to end of line
        if c == '/' && matches!(chars.get(i + 1), Some((_, '/'))) {
            spans.push(Span::styled(
                line[start..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        if c == '"' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].1 != '"' {
                j += if chars[j].1 == '\\' { 2 } else { 1 };
            }
            let end = if j < chars.len() { j + 1 } else { chars.len() };
            spans.push(Span::styled(
                line[start..byte_at(end)].to_string(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if c.is_ascii_digit() {
            let mut j = i;
            while j < chars.len() && chars[j].1.is_ascii_digit() {
                j += 1;
            }
            spans.push(Span::styled(
                line[start..byte_at(j)].to_string(),
                Style::default().fg(DEFAULT_THEME.number),
            ));
            i = j;
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            let mut j = i;
            while j < chars.len() && (chars[j].1.is_alphanumeric() || chars[j].1 == '_') {
                j += 1;
            }
            let word = &line[start..byte_at(j)];
            let is_call = chars[j..]
                .iter()
                .find(|(_, ch)| !ch.is_whitespace())
                .is_some_and(|(_, ch)| *ch == '(');
            spans.push(Span::styled(word.to_string(), word_style(word, is_call)));
            i = j;
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            '@' => Style::default().fg(DEFAULT_THEME.keyword),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
        i += 1;
    }

    Line::from(spans)
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "func" | "lambda" | "if" | "else" | "while" | "for" | "return" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "true" | "false" | "nil" => Style::default().fg(DEFAULT_THEME.literal),
        "print" | "inputi" | "inputs" => Style::default().fg(DEFAULT_THEME.builtin),
        "int" | "string" | "bool" => Style::default().fg(DEFAULT_THEME.type_name),
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the program pane
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    buffer: &TextBuffer,
    is_focused: bool,
    scroll: &mut EditorScroll,
) {
    render_text_area(
        frame,
        area,
        " Program ",
        buffer,
        is_focused,
        scroll,
        highlight_brewin_line,
    );
}

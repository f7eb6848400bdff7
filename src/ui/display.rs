//! Terminal column arithmetic shared by the panes
//!
//! Buffers store raw text; what reaches the screen is the tab-expanded form,
//! measured in terminal columns so wide characters take two cells.

use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

/// Tab stops every 4 columns
pub const TAB_WIDTH: usize = 4;

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Replace tabs with spaces up to the next tab stop
pub fn expand_tabs(line: &str) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            expanded.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            expanded.push(c);
            column += char_width(c);
        }
    }
    expanded
}

/// Display column at which character `char_col` of `line` starts
pub fn column_of(line: &str, char_col: usize) -> usize {
    line.chars().take(char_col).fold(0, |column, c| {
        if c == '\t' {
            column + TAB_WIDTH - column % TAB_WIDTH
        } else {
            column + char_width(c)
        }
    })
}

/// Split a tab-free line into rows of at most `width` columns
///
/// Characters are never dropped; an empty line yields one empty row.
pub fn wrap_to_width(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for c in line.chars() {
        let w = char_width(c);
        if used + w > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += w;
    }
    rows.push(current);
    rows
}

/// Keep the columns `[start, start + width)` of a styled line
///
/// A wide character cut by either edge is left out.
pub fn slice_spans(spans: &[Span<'_>], start: usize, width: usize) -> Vec<Span<'static>> {
    let end = start + width;
    let mut column = 0;
    let mut sliced = Vec::new();

    for span in spans {
        let mut visible = String::new();
        for c in span.content.chars() {
            let w = char_width(c);
            if column >= start && column + w <= end {
                visible.push(c);
            }
            column += w;
        }
        if !visible.is_empty() {
            sliced.push(Span::styled(visible, span.style));
        }
        if column >= end {
            break;
        }
    }
    sliced
}

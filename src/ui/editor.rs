//! Line-based text buffer backing the editable panes
//!
//! The buffer stores text as a vector of lines plus a cursor.  Columns are
//! counted in characters, not bytes, so the cursor can never land inside a
//! multi-byte code point.  `TextBuffer::from_text(s).text() == s` holds for
//! every input, trailing newline included.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl TextBuffer {
    /// Create a buffer holding `text` with the cursor at the start
    pub fn from_text(text: &str) -> Self {
        TextBuffer {
            lines: text.split('\n').map(String::from).collect(),
            row: 0,
            col: 0,
        }
    }

    /// Current contents, lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position as (row, column), both 0-based, column in characters
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Replace the contents and move the cursor to the start
    pub fn set_text(&mut self, text: &str) {
        *self = Self::from_text(text);
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        let idx = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(idx, c);
        self.col += 1;
    }

    /// Insert arbitrary text at the cursor (used for paste)
    ///
    /// `\r\n` and lone `\r` are treated as line breaks.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for c in normalized.chars() {
            self.insert_char(c);
        }
    }

    /// Split the current line at the cursor
    pub fn insert_newline(&mut self) {
        let idx = byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let idx = byte_index(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(idx);
            self.col -= 1;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&line);
        }
    }

    /// Delete the character under the cursor, joining with the next line at the end
    pub fn delete(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            let idx = byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = char_len(&self.lines[self.row]);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::from_text("")
    }
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Byte offset of character `col` in `line` (end of line if out of range)
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for text in ["", "a", "a\nb", "a\n", "\n\n", "func main() {\n  print(1);\n}"] {
            assert_eq!(TextBuffer::from_text(text).text(), text);
        }
    }

    #[test]
    fn test_insert_and_newline() {
        let mut buf = TextBuffer::from_text("ab");
        buf.move_right();
        buf.insert_char('x');
        assert_eq!(buf.text(), "axb");
        buf.insert_newline();
        assert_eq!(buf.text(), "ax\nb");
        assert_eq!(buf.cursor(), (1, 0));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        buf.move_down();
        buf.backspace();
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), (0, 2));

        buf.move_home();
        buf.backspace();
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), (0, 0));
    }

    #[test]
    fn test_delete_joins_lines() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        buf.move_end();
        buf.delete();
        assert_eq!(buf.text(), "abcd");
        buf.move_end();
        buf.delete();
        assert_eq!(buf.text(), "abcd");
    }

    #[test]
    fn test_cursor_wraps_across_lines() {
        let mut buf = TextBuffer::from_text("ab\nc");
        buf.move_end();
        buf.move_right();
        assert_eq!(buf.cursor(), (1, 0));
        buf.move_left();
        assert_eq!(buf.cursor(), (0, 2));
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut buf = TextBuffer::from_text("long line\nab\nanother");
        buf.move_end();
        buf.move_down();
        assert_eq!(buf.cursor(), (1, 2));
        buf.move_down();
        assert_eq!(buf.cursor(), (2, 2));
        buf.move_down();
        assert_eq!(buf.cursor(), (2, 2));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut buf = TextBuffer::from_text("héllo");
        buf.move_right();
        buf.move_right();
        buf.backspace();
        assert_eq!(buf.text(), "hllo");
        buf.insert_char('ü');
        buf.insert_char('✓');
        assert_eq!(buf.text(), "hü✓llo");
        assert_eq!(buf.cursor(), (0, 3));
    }

    #[test]
    fn test_paste_normalizes_line_breaks() {
        let mut buf = TextBuffer::default();
        buf.insert_str("a\r\nb\rc");
        assert_eq!(buf.text(), "a\nb\nc");
        assert_eq!(buf.cursor(), (2, 1));
    }
}

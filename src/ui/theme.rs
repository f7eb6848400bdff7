//! Color palette shared by every pane

use ratatui::style::Color;

pub struct Theme {
    /// Program text, stdin text and run output
    pub fg: Color,
    /// Selected version, version badge in the status bar, brackets
    pub primary: Color,
    /// Line number of the cursor row
    pub secondary: Color,
    /// Brewin' comments, other line numbers, unselected versions, hints
    pub comment: Color,
    /// Run badge in the selector row
    pub success: Color,
    /// Output pane text after a connection error
    pub error: Color,
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    /// Names followed by `(`
    pub function: Color,
    /// print, inputi, inputs
    pub builtin: Color,
    /// int, string, bool
    pub type_name: Color,
    /// true, false, nil
    pub literal: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    string: Color::Rgb(166, 227, 161),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    function: Color::Rgb(249, 226, 175),
    builtin: Color::Rgb(180, 165, 120),
    type_name: Color::Rgb(148, 226, 213),
    literal: Color::Rgb(245, 194, 231),
};

//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`program`]: Program editor with Brewin' syntax highlighting
//! - [`input`]: Standard input editor (plain text)
//! - [`controls`]: Version selector and run hint
//! - [`output`]: Output of the last run
//! - [`status`]: Status bar with keybindings
//!
//! Every pane is a stateless `render_*` function; scroll offsets live in
//! [`App`](crate::ui::App) and are passed in by reference.

mod text_area;

pub mod controls;
pub mod input;
pub mod output;
pub mod program;
pub mod status;

pub use controls::render_controls_pane;
pub use input::render_input_pane;
pub use output::render_output_pane;
pub use text_area::EditorScroll;
pub use program::{highlight_brewin_line, render_program_pane};
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all panes
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, run spawning
//! - **[`editor`]** — the text buffer behind the program and input panes
//! - **[`display`]** — tab expansion, column widths and wrapping for what reaches the screen
//! - **[`panes`]** — stateless render functions for each visible pane (program,
//!   input, version selector, output, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and a
//! [`RunClient`] and call [`App::run`] from inside a tokio runtime.
//!
//! [`Session`]: crate::session::Session
//! [`RunClient`]: crate::client::RunClient
//! [`App::run`]: app::App::run

pub mod app;
pub mod display;
pub mod editor;
pub mod panes;
pub mod theme;

pub use app::App;

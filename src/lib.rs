//! # Introduction
//!
//! brewview is a terminal front-end for a remote Brewin' interpreter.  It
//! shows two editable panes (program source and standard input), lets the user
//! pick one of the four interpreter revisions, sends both to the execution API
//! as a JSON `POST`, and displays the returned `stdout`.  The terminal UI is
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Request pipeline
//!
//! ```text
//! Key events → Action → Session → RunRequest → HTTP POST → RunResponse → Output pane
//! ```
//!
//! 1. [`session`] — the in-memory form state, the version selector, the
//!    built-in presets and the [`session::update`] function that applies an
//!    [`session::Action`] and reports the side effect to perform.
//! 2. [`client`] — wire types and the [`client::RunClient`] that performs the
//!    round trip.  Every transport or decoding failure collapses into the
//!    literal [`client::CONNECTION_ERROR`] message.
//! 3. [`config`] — endpoint selection from the build profile, environment and
//!    command line.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! The interpreter itself lives behind the HTTP endpoint and is not part of
//! this crate.

pub mod client;
pub mod config;
pub mod session;
pub mod ui;

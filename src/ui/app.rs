//! Main TUI application state and logic

use crate::client::{RunClient, CONNECTION_ERROR};
use crate::session::{update, Action, Effect, Preset, RunTicket, Session, Version};
use crate::ui::editor::TextBuffer;
use crate::ui::panes::EditorScroll;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::{mpsc, Arc};
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Program,
    Input,
    Version,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (program -> input -> version -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Program => FocusedPane::Input,
            FocusedPane::Input => FocusedPane::Version,
            FocusedPane::Version => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Program,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Program => FocusedPane::Output,
            FocusedPane::Input => FocusedPane::Program,
            FocusedPane::Version => FocusedPane::Input,
            FocusedPane::Output => FocusedPane::Version,
        }
    }
}

/// The main application state
pub struct App {
    /// Form state shared with the request builder
    pub session: Session,

    /// Editor buffers mirrored into `session.program` / `session.stdin`
    pub program: TextBuffer,
    pub stdin: TextBuffer,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub program_scroll: EditorScroll,
    pub stdin_scroll: EditorScroll,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    client: Arc<RunClient>,

    /// Finished runs are sent back to the event loop on this channel
    tx: mpsc::Sender<Action>,
    rx: mpsc::Receiver<Action>,

    /// Abort handle of the most recently spawned run
    in_flight: Option<tokio::task::AbortHandle>,
}

impl App {
    /// Create a new app for `session`, sending runs through `client`
    pub fn new(session: Session, client: Arc<RunClient>) -> Self {
        let (tx, rx) = mpsc::channel();
        App {
            program: TextBuffer::from_text(&session.program),
            stdin: TextBuffer::from_text(&session.stdin),
            session,
            focused_pane: FocusedPane::Program,
            program_scroll: EditorScroll::default(),
            stdin_scroll: EditorScroll::default(),
            output_scroll: 0,
            should_quit: false,
            client,
            tx,
            rx,
            in_flight: None,
        }
    }

    /// Run the TUI application
    ///
    /// Must be called from within a tokio runtime: runs are spawned as tasks.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Use poll with timeout so finished runs are picked up while idle
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Paste(text) => self.handle_paste(&text),
                    _ => {}
                }
            }

            self.process_finished_runs();
        }

        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        Ok(())
    }

    /// Apply results of runs that completed since the last call
    pub fn process_finished_runs(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            let shows_result = matches!(
                action,
                Action::RunFinished { run_id, .. } if run_id == self.session.latest_run
            );
            self.dispatch(action);
            if shows_result {
                self.output_scroll = 0;
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Program (top) | Input (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Version selector (top) | Output (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_program_pane(
            frame,
            left_rows[0],
            &self.program,
            self.focused_pane == FocusedPane::Program,
            &mut self.program_scroll,
        );

        super::panes::render_input_pane(
            frame,
            left_rows[1],
            &self.stdin,
            self.focused_pane == FocusedPane::Input,
            &mut self.stdin_scroll,
        );

        super::panes::render_controls_pane(
            frame,
            right_rows[0],
            self.session.version,
            self.focused_pane == FocusedPane::Version,
        );

        super::panes::render_output_pane(
            frame,
            right_rows[1],
            &self.session.output,
            self.session.output == CONNECTION_ERROR,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.session.status_message,
            self.session.version,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global bindings work regardless of focus.  AltGr arrives as
        // Ctrl+Alt on some platforms and must still type its character.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => self.dispatch(Action::Quit),
                KeyCode::Char('r') => self.dispatch(Action::Run),
                KeyCode::Char('v') => self.dispatch(Action::NextVersion),
                KeyCode::Char('l') => self.reset_to_preset(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.dispatch(Action::Quit),
            KeyCode::Tab => self.focused_pane = self.focused_pane.next(),
            KeyCode::BackTab => self.focused_pane = self.focused_pane.prev(),
            _ => match self.focused_pane {
                FocusedPane::Program | FocusedPane::Input => self.handle_editor_key(key),
                FocusedPane::Version => self.handle_selector_key(key),
                FocusedPane::Output => self.handle_output_key(key),
            },
        }
    }

    /// Insert pasted text into the focused editor
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.insert_str(text);
            self.sync_focused_buffer();
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.focused_buffer() else {
            return;
        };

        let changed = match key.code {
            KeyCode::Char(c) => {
                buffer.insert_char(c);
                true
            }
            KeyCode::Enter => {
                buffer.insert_newline();
                true
            }
            KeyCode::Backspace => {
                buffer.backspace();
                true
            }
            KeyCode::Delete => {
                buffer.delete();
                true
            }
            KeyCode::Left => {
                buffer.move_left();
                false
            }
            KeyCode::Right => {
                buffer.move_right();
                false
            }
            KeyCode::Up => {
                buffer.move_up();
                false
            }
            KeyCode::Down => {
                buffer.move_down();
                false
            }
            KeyCode::Home => {
                buffer.move_home();
                false
            }
            KeyCode::End => {
                buffer.move_end();
                false
            }
            _ => false,
        };

        if changed {
            self.sync_focused_buffer();
        }
    }

    fn handle_selector_key(&mut self, key: KeyEvent) {
        match key.code {
            // The selector lists versions newest first, so right moves to older
            KeyCode::Right | KeyCode::Down => self.dispatch(Action::NextVersion),
            KeyCode::Left | KeyCode::Up => self.dispatch(Action::PrevVersion),
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(version) = c
                    .to_digit(10)
                    .and_then(|n| Version::from_number(n as u8))
                {
                    self.dispatch(Action::SelectVersion(version));
                }
            }
            KeyCode::Enter => self.dispatch(Action::Run),
            _ => {}
        }
    }

    fn handle_output_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.output_scroll = self.output_scroll.saturating_sub(1),
            KeyCode::Down => self.output_scroll = self.output_scroll.saturating_add(1),
            KeyCode::Home => self.output_scroll = 0,
            _ => {}
        }
    }

    fn focused_buffer(&mut self) -> Option<&mut TextBuffer> {
        match self.focused_pane {
            FocusedPane::Program => Some(&mut self.program),
            FocusedPane::Input => Some(&mut self.stdin),
            _ => None,
        }
    }

    /// Copy the focused editor's text into the session
    fn sync_focused_buffer(&mut self) {
        let action = match self.focused_pane {
            FocusedPane::Program => Action::EditProgram(self.program.text()),
            FocusedPane::Input => Action::EditStdin(self.stdin.text()),
            _ => return,
        };
        self.dispatch(action);
    }

    fn reset_to_preset(&mut self) {
        self.dispatch(Action::LoadPreset(Preset::default_preset()));
        self.program.set_text(&self.session.program);
        self.stdin.set_text(&self.session.stdin);
        self.program_scroll = EditorScroll::default();
        self.stdin_scroll = EditorScroll::default();
    }

    fn dispatch(&mut self, action: Action) {
        match update(&mut self.session, action) {
            Effect::SpawnRun(ticket) => self.spawn_run(ticket),
            Effect::Quit => self.should_quit = true,
            Effect::None => {}
        }
    }

    /// Execute a run on the tokio runtime, superseding any run still in flight
    fn spawn_run(&mut self, ticket: RunTicket) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("Aborting in-flight run superseded by run #{}", ticket.run_id);
            }
            handle.abort();
        }

        info!(
            "Spawning run #{} (version={})",
            ticket.run_id, ticket.request.version
        );

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let output = client.run_to_output(&ticket.request).await;
            info!(
                "Run #{} finished ({} bytes of output)",
                ticket.run_id,
                output.len()
            );
            if tx
                .send(Action::RunFinished {
                    run_id: ticket.run_id,
                    output,
                })
                .is_err()
            {
                warn!(
                    "Failed to deliver result of run #{}: receiver dropped",
                    ticket.run_id
                );
            }
        });
        self.in_flight = Some(handle.abort_handle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_app() -> App {
        let client = RunClient::new("http://127.0.0.1:9/api/run").unwrap();
        App::new(Session::default(), Arc::new(client))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_initial_buffers_match_preset() {
        let app = new_app();
        assert_eq!(app.program.text(), Preset::default_preset().program);
        assert_eq!(app.stdin.text(), "1234");
        assert_eq!(app.focused_pane, FocusedPane::Program);
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Input);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Program);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Output);
    }

    #[test]
    fn test_typing_updates_session() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session.stdin, "12345");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.stdin, "123");
        assert_eq!(app.session.program, Preset::default_preset().program);
    }

    #[test]
    fn test_paste_into_program() {
        let mut app = new_app();
        app.handle_paste("// hi\n");
        assert!(app.session.program.starts_with("// hi\nfunc main()"));
    }

    #[test]
    fn test_selector_keys() {
        let mut app = new_app();
        app.focused_pane = FocusedPane::Version;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.version, Version::V3);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.version, Version::V2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.version, Version::V3);
        ctrl(&mut app, 'v');
        assert_eq!(app.session.version, Version::V2);
        assert_eq!(app.session.latest_run, 0);
    }

    #[test]
    fn test_digits_type_into_editor() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.version, Version::V4);
        assert!(app.session.program.starts_with("2func"));
    }

    #[test]
    fn test_reset_to_preset() {
        let mut app = new_app();
        press(&mut app, KeyCode::Delete);
        assert_ne!(app.session.program, Preset::default_preset().program);
        ctrl(&mut app, 'l');
        assert_eq!(app.session.program, Preset::default_preset().program);
        assert_eq!(app.program.text(), Preset::default_preset().program);
    }

    #[test]
    fn test_altgr_characters_are_typed() {
        let mut app = new_app();
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        app.handle_key_event(KeyEvent::new(KeyCode::Char('{'), altgr));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), altgr));
        assert!(app.session.program.starts_with("{qfunc main()"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_stale_result_keeps_output_scroll() {
        let mut app = new_app();
        app.session.latest_run = 2;
        app.session.output = "current".to_string();
        app.output_scroll = 5;

        app.tx
            .send(Action::RunFinished {
                run_id: 1,
                output: "old".to_string(),
            })
            .unwrap();
        app.process_finished_runs();
        assert_eq!(app.output_scroll, 5);
        assert_eq!(app.session.output, "current");

        app.tx
            .send(Action::RunFinished {
                run_id: 2,
                output: "new".to_string(),
            })
            .unwrap();
        app.process_finished_runs();
        assert_eq!(app.output_scroll, 0);
        assert_eq!(app.session.output, "new");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }
}

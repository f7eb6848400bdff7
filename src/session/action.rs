//! Session transitions
//!
//! [`update`] is the only place session fields change.  It never performs I/O:
//! starting a run is reported back as [`Effect::SpawnRun`] and the caller
//! decides how to execute it.

use super::{Preset, Session, Version};
use crate::client::RunRequest;

/// Something the user (or a finished background run) did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Program pane text changed
    EditProgram(String),
    /// Input pane text changed
    EditStdin(String),
    SelectVersion(Version),
    NextVersion,
    PrevVersion,
    /// Restore program and stdin from a preset; output is left alone
    LoadPreset(Preset),
    Run,
    /// A spawned run completed with the given display text
    RunFinished { run_id: u64, output: String },
    Quit,
}

/// Side effect requested by [`update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnRun(RunTicket),
    Quit,
}

/// A run to execute: the request body plus the id used to detect stale results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    pub run_id: u64,
    pub request: RunRequest,
}

/// Apply `action` to `session` and return the effect to perform
pub fn update(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::EditProgram(text) => {
            session.program = text;
            Effect::None
        }
        Action::EditStdin(text) => {
            session.stdin = text;
            Effect::None
        }
        Action::SelectVersion(version) => {
            set_version(session, version);
            Effect::None
        }
        Action::NextVersion => {
            set_version(session, session.version.next());
            Effect::None
        }
        Action::PrevVersion => {
            set_version(session, session.version.prev());
            Effect::None
        }
        Action::LoadPreset(preset) => {
            session.program = preset.program.to_string();
            session.stdin = preset.stdin.to_string();
            session.status_message = format!("Loaded preset '{}'", preset.name);
            Effect::None
        }
        Action::Run => {
            session.latest_run += 1;
            session.status_message =
                format!("Run #{} sent ({})", session.latest_run, session.version);
            Effect::SpawnRun(RunTicket {
                run_id: session.latest_run,
                request: session.request(),
            })
        }
        Action::RunFinished { run_id, output } => {
            if run_id != session.latest_run {
                // A newer run was issued after this one; its result wins
                session.status_message = format!("Run #{} result discarded", run_id);
                return Effect::None;
            }
            session.output = output;
            session.status_message = format!("Run #{} finished", run_id);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn set_version(session: &mut Session, version: Version) {
    session.version = version;
    session.status_message = format!("Version: {}", version);
}

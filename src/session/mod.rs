//! In-memory form state for one terminal session
//!
//! A [`Session`] holds exactly what the form shows: the program text, the
//! standard input text, the last output and the selected interpreter
//! [`Version`].  Nothing here is persisted; the state lives as long as the
//! process does.
//!
//! All mutation goes through [`update`], which applies an [`Action`] and
//! returns the [`Effect`] the caller has to carry out (spawning a run,
//! quitting).  Keeping the transition pure lets the event loop stay thin and
//! the behaviour testable without a terminal or a network.

mod action;
pub mod preset;

pub use action::{update, Action, Effect, RunTicket};
pub use preset::{Preset, DEFAULT_PRESET};

use crate::client::RunRequest;
use std::fmt;

/// Interpreter revision executed by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Version {
    V1,
    V2,
    V3,
    #[default]
    V4,
}

impl Version {
    /// All selectable versions, newest first (the order the selector shows them)
    pub const ALL: [Version; 4] = [Version::V4, Version::V3, Version::V2, Version::V1];

    /// Integer identifier sent in the request body
    pub fn number(self) -> u8 {
        match self {
            Version::V1 => 1,
            Version::V2 => 2,
            Version::V3 => 3,
            Version::V4 => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Version::V1),
            2 => Some(Version::V2),
            3 => Some(Version::V3),
            4 => Some(Version::V4),
            _ => None,
        }
    }

    /// Human-readable label, e.g. `v2: Brewin+`
    pub fn label(self) -> &'static str {
        match self {
            Version::V1 => "v1: Brewin",
            Version::V2 => "v2: Brewin+",
            Version::V3 => "v3: Brewin++",
            Version::V4 => "v4: Brewin#",
        }
    }

    /// Next entry in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Version::V4 => Version::V3,
            Version::V3 => Version::V2,
            Version::V2 => Version::V1,
            Version::V1 => Version::V4,
        }
    }

    /// Previous entry in selector order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Version::V4 => Version::V1,
            Version::V3 => Version::V4,
            Version::V2 => Version::V3,
            Version::V1 => Version::V2,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub program: String,
    pub stdin: String,
    pub output: String,
    pub version: Version,

    /// Status line text shown under the panes
    pub status_message: String,

    /// Id handed to the most recently issued run (0 = none yet)
    pub latest_run: u64,
}

impl Session {
    /// Start a session from a preset with the newest interpreter selected
    pub fn from_preset(preset: Preset) -> Self {
        Session {
            program: preset.program.to_string(),
            stdin: preset.stdin.to_string(),
            output: String::new(),
            version: Version::default(),
            status_message: String::from("Ready!"),
            latest_run: 0,
        }
    }

    /// Build the request body for the current field values
    pub fn request(&self) -> RunRequest {
        RunRequest {
            program: self.program.clone(),
            stdin: self.stdin.clone(),
            version: self.version.number(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_preset(Preset::default_preset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_numbers_round_trip() {
        for version in Version::ALL {
            assert_eq!(Version::from_number(version.number()), Some(version));
        }
        assert_eq!(Version::from_number(0), None);
        assert_eq!(Version::from_number(5), None);
    }

    #[test]
    fn test_version_cycle_visits_all() {
        let mut version = Version::V4;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(version);
            version = version.next();
        }
        assert_eq!(seen, Version::ALL.to_vec());
        assert_eq!(version, Version::V4);
        assert_eq!(Version::V4.prev(), Version::V1);
        assert_eq!(Version::V1.prev(), Version::V2);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Version::V2.to_string(), "v2: Brewin+");
        assert_eq!(Version::V4.label(), "v4: Brewin#");
    }
}

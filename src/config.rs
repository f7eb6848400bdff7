//! Startup configuration
//!
//! The endpoint is picked the same way the web front-end picks it: a
//! development build talks to a fixed loopback address, a production build
//! talks to `/api/run` on the server it was deployed with.  Command-line flags
//! override environment variables, which override the build-profile default.

use crate::session::Version;
use std::path::PathBuf;
use thiserror::Error;

/// Endpoint used by development builds
pub const DEV_API_URL: &str = "http://127.0.0.1:8000/api/run";

/// Path of the run endpoint on a production origin
pub const API_PATH: &str = "/api/run";

/// Origin assumed by production builds when none is configured
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

pub const ENV_API_URL: &str = "BREWVIEW_API_URL";
pub const ENV_ORIGIN: &str = "BREWVIEW_ORIGIN";
pub const ENV_LOG: &str = "BREWVIEW_LOG";

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "brewview.log";

/// Build profile, the equivalent of the front-end's production flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Development,
    Production,
}

impl Profile {
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            Profile::Development
        } else {
            Profile::Production
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid interpreter version '{0}': must be from 1-4")]
    InvalidVersion(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Fully resolved settings for one process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    /// Source file loaded into the program pane instead of the preset
    pub program_file: Option<PathBuf>,
    pub version: Version,
    /// Run once without the TUI and print the output
    pub once: bool,
    pub log_file: PathBuf,
    pub log_filter: String,
    pub show_help: bool,
}

impl Config {
    /// Resolve from the process arguments and environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::resolve(&args, |key| std::env::var(key).ok(), Profile::current())
    }

    /// Resolve from explicit arguments (program name excluded), an environment
    /// lookup and a build profile
    pub fn resolve<F>(args: &[String], env: F, profile: Profile) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut api_url_arg = None;
        let mut origin_arg = None;
        let mut program_file = None;
        let mut version = Version::default();
        let mut once = false;
        let mut log_file = None;
        let mut show_help = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let mut value_for = |flag: &str| {
                iter.next()
                    .cloned()
                    .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
            };

            match arg.as_str() {
                "-h" | "--help" => show_help = true,
                "--once" => once = true,
                "--api-url" => api_url_arg = Some(value_for("--api-url")?),
                "--origin" => origin_arg = Some(value_for("--origin")?),
                "--log-file" => log_file = Some(PathBuf::from(value_for("--log-file")?)),
                "-i" | "--interpreter" => {
                    let raw = value_for("--interpreter")?;
                    version = raw
                        .parse::<u8>()
                        .ok()
                        .and_then(Version::from_number)
                        .ok_or(ConfigError::InvalidVersion(raw))?;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownOption(flag.to_string()));
                }
                path => {
                    if program_file.is_some() {
                        return Err(ConfigError::UnexpectedArgument(path.to_string()));
                    }
                    program_file = Some(PathBuf::from(path));
                }
            }
        }

        let api_url = match api_url_arg.or_else(|| env(ENV_API_URL)) {
            Some(url) => url,
            None => match profile {
                Profile::Development => DEV_API_URL.to_string(),
                Profile::Production => {
                    let origin = origin_arg
                        .or_else(|| env(ENV_ORIGIN))
                        .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
                    join_origin(&origin)
                }
            },
        };

        Ok(Config {
            api_url,
            program_file,
            version,
            once,
            log_file: log_file.unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE)),
            log_filter: env(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            show_help,
        })
    }
}

fn join_origin(origin: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), API_PATH)
}

/// Usage text printed for `--help` and argument errors
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {name} [OPTIONS] [FILE]\n\
         \n\
         Edit and run Brewin' programs on a remote interpreter.\n\
         \n\
         Arguments:\n\
         \x20 [FILE]                 Load the program pane from FILE instead of the hello-world preset\n\
         \n\
         Options:\n\
         \x20 -i, --interpreter <N>  Interpreter version to select, from 1-4 (default 4)\n\
         \x20     --api-url <URL>    Run endpoint (env {api_env})\n\
         \x20     --origin <URL>     Server origin for release builds (env {origin_env})\n\
         \x20     --once             Run once, print the output and exit\n\
         \x20     --log-file <PATH>  Log destination (filter from env {log_env})\n\
         \x20 -h, --help             Print this help",
        name = program_name,
        api_env = ENV_API_URL,
        origin_env = ENV_ORIGIN,
        log_env = ENV_LOG,
    )
}

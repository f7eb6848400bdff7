// brewview: terminal client for the Brewin' interpreter service

use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Arc;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};

use brewview::client::RunClient;
use brewview::config::{usage, Config};
use brewview::session::{Preset, Session};
use brewview::ui::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program_name = std::env::args()
        .next()
        .unwrap_or_else(|| "brewview".to_string());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(&program_name));
            std::process::exit(1);
        }
    };

    if config.show_help {
        println!("{}", usage(&program_name));
        return Ok(());
    }

    if let Err(e) = init_logging(&config) {
        eprintln!(
            "Warning: could not open log file '{}': {}",
            config.log_file.display(),
            e
        );
    }

    let client = match RunClient::new(&config.api_url) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!("Using endpoint {}", client.api_url());

    let mut session = Session::from_preset(Preset::default_preset());
    session.version = config.version;
    if let Some(path) = &config.program_file {
        session.program = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: could not read '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
        info!("Loaded program from {}", path.display());
    }

    if config.once {
        let output = client.run_to_output(&session.request()).await;
        println!("{}", output);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, client);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        warn!("Event loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Send log records to the configured file; the terminal belongs to the TUI
fn init_logging(config: &Config) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();

    Ok(())
}

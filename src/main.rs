use std::io::stdout;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        cursor, execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use tracing::{error, info};

use mined::config::{default_config_dir, Config, ConfigManager};
use mined::input_system::CrosstermEvents;
use mined::{logging, App};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "mined", version, about = "Minimal modal terminal text editor")]
struct Args {
    /// File to open at startup
    path: Option<PathBuf>,

    /// Configuration file (defaults to config.json in the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs here instead of the configured log file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Load the config, falling back to defaults on any problem.
/// A missing default config file is seeded with the defaults.
fn load_config(path: Option<&Path>) -> Config {
    let mut manager = match path {
        Some(path) => ConfigManager::with_file(path.to_path_buf()),
        None => ConfigManager::new(&default_config_dir()),
    };

    match manager.load() {
        Ok(true) => {}
        Ok(false) if path.is_none() => {
            if let Err(e) = manager.save() {
                eprintln!("Warning: Could not write default config: {:#}", e);
            }
        }
        Ok(false) => eprintln!(
            "Warning: Config file '{}' not found, using defaults",
            manager.config_path().display()
        ),
        Err(e) => eprintln!("Warning: {:#}, using defaults", e),
    }

    manager.into_config()
}

/// Raw mode plus the alternate screen, undone on drop so every exit path
/// after [`TerminalGuard::enter`] leaves the terminal usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(stdout(), LeaveAlternateScreen, cursor::Show) {
            error!("Failed to leave alternate screen: {}", e);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref());

    let _log_guard = match logging::init(&config.log, args.log_file.as_deref()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Logging disabled: {:#}", e);
            None
        }
    };

    let mut app = App::new(config);
    if let Some(path) = args.path {
        if let Err(e) = app.open_initial(path.clone()).await {
            eprintln!("Error opening file '{}': {}", path.display(), e);
        } else {
            info!(path = %path.display(), "opened file");
        }
    }

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = app.run(&mut terminal, &mut CrosstermEvents).await;
    drop(guard);

    if let Err(e) = &result {
        error!("Editor stopped with error: {:#}", e);
        eprintln!("Error: {:#}", e);
    }
    result
}

//! Terminal User Interface for Policy Table
//!
//! Interactive search box, status buttons and records table.

pub mod app;
pub mod event;
pub mod ui;

use anyhow::Result;
use clap::Args;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, prelude::*, Terminal};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::cli::config::{load_config, resolve_dataset, resolve_status};
use crate::cli::tui::app::App;
use crate::cli::tui::event::{Event, EventHandler};

/// TUI command arguments
#[derive(Debug, Args)]
pub struct TuiArgs {
    /// Dataset file (JSON array of records); defaults to the configured or bundled dataset
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Initially selected status button (ALL, ACTIVE, SURRENDERED, CANCELLED, DRAFT, TERMINATED, LAPSE)
    #[arg(short = 's', long)]
    pub status: Option<String>,
}

/// Run the TUI
pub fn run(args: TuiArgs) -> Result<()> {
    // Load everything before touching the terminal so errors print normally.
    let config = load_config()?;
    let status = resolve_status(args.status.as_deref(), &config)?;
    let loaded = resolve_dataset(args.data, &config)?;
    info!(dataset = %loaded.origin, records = loaded.dataset.len(), "starting tui");

    let mut app = App::new(loaded.dataset, loaded.origin, status);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(250));

    // Main loop
    let result = run_app(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Run the application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, events: &EventHandler) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match events.next() {
            Event::Key(key) => app.handle_key(key),
            Event::Tick => {}
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
        }
    }

    Ok(())
}

//! Policy Table
//!
//! Searchable, filterable view of a static policy dataset:
//! - **list**: print the records matching a status button and search text
//! - **statuses**: show the status buttons and the raw codes behind them
//! - **tui**: interactive search box, status buttons and table

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use policy_table_logging::{init_logging, LogConfig};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "policy_table", about = "Search and filter a static policy dataset")]
struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the records matching a status and search text
    List {
        /// Dataset file (JSON array of records); defaults to the configured or bundled dataset
        #[arg(long)]
        data: Option<PathBuf>,

        /// Status button (ALL, ACTIVE, SURRENDERED, CANCELLED, DRAFT, TERMINATED, LAPSE)
        #[arg(short = 's', long)]
        status: Option<String>,

        /// Case-insensitive text matched against every column
        #[arg(short = 'q', long, default_value = "")]
        search: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the status filter buttons
    Statuses {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive terminal UI
    Tui(cli::tui::TuiArgs),
}

fn command_wants_json(command: &Commands) -> bool {
    match command {
        Commands::List { json, .. } => *json,
        Commands::Statuses { json } => *json,
        Commands::Tui(_) => false,
    }
}

fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::List {
            data,
            status,
            search,
            json,
        } => cli::list::run(cli::list::ListArgs {
            data,
            status,
            search,
            json,
        }),

        Commands::Statuses { json } => cli::statuses::run(cli::statuses::StatusesArgs { json }),

        Commands::Tui(args) => cli::tui::run(args),
    }
}

/// Argument errors exit 1 like every other failure, as JSON when `--json` was passed.
fn usage_failure(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = err.print();
        return ExitCode::SUCCESS;
    }

    if std::env::args().any(|arg| arg == "--json") {
        let err = anyhow::Error::new(cli::error::HelpfulError::invalid_usage(&err));
        cli::error::print_json_error(&err);
    } else {
        let _ = err.print();
    }
    ExitCode::from(1)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_failure(err),
    };

    // Console logs would corrupt the alternate screen; keep them to errors in TUI mode.
    let tui_mode = matches!(cli.command, Commands::Tui(_));
    let json_mode = command_wants_json(&cli.command);

    let _log_guard = match init_logging(LogConfig {
        app_name: "policy_table",
        verbose: cli.verbose,
        tui_mode,
    }) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Warning: logging disabled: {:#}", err);
            None
        }
    };

    match run_command(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                cli::error::print_json_error(&err);
            } else {
                eprintln!("{:?}", err);
            }
            ExitCode::from(1)
        }
    }
}

//! Shared logging setup for Policy Table binaries.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "policy_table=info,policy_table_core=info";
const VERBOSE_LOG_FILTER: &str = "policy_table=debug,policy_table_core=debug";

/// Logging configuration shared by Policy Table binaries.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
    pub tui_mode: bool,
}

/// Keeps the non-blocking file writer flushing until dropped.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Get the Policy Table home directory: ~/.policy_table
///
/// `POLICY_TABLE_HOME` overrides the location.
pub fn policy_table_home() -> Result<PathBuf> {
    if let Ok(override_path) = std::env::var("POLICY_TABLE_HOME") {
        return Ok(PathBuf::from(override_path));
    }
    dirs::home_dir()
        .map(|home| home.join(".policy_table"))
        .context("Could not determine home directory. Set POLICY_TABLE_HOME to continue.")
}

/// Get the logs directory: ~/.policy_table/logs
pub fn logs_dir() -> Result<PathBuf> {
    Ok(policy_table_home()?.join("logs"))
}

/// Ensure the logs directory exists.
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir()?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory: {}", logs.display()))?;
    Ok(logs)
}

/// Initialize tracing with a daily log file and a console layer.
///
/// The console goes to stderr so stdout stays clean for tables and JSON. In
/// TUI mode only errors reach the console. If the log directory cannot be
/// created, logging continues on the console alone.
pub fn init_logging(config: LogConfig<'_>) -> Result<LogGuard> {
    let file_filter = env_filter(config.verbose);
    let console_filter = if config.tui_mode {
        EnvFilter::new("error")
    } else {
        env_filter(config.verbose)
    };

    let mut guard = LogGuard { _file: None };
    let file_layer = match ensure_logs_dir() {
        Ok(log_dir) => {
            let appender =
                tracing_appender::rolling::daily(log_dir, format!("{}.log", sanitize_name(config.app_name)));
            let (writer, worker) = tracing_appender::non_blocking(appender);
            guard._file = Some(worker);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(file_filter),
            )
        }
        Err(err) => {
            eprintln!("Warning: failed to create logs directory: {:#}", err);
            None
        }
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(BoxMakeWriter::new(std::io::stderr))
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_LOG_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
        .collect()
}

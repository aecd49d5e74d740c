//! Helpful error types for CLI commands
//!
//! Every error includes:
//! - What went wrong
//! - Context about the situation
//! - Suggestions for how to fix it

use policy_table_core::StatusSelector;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// An error with helpful context and suggestions
#[derive(Debug)]
pub struct HelpfulError {
    /// The main error message
    pub message: String,
    /// Additional context about what was happening
    pub context: Option<String>,
    /// Suggestions for how to fix the error
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    /// Create a new helpful error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add multiple suggestions
    pub fn with_suggestions(mut self, suggestions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.suggestions.extend(suggestions.into_iter().map(|s| s.into()));
        self
    }

    // === Common error constructors ===

    /// Dataset file does not exist
    pub fn dataset_not_found(path: &Path) -> Self {
        Self::new(format!("Dataset not found: {}", path.display()))
            .with_context("The dataset file does not exist")
            .with_suggestions([
                format!("TRY: Check if the file exists: ls -la {}", path.display()),
                "TRY: Omit --data to use the bundled sample dataset".to_string(),
                "TRY: Fix the `dataset` entry in config.toml".to_string(),
            ])
    }

    /// Dataset file exists but could not be read or parsed
    pub fn dataset_unreadable(origin: &str, details: &str) -> Self {
        Self::new(format!("Cannot load dataset: {}", origin))
            .with_context(details.to_string())
            .with_suggestions([
                "TRY: The dataset must be a JSON array of record objects".to_string(),
                "TRY: Validate the JSON: cat FILE | python -m json.tool".to_string(),
                "TRY: Field values must be strings, numbers, booleans or null".to_string(),
            ])
    }

    /// Status selector is not one of the filter buttons
    pub fn unknown_status(value: &str) -> Self {
        let valid: Vec<&str> = StatusSelector::BUTTONS.iter().map(|s| s.as_str()).collect();
        Self::new(format!("Unknown status: '{}'", value))
            .with_context("Status must be one of the filter buttons")
            .with_suggestions([
                format!("TRY: Valid values: {}", valid.join(", ")),
                "TRY: TERMINATED covers both DEATH and MATURED records".to_string(),
                "TRY: List them with: policy_table statuses".to_string(),
            ])
    }

    /// Command line rejected by the argument parser
    pub fn invalid_usage(err: &clap::Error) -> Self {
        let rendered = err.to_string();
        let first_line = rendered.lines().next().unwrap_or_default();
        let details = first_line.strip_prefix("error: ").unwrap_or(first_line);
        Self::new(format!("Invalid arguments: {}", details))
            .with_context(rendered.trim_end().to_string())
            .with_suggestions(["TRY: policy_table --help".to_string()])
    }

    /// Config file could not be parsed
    pub fn config_parse_error(path: &Path, details: &str) -> Self {
        Self::new(format!("Invalid config file: {}", path.display()))
            .with_context(details.to_string())
            .with_suggestions([
                "TRY: Supported keys: dataset, default_status".to_string(),
                format!("TRY: Delete {} to fall back to defaults", path.display()),
            ])
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

#[derive(Debug, Serialize)]
struct JsonError<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
    #[serde(skip_serializing_if = "no_suggestions")]
    suggestions: &'a [String],
}

fn no_suggestions(suggestions: &&[String]) -> bool {
    suggestions.is_empty()
}

/// Render an error as the JSON payload printed in `--json` mode.
pub fn json_error(err: &anyhow::Error) -> serde_json::Value {
    let rendered;
    let payload = match err.downcast_ref::<HelpfulError>() {
        Some(helpful) => JsonError {
            error: &helpful.message,
            context: helpful.context.as_deref(),
            suggestions: &helpful.suggestions,
        },
        None => {
            rendered = format!("{:#}", err);
            JsonError {
                error: &rendered,
                context: None,
                suggestions: &[],
            }
        }
    };
    serde_json::to_value(payload).unwrap_or_else(|_| serde_json::json!({ "error": err.to_string() }))
}

/// Print an error as JSON on stdout.
pub fn print_json_error(err: &anyhow::Error) {
    println!("{}", json_error(err));
}

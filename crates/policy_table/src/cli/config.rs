//! Configuration for Policy Table
//!
//! Optional `config.toml` under the home directory (`~/.policy_table/`, or
//! `POLICY_TABLE_HOME`). CLI flags win over the file; the file wins over the
//! built-in defaults (bundled sample dataset, ALL status).

use anyhow::Result;
use policy_table_core::{Dataset, DatasetError, StatusSelector};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use policy_table_logging::policy_table_home;

use crate::cli::error::HelpfulError;

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dataset file; relative paths resolve against the config directory
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Status button selected on start
    #[serde(default)]
    pub default_status: Option<String>,
}

/// Get the config file path: ~/.policy_table/config.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(policy_table_home()?.join("config.toml"))
}

/// Load the config file, or defaults when it does not exist.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| HelpfulError::config_parse_error(path, &e.to_string()))?;
    let mut config: Config = toml::from_str(&content)
        .map_err(|e| HelpfulError::config_parse_error(path, &e.to_string()))?;

    if let (Some(dataset), Some(dir)) = (config.dataset.as_ref(), path.parent()) {
        if dataset.is_relative() {
            config.dataset = Some(dir.join(dataset));
        }
    }

    Ok(config)
}

/// Dataset plus a description of where it came from
#[derive(Debug)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub origin: String,
}

/// Load the dataset named by `--data`, else by the config, else the bundled sample.
pub fn resolve_dataset(flag: Option<PathBuf>, config: &Config) -> Result<LoadedDataset> {
    let Some(path) = flag.or_else(|| config.dataset.clone()) else {
        let dataset = Dataset::sample().map_err(|e| dataset_error("bundled sample", e))?;
        return Ok(LoadedDataset {
            dataset,
            origin: "bundled sample".to_string(),
        });
    };

    if !path.exists() {
        return Err(HelpfulError::dataset_not_found(&path).into());
    }

    let origin = path.display().to_string();
    let dataset = Dataset::load(&path).map_err(|e| dataset_error(&origin, e))?;
    info!(dataset = %origin, records = dataset.len(), "dataset loaded");
    Ok(LoadedDataset { dataset, origin })
}

fn dataset_error(origin: &str, err: DatasetError) -> HelpfulError {
    HelpfulError::dataset_unreadable(origin, &err.to_string())
}

/// Status from `--status`, else the config default, else ALL.
pub fn resolve_status(flag: Option<&str>, config: &Config) -> Result<StatusSelector> {
    match flag.or(config.default_status.as_deref()) {
        Some(raw) => parse_status(raw),
        None => Ok(StatusSelector::All),
    }
}

pub fn parse_status(raw: &str) -> Result<StatusSelector> {
    raw.parse::<StatusSelector>()
        .map_err(|_| HelpfulError::unknown_status(raw).into())
}

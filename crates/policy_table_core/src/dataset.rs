//! Dataset loading
//!
//! The dataset is read once, before the first filter call, and never
//! mutated afterwards.

use std::path::Path;
use tracing::debug;

use crate::error::{DatasetError, Result};
use crate::record::Record;

const SAMPLE_DATASET: &str = include_str!("../data/sample_policies.json");

/// Fixed, ordered collection of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of record objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, "<inline>")
    }

    /// Read and parse a JSON dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::parse(&content, &path.display().to_string())?;
        debug!(path = %path.display(), records = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Small dataset bundled with the crate, one or more records per status.
    pub fn sample() -> Result<Self> {
        Self::parse(SAMPLE_DATASET, "bundled sample")
    }

    fn parse(json: &str, origin: &str) -> Result<Self> {
        let records: Vec<Record> =
            serde_json::from_str(json).map_err(|source| DatasetError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

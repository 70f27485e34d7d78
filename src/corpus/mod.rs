//! The record store: an ordered, immutable collection of pattern records.
//!
//! A [`Corpus`] is built once (from the bundled dataset or a JSON file),
//! validated, indexed by category, and then only ever read.

pub mod index;
pub mod types;

use std::path::Path;

use index::CategoryIndex;
use types::Pattern;

/// Dataset compiled into the binary, used when no dataset path is configured.
pub const BUNDLED_PATTERNS: &str = include_str!("../../data/patterns.json");

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("record {index}: {reason}")]
    Invalid { index: usize, reason: &'static str },
}

/// Immutable record store plus the metadata reported alongside it.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<Pattern>,
    index: CategoryIndex,
    source: String,
    version: String,
}

impl Corpus {
    /// Validate and freeze a set of records.
    pub fn new(
        records: Vec<Pattern>,
        source: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, CorpusError> {
        for (index, record) in records.iter().enumerate() {
            validate(record).map_err(|reason| CorpusError::Invalid { index, reason })?;
        }
        let index = CategoryIndex::build(&records);
        Ok(Self {
            records,
            index,
            source: source.into(),
            version: version.into(),
        })
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str, source: impl Into<String>) -> Result<Self, CorpusError> {
        let records: Vec<Pattern> = serde_json::from_str(json)?;
        Self::new(records, source, env!("CARGO_PKG_VERSION"))
    }

    pub fn load(path: &Path, source: impl Into<String>) -> Result<Self, CorpusError> {
        let json = std::fs::read_to_string(path).map_err(|err| CorpusError::Read {
            path: path.display().to_string(),
            source: err,
        })?;
        Self::from_json(&json, source)
    }

    /// The dataset compiled into the binary, reported under `source`.
    pub fn bundled(source: impl Into<String>) -> Result<Self, CorpusError> {
        Self::from_json(BUNDLED_PATTERNS, source)
    }

    pub fn records(&self) -> &[Pattern] {
        &self.records
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(record: &Pattern) -> Result<(), &'static str> {
    if record.kind.trim().is_empty() {
        return Err("type must not be empty");
    }
    if record.categories.is_empty() {
        return Err("categories must not be empty");
    }
    if record.content.trim().is_empty() {
        return Err("content must not be empty");
    }
    Ok(())
}

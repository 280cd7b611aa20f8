//! Monastery directory: identity lookup and name search.
//!
//! # Responsibility
//! - Load the monastery directory once and serve the tour listing's name
//!   search plus the detail view's by-id lookup.
//!
//! # Invariants
//! - IDs are unique across the directory; duplicates are rejected at load.
//! - Search is case-insensitive name substring, load order preserved.

use crate::model::monastery::{Monastery, MonasteryId, MonasteryValidationError};
use log::{error, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Load-time error for the monastery directory.
#[derive(Debug)]
pub enum DirectoryError {
    /// Dataset is not valid JSON of the expected shape.
    Decode(serde_json::Error),
    /// A record violates the required-field contract.
    Record {
        index: usize,
        source: MonasteryValidationError,
    },
    /// Two records share one stable ID.
    DuplicateId(MonasteryId),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "invalid monastery dataset: {err}"),
            Self::Record { index, source } => {
                write!(f, "invalid monastery record at index {index}: {source}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate monastery id {id}"),
        }
    }
}

impl Error for DirectoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Record { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Immutable monastery directory loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct MonasteryDirectory {
    records: Vec<Monastery>,
}

impl MonasteryDirectory {
    /// Builds a directory from records, validating each and enforcing ID
    /// uniqueness.
    pub fn from_records(records: Vec<Monastery>) -> DirectoryResult<Self> {
        let mut seen = HashSet::new();
        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| DirectoryError::Record { index, source })?;
            if !seen.insert(record.id) {
                return Err(DirectoryError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// Decodes a JSON array of monastery records into a directory.
    ///
    /// # Side effects
    /// - Emits `directory_load` logging events with record count and
    ///   duration.
    pub fn from_json(json: &str) -> DirectoryResult<Self> {
        let started_at = Instant::now();

        let result = serde_json::from_str::<Vec<Monastery>>(json)
            .map_err(DirectoryError::from)
            .and_then(Self::from_records);

        match &result {
            Ok(directory) => info!(
                "event=directory_load module=directory status=ok records={} duration_ms={}",
                directory.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=directory_load module=directory status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }

    /// Resolves one monastery by stable ID, as the detail view does.
    pub fn get(&self, id: MonasteryId) -> Option<&Monastery> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Case-insensitive name-substring search, as the tour listing filters.
    ///
    /// A blank fragment returns the full directory.
    pub fn search_by_name(&self, fragment: &str) -> Vec<&Monastery> {
        let needle = fragment.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monastery> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

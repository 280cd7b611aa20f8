//! Immutable event store keyed by canonical date keys.
//!
//! # Responsibility
//! - Load the date → event mapping once, validating every entry.
//! - Serve point lookups and in-order month scans to the calendar.
//!
//! # Invariants
//! - The store never changes after construction; all access is by shared
//!   reference.
//! - Iteration order is ascending date order (ordered map keyed by
//!   [`DateKey`], whose ordering matches the key string).

use crate::calendar::date::{days_in_month, DateKey, DateKeyError};
use crate::model::event::{CulturalEvent, EventValidationError};
use log::{error, info};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Load-time error for event datasets.
///
/// Per the portal's data contract, malformed entries are rejected at load
/// instead of surfacing as silently missing lookups later.
#[derive(Debug)]
pub enum StoreError {
    /// Dataset is not valid JSON of the expected shape.
    Decode(serde_json::Error),
    /// An entry key is not a valid calendar day.
    Key { key: String, source: DateKeyError },
    /// An entry record violates the required-field contract.
    Event {
        key: String,
        source: EventValidationError,
    },
    /// Two entries resolve to the same calendar day.
    DuplicateKey(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "invalid event dataset: {err}"),
            Self::Key { key, source } => write!(f, "invalid event key `{key}`: {source}"),
            Self::Event { key, source } => write!(f, "invalid event at `{key}`: {source}"),
            Self::DuplicateKey(key) => write!(f, "duplicate event key `{key}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Key { source, .. } => Some(source),
            Self::Event { source, .. } => Some(source),
            Self::DuplicateKey(_) => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Immutable mapping from calendar day to scheduled cultural event.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: BTreeMap<DateKey, CulturalEvent>,
}

impl EventStore {
    /// Builds a store from raw `(key string, event)` entries.
    ///
    /// Every key is parsed and every event validated; the first offending
    /// entry aborts the load.
    ///
    /// # Errors
    /// - [`StoreError::Key`] for keys that are not valid calendar days.
    /// - [`StoreError::Event`] for records with blank required fields.
    /// - [`StoreError::DuplicateKey`] when two entries share a day.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, CulturalEvent)>,
    ) -> StoreResult<Self> {
        let mut events = BTreeMap::new();

        for (raw_key, event) in entries {
            let key = DateKey::parse(&raw_key).map_err(|source| StoreError::Key {
                key: raw_key.clone(),
                source,
            })?;
            event.validate().map_err(|source| StoreError::Event {
                key: raw_key.clone(),
                source,
            })?;
            if events.insert(key, event).is_some() {
                return Err(StoreError::DuplicateKey(raw_key));
            }
        }

        Ok(Self { events })
    }

    /// Decodes a JSON object of `"YYYY-MM-DD": event` entries into a store.
    ///
    /// # Side effects
    /// - Emits `store_load` logging events with entry count and duration.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let started_at = Instant::now();

        let decoded: BTreeMap<String, CulturalEvent> = match serde_json::from_str(json) {
            Ok(decoded) => decoded,
            Err(err) => {
                error!(
                    "event=store_load module=calendar status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match Self::from_entries(decoded) {
            Ok(store) => {
                info!(
                    "event=store_load module=calendar status=ok entries={} duration_ms={}",
                    store.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=store_load module=calendar status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Resolves the event scheduled on one day, if any.
    ///
    /// A `None` here is the normal outcome for most days, not a fault.
    pub fn lookup(&self, key: &DateKey) -> Option<&CulturalEvent> {
        self.events.get(key)
    }

    /// Returns the month's events in ascending date order.
    ///
    /// `month0` is 0-based, matching the cursor. Entries outside the queried
    /// month are excluded by construction of the range scan.
    pub fn events_in_month(&self, year: i32, month0: u32) -> Vec<(&DateKey, &CulturalEvent)> {
        let first = DateKey::from_day_in_month(year, month0, 1);
        let last = DateKey::from_day_in_month(year, month0, days_in_month(year, month0));
        self.events.range(first..=last).collect()
    }

    /// Iterates all entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &CulturalEvent)> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

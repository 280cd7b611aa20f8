//! Bundled seed datasets.
//!
//! # Responsibility
//! - Embed the portal's seed data in the binary and load it through the
//!   validating constructors.
//!
//! # Invariants
//! - Seed files ship inside the crate via `include_str!`; loading them can
//!   only fail if a seed file itself is invalid, which the dataset tests
//!   guard against.

use crate::archive::{ArchiveCatalog, CatalogResult};
use crate::calendar::{EventStore, StoreResult};
use crate::directory::{DirectoryResult, MonasteryDirectory};

const EVENTS_JSON: &str = include_str!("data/events.json");
const ARCHIVES_JSON: &str = include_str!("data/archives.json");
const MONASTERIES_JSON: &str = include_str!("data/monasteries.json");

/// Loads the bundled cultural event store.
pub fn builtin_events() -> StoreResult<EventStore> {
    EventStore::from_json(EVENTS_JSON)
}

/// Loads the bundled digital archive catalog.
pub fn builtin_archives() -> CatalogResult<ArchiveCatalog> {
    ArchiveCatalog::from_json(ARCHIVES_JSON)
}

/// Loads the bundled monastery directory.
pub fn builtin_monasteries() -> DirectoryResult<MonasteryDirectory> {
    MonasteryDirectory::from_json(MONASTERIES_JSON)
}

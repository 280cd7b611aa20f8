//! Core domain logic for the Sacred Sikkim tourism portal.
//! This crate is the single source of truth for business invariants.

pub mod archive;
pub mod calendar;
pub mod dataset;
pub mod directory;
pub mod logging;
pub mod model;

pub use archive::{ArchiveCatalog, ArchiveQuery, CatalogError, CatalogResult};
pub use calendar::{
    days_in_month, first_weekday_of_month, format_key, is_leap_year, CalendarController,
    CalendarGrid, DateKey, DateKeyError, EventStore, GridCell, MonthCursor, MonthStep, Selection,
    StoreError, StoreResult,
};
pub use dataset::{builtin_archives, builtin_events, builtin_monasteries};
pub use directory::{DirectoryError, DirectoryResult, MonasteryDirectory};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::archive::{ArchiveItem, ArchiveValidationError};
pub use model::event::{CulturalEvent, EventKind, EventValidationError};
pub use model::monastery::{Monastery, MonasteryId, MonasteryValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Digital archive item model.
//!
//! # Responsibility
//! - Define the record shape for digitized heritage items (manuscripts,
//!   murals, photographs) surfaced by the archive browser.
//!
//! # Invariants
//! - `title` is never blank in a loaded item.
//! - `content_type`, `era` and `monastery` are free-text facets matched by
//!   substring, so they carry no enum contract.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One digitized heritage item in the archive catalog.
///
/// The kind serializes under the `type` field, matching the portal's
/// archive records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveItem {
    pub title: String,
    pub description: String,
    /// Free-text content category, e.g. `manuscript` or `mural`.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Historical period label, e.g. `18th century`.
    pub era: String,
    /// Monastery the item originates from.
    pub monastery: String,
    /// Image URI for cards and the detail view.
    pub image: String,
}

impl ArchiveItem {
    /// Checks the required-field contract for loaded items.
    pub fn validate(&self) -> Result<(), ArchiveValidationError> {
        if self.title.trim().is_empty() {
            return Err(ArchiveValidationError::BlankTitle);
        }
        Ok(())
    }
}

/// Required-field violations detected at catalog load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveValidationError {
    BlankTitle,
}

impl Display for ArchiveValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "archive item title must not be blank"),
        }
    }
}

impl Error for ArchiveValidationError {}

//! Monastery domain model.
//!
//! # Responsibility
//! - Define the record shape shared by the tour listing and the per-site
//!   detail view.
//!
//! # Invariants
//! - `id` is stable and never reused for another monastery.
//! - `name` is never blank in a loaded record.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a monastery record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MonasteryId = Uuid;

/// One monastery in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monastery {
    /// Stable global ID used by detail-view lookups.
    pub id: MonasteryId,
    pub name: String,
    pub location: String,
    pub description: String,
    /// Founding label as displayed, e.g. `1705`.
    pub founded: String,
    /// Free-text facet tags shown as chips.
    pub tags: Vec<String>,
    /// Gallery image URIs; the first one is the card cover.
    pub images: Vec<String>,
    /// Embeddable 360° panorama URI, when one exists for the site.
    pub panoramic_image: Option<String>,
}

impl Monastery {
    /// Checks the required-field contract for loaded records.
    pub fn validate(&self) -> Result<(), MonasteryValidationError> {
        if self.id.is_nil() {
            return Err(MonasteryValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(MonasteryValidationError::BlankName);
        }
        Ok(())
    }
}

/// Required-field violations detected at directory load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonasteryValidationError {
    NilId,
    BlankName,
}

impl Display for MonasteryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "monastery id must not be nil"),
            Self::BlankName => write!(f, "monastery name must not be blank"),
        }
    }
}

impl Error for MonasteryValidationError {}

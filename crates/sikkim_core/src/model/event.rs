//! Cultural event domain model.
//!
//! # Responsibility
//! - Define the validated record attached to one calendar day.
//! - Map event kinds to the stable legend color tokens used by renderers.
//!
//! # Invariants
//! - Events are immutable once loaded into a store; only the store owns them.
//! - `title`, `location` and `image` are never blank in a loaded event.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Category of a scheduled cultural occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Multi-day celebration with dances and public performances.
    Festival,
    /// Religious observance such as prayers or lamp offerings.
    Ritual,
    /// Hands-on session (art, meditation) open to visitors.
    Workshop,
    /// One-off occasion outside the recurring categories.
    Special,
}

impl EventKind {
    /// Stable color token for the calendar dot legend.
    pub fn legend_color(&self) -> &'static str {
        match self {
            Self::Festival => "red",
            Self::Ritual => "orange",
            Self::Workshop => "blue",
            Self::Special => "purple",
        }
    }
}

/// A scheduled cultural event attached to a specific calendar day.
///
/// The wire shape matches the portal's event records: the kind serializes
/// under the `type` field, the image URI under `image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalEvent {
    pub title: String,
    /// Monastery or venue hosting the event.
    pub location: String,
    /// Free-text time range, e.g. `10:00 AM - 5:00 PM`.
    pub time: String,
    /// Image URI for cards and the detail panel.
    pub image: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

impl CulturalEvent {
    /// Checks the required-field contract for loaded events.
    ///
    /// # Errors
    /// Returns the first blank required field found, in declaration order.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::BlankTitle);
        }
        if self.location.trim().is_empty() {
            return Err(EventValidationError::BlankLocation);
        }
        if self.image.trim().is_empty() {
            return Err(EventValidationError::BlankImage);
        }
        Ok(())
    }
}

/// Required-field violations detected at store load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    BlankTitle,
    BlankLocation,
    BlankImage,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "event title must not be blank"),
            Self::BlankLocation => write!(f, "event location must not be blank"),
            Self::BlankImage => write!(f, "event image must not be blank"),
        }
    }
}

impl Error for EventValidationError {}

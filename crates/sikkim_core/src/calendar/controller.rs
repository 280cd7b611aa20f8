//! Calendar controller owning cursor and selection state.
//!
//! # Responsibility
//! - Provide the single mutation surface for month navigation and day
//!   selection; no ambient calendar state exists outside this object.
//! - Resolve selections and month summaries against the immutable store.
//!
//! # Invariants
//! - Every navigation step resets the selection to `Unselected`, from any
//!   state.
//! - The store is held by value and exposed read-only, so selections can
//!   only go stale through navigation, never through data mutation.

use crate::calendar::cursor::{MonthCursor, MonthStep};
use crate::calendar::date::DateKey;
use crate::calendar::grid::CalendarGrid;
use crate::calendar::store::EventStore;
use crate::model::event::CulturalEvent;
use log::debug;

/// Selection state of the displayed month.
///
/// `NoEvent` is a normal outcome: most days carry no scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No day chosen in the current month.
    #[default]
    Unselected,
    /// A day was chosen and no event is scheduled on it.
    NoEvent { day: u32 },
    /// A day was chosen and resolved to a stored event.
    WithEvent { day: u32, key: DateKey },
}

impl Selection {
    /// The chosen day, when one is selected.
    pub fn day(&self) -> Option<u32> {
        match self {
            Self::Unselected => None,
            Self::NoEvent { day } | Self::WithEvent { day, .. } => Some(*day),
        }
    }
}

/// Long-lived session controller for the cultural calendar.
pub struct CalendarController {
    store: EventStore,
    cursor: MonthCursor,
    selection: Selection,
}

impl CalendarController {
    /// Creates a controller showing `initial` with nothing selected.
    pub fn new(store: EventStore, initial: MonthCursor) -> Self {
        Self {
            store,
            cursor: initial,
            selection: Selection::Unselected,
        }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Steps the displayed month and force-resets the selection.
    pub fn navigate(&mut self, step: MonthStep) {
        self.cursor.step(step);
        self.selection = Selection::Unselected;
        debug!(
            "event=calendar_navigate module=calendar status=ok cursor={}",
            self.cursor
        );
    }

    /// Selects a day of the displayed month and resolves its event.
    ///
    /// Days come from the grid, which only emits valid ones; a day outside
    /// the month simply resolves to `NoEvent`.
    pub fn select_day(&mut self, day: u32) {
        let key = DateKey::from_day_in_month(self.cursor.year(), self.cursor.month0(), day);
        self.selection = if self.store.lookup(&key).is_some() {
            Selection::WithEvent { day, key }
        } else {
            Selection::NoEvent { day }
        };
    }

    /// Returns the selection to `Unselected` without moving the cursor.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::Unselected;
    }

    /// The event resolved by the current selection, if any.
    pub fn selected_event(&self) -> Option<&CulturalEvent> {
        match &self.selection {
            Selection::WithEvent { key, .. } => self.store.lookup(key),
            Selection::Unselected | Selection::NoEvent { .. } => None,
        }
    }

    /// Derives the displayed month's cell grid.
    pub fn current_grid(&self) -> CalendarGrid {
        CalendarGrid::for_month(self.cursor, &self.store)
    }

    /// The displayed month's events, ascending by date, for the card list
    /// under the calendar.
    pub fn month_summary(&self) -> Vec<(&DateKey, &CulturalEvent)> {
        self.store
            .events_in_month(self.cursor.year(), self.cursor.month0())
    }
}

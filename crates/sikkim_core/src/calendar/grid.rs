//! Month grid derivation.
//!
//! # Responsibility
//! - Turn a cursor month plus the event store into the ordered cell sequence
//!   a renderer draws: leading blanks, then annotated day cells.
//!
//! # Invariants
//! - Cell count is `first_weekday_of_month + days_in_month`.
//! - Grids are derived on demand and never cached; the cursor is the only
//!   state they depend on besides the immutable store.

use crate::calendar::cursor::MonthCursor;
use crate::calendar::date::{days_in_month, first_weekday_of_month, DateKey};
use crate::calendar::store::EventStore;
use crate::model::event::EventKind;

/// One cell of the 7-column month layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before day 1 so weekday columns line up.
    Blank,
    /// A real day of the month, annotated for the dot legend.
    Day {
        day: u32,
        /// Kind of the event scheduled that day, if any.
        event: Option<EventKind>,
    },
}

/// Ordered cell sequence for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    cells: Vec<GridCell>,
}

impl CalendarGrid {
    /// Derives the grid for the cursor month against the given store.
    pub fn for_month(cursor: MonthCursor, store: &EventStore) -> Self {
        let year = cursor.year();
        let month0 = cursor.month0();
        let leading_blanks = first_weekday_of_month(year, month0);
        let day_count = days_in_month(year, month0);

        let mut cells = Vec::with_capacity((leading_blanks + day_count) as usize);
        cells.extend((0..leading_blanks).map(|_| GridCell::Blank));
        cells.extend((1..=day_count).map(|day| {
            let key = DateKey::from_day_in_month(year, month0, day);
            GridCell::Day {
                day,
                event: store.lookup(&key).map(|event| event.kind),
            }
        }));

        Self { cells }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Rows of up to seven cells, Sunday-first, for row-oriented renderers.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

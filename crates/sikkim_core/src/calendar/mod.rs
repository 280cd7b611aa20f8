//! Calendar event index: date codec, event store, cursor, grid, controller.
//!
//! # Responsibility
//! - Map calendar days to scheduled cultural events and support
//!   month-by-month browsing with day selection.
//!
//! # Invariants
//! - All state mutation goes through [`CalendarController`].
//! - Every operation here is synchronous, non-blocking and infallible after
//!   load; dataset load is the only fallible surface.

pub mod controller;
pub mod cursor;
pub mod date;
pub mod grid;
pub mod store;

pub use controller::{CalendarController, Selection};
pub use cursor::{MonthCursor, MonthStep};
pub use date::{
    days_in_month, first_weekday_of_month, format_key, is_leap_year, DateKey, DateKeyError,
};
pub use grid::{CalendarGrid, GridCell};
pub use store::{EventStore, StoreError, StoreResult};

//! DateKey codec and Gregorian month arithmetic.
//!
//! # Responsibility
//! - Convert (year, month, day) triples to/from canonical `YYYY-MM-DD` keys.
//! - Provide day-count and weekday helpers for grid construction.
//!
//! # Invariants
//! - Cursor months are 0-based (January = 0); key months are 1-based. The
//!   +1 conversion happens in this module and nowhere else.
//! - `DateKey` ordering agrees with lexicographic ordering of the canonical
//!   key string, so ordered-map iteration is date order.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date key regex"));

/// Returns whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month.
///
/// `month0` is 0-based (January = 0) and must be `< 12`; this is a caller
/// contract, not a runtime check, matching the grid generator which only
/// emits valid months.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    debug_assert!(month0 < 12, "month index out of range: {month0}");
    match month0 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Returns the weekday of the 1st of the given month, `0..=6` with 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    debug_assert!(month0 < 12, "month index out of range: {month0}");
    // 1970-01-01 (day 0 of the civil count) was a Thursday.
    (days_from_civil(year, month0 + 1, 1) + 4).rem_euclid(7) as u32
}

/// Formats a canonical `YYYY-MM-DD` key from 0-based cursor coordinates.
///
/// `month0` is the cursor's 0-based month; the key stores it 1-based. An
/// out-of-range `day` still formats and simply matches no stored event.
pub fn format_key(year: i32, month0: u32, day: u32) -> String {
    format!("{year:04}-{:02}-{day:02}", month0 + 1)
}

/// Parsed, validated form of a canonical `YYYY-MM-DD` event key.
///
/// Ordering derives from `(year, month, day)`, which for zero-padded keys is
/// identical to string ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    year: i32,
    /// 1-based, as stored in the key string.
    month: u32,
    day: u32,
}

impl DateKey {
    /// Builds a key from 0-based cursor coordinates without range checks.
    ///
    /// Used by grid/selection paths where the day comes from the generator
    /// itself; an out-of-range day yields a key that matches nothing.
    pub fn from_day_in_month(year: i32, month0: u32, day: u32) -> Self {
        Self {
            year,
            month: month0 + 1,
            day,
        }
    }

    /// Parses and validates a canonical key string.
    ///
    /// # Errors
    /// - [`DateKeyError::MalformedKey`] when the shape is not `YYYY-MM-DD`.
    /// - [`DateKeyError::MonthOutOfRange`] when the month is not `01..=12`.
    /// - [`DateKeyError::DayOutOfRange`] when the day does not exist in the
    ///   keyed month (leap years honored).
    pub fn parse(key: &str) -> Result<Self, DateKeyError> {
        let captures = DATE_KEY_RE
            .captures(key)
            .ok_or_else(|| DateKeyError::MalformedKey(key.to_string()))?;

        // The regex guarantees fixed-width digit groups, so these cannot fail.
        let year: i32 = captures[1].parse().expect("four digit year");
        let month: u32 = captures[2].parse().expect("two digit month");
        let day: u32 = captures[3].parse().expect("two digit day");

        if !(1..=12).contains(&month) {
            return Err(DateKeyError::MonthOutOfRange {
                key: key.to_string(),
                month,
            });
        }

        let max_day = days_in_month(year, month - 1);
        if !(1..=max_day).contains(&day) {
            return Err(DateKeyError::DayOutOfRange {
                key: key.to_string(),
                day,
                max_day,
            });
        }

        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month, aligned with [`crate::calendar::MonthCursor`].
    pub fn month0(&self) -> u32 {
        self.month - 1
    }

    /// 1-based month, as stored in the key string.
    pub fn month1(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Validation error for event key strings supplied by datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    /// Key does not match the `YYYY-MM-DD` shape.
    MalformedKey(String),
    /// Month component outside `01..=12`.
    MonthOutOfRange { key: String, month: u32 },
    /// Day component outside the keyed month.
    DayOutOfRange { key: String, day: u32, max_day: u32 },
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedKey(key) => {
                write!(f, "malformed date key `{key}`; expected YYYY-MM-DD")
            }
            Self::MonthOutOfRange { key, month } => {
                write!(f, "date key `{key}` has month {month} outside 01..=12")
            }
            Self::DayOutOfRange { key, day, max_day } => {
                write!(f, "date key `{key}` has day {day} outside 01..={max_day}")
            }
        }
    }
}

impl Error for DateKeyError {}

/// Days since 1970-01-01 for a civil date (`month1` is 1-based).
///
/// Howard Hinnant's days-from-civil algorithm; exact over the full i32 year
/// range, which keeps month navigation unbounded.
fn days_from_civil(year: i32, month1: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month1 <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let doy = (153 * (i64::from(month1) + if month1 > 2 { -3 } else { 9 }) + 2) / 5
        + i64::from(day)
        - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

#[cfg(test)]
mod tests {
    use super::{days_from_civil, first_weekday_of_month, DateKey};

    #[test]
    fn civil_day_count_anchors() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1970, 1, 2), 1);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11017);
    }

    #[test]
    fn first_weekday_matches_known_calendar() {
        // 0 = Sunday.
        assert_eq!(first_weekday_of_month(1970, 0), 4); // Thu Jan 1 1970
        assert_eq!(first_weekday_of_month(2000, 0), 6); // Sat Jan 1 2000
        assert_eq!(first_weekday_of_month(2025, 8), 1); // Mon Sep 1 2025
        assert_eq!(first_weekday_of_month(2025, 11), 1); // Mon Dec 1 2025
        assert_eq!(first_weekday_of_month(2026, 0), 4); // Thu Jan 1 2026
        assert_eq!(first_weekday_of_month(2024, 1), 4); // Thu Feb 1 2024
    }

    #[test]
    fn key_ordering_matches_string_ordering() {
        let mut keys = [
            DateKey::parse("2026-01-25").unwrap(),
            DateKey::parse("2025-12-05").unwrap(),
            DateKey::parse("2025-09-11").unwrap(),
            DateKey::parse("2025-09-15").unwrap(),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        let mut strings = rendered.clone();
        strings.sort();
        assert_eq!(rendered, strings);
    }
}

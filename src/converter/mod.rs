// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar ↔ [`DayCount`](crate::DayCount) algorithms.
//!
//! One submodule per calendar, each exposing the same free functions:
//!
//! | Function | Meaning |
//! |----------|---------|
//! | `EPOCH` | day count of the first day of year 1 |
//! | `is_leap_year(year)` | leap status of `year` |
//! | `days_in_month(year, month)` | length of a month |
//! | `to_day_count(year, month, day)` | forward conversion (lands on `x.5`) |
//! | `from_day_count(jd)` | inverse conversion |
//!
//! Converting between two calendars always routes through the pivot:
//!
//! ```text
//! source → DayCount → target
//! ```
//!
//! Internally every algorithm works on the integer civil-day number
//! [`DayCount::day_index`](crate::DayCount::day_index), so forward and
//! inverse are exact inverses.

pub mod gregorian;
pub mod hebrew;
pub mod islamic;
pub mod julian;
pub mod persian;

use crate::calendar::CalendarDate;

/// Convert a date from calendar `S` to calendar `T` through
/// [`DayCount`](crate::DayCount).
///
/// ```
/// use almanac::{converter, Gregorian, Hebrew};
///
/// let hebrew: Hebrew = converter::convert(&Gregorian::new(1987, 3, 10));
/// assert_eq!(hebrew, Hebrew::new(5747, 12, 9));
/// ```
#[inline]
pub fn convert<S: CalendarDate, T: CalendarDate>(date: &S) -> T {
    T::from_day_count(date.to_day_count())
}

/// Ceiling division for a positive divisor.
#[inline]
pub(crate) fn div_ceil(a: i64, b: i64) -> i64 {
    (a + b - 1).div_euclid(b)
}

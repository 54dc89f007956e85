// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar conversions through a continuous day count.
//!
//! Every date is converted through [`DayCount`], a Julian Day value, so a
//! conversion from calendar A to calendar B is always
//!
//! ```text
//! A → DayCount → B
//! ```
//!
//! # Core types
//!
//! - [`DayCount`]: continuous day count (JD), the conversion pivot.
//! - [`CalendarDate`]: trait implemented by every calendar's date type.
//! - [`converter`]: the forward and inverse algorithm of each calendar.
//! - [`CalendarError`]: invalid month, weekday or day.
//!
//! # Calendars
//!
//! | Type | Calendar | Months |
//! |------|----------|--------|
//! | [`Gregorian`] | proleptic Gregorian | 12 |
//! | [`Julian`] | Julian (old style) | 12 |
//! | [`Islamic`] | tabular Hijri | 12 |
//! | [`Persian`] | Jalali | 12 |
//! | [`Hebrew`] | Hebrew lunisolar | 12 or 13 |
//!
//! # Example
//!
//! ```
//! use almanac::{CalendarDate, Gregorian, Hebrew, Persian};
//!
//! let date = Gregorian::new(1987, 3, 10);
//! let hebrew: Hebrew = date.to();
//! assert_eq!(hebrew, Hebrew::new(5747, 12, 9));
//! assert_eq!(hebrew.month_name(), Ok("Adar"));
//!
//! let persian = date.to::<Persian>();
//! assert_eq!(persian.to::<Gregorian>(), date);
//! ```

mod calendar;
pub mod converter;
mod dates;
mod day_count;
mod error;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{CalendarDate, DAYS_IN_WEEK};
pub use converter::hebrew::{HebrewYear, YearKind};
pub use dates::{Gregorian, Hebrew, Islamic, Julian, Persian};
pub use day_count::DayCount;
pub use error::CalendarError;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`CalendarDate`] trait shared by every calendar.
//!
//! A calendar defines:
//!
//! 1. Calendar-level constants: a display name, the epoch, month and weekday
//!    names.
//! 2. A pair of conversion functions between its `(year, month, day)`
//!    triple and the canonical [`DayCount`], provided by the matching
//!    [`converter`](crate::converter) module.
//! 3. Its month-length rule.
//!
//! The remaining operations are provided methods built on those primitives.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

use crate::day_count::DayCount;
use crate::error::CalendarError;

/// Days in every week of every supported calendar.
pub const DAYS_IN_WEEK: u8 = 7;

/// A date in one of the supported calendars.
pub trait CalendarDate: Copy + Clone + Debug + PartialEq + Eq + Hash + 'static {
    /// Human-readable calendar name, e.g. `"Hebrew Calendar"`.
    const NAME: &'static str;

    /// Day count of the first day of year 1.
    const EPOCH: DayCount;

    /// Month names, indexed by month number minus one.
    const MONTH_NAMES: &'static [&'static str];

    /// Weekday names, indexed by [`DayCount::weekday_index`] (Sunday first).
    const WEEKDAY_NAMES: [&'static str; 7];

    // ── required ──────────────────────────────────────────────────────

    /// Build from a triple without checking it.
    ///
    /// Forward conversion of a triple that is not a real date gives an
    /// unspecified day count; use [`try_new`](Self::try_new) for caller input.
    fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self;

    fn year(&self) -> i32;
    fn month(&self) -> u8;
    fn day(&self) -> u8;

    /// Forward conversion of a well-formed triple.
    fn ymd_to_day_count(year: i32, month: u8, day: u8) -> DayCount;

    /// Inverse conversion; always yields a well-formed triple.
    fn day_count_to_ymd(day_count: DayCount) -> (i32, u8, u8);

    /// Length of `month` in `year`.
    fn days_in_month_of(year: i32, month: u8) -> u8;

    /// Number of months in `year`.
    fn months_in_year_of(_year: i32) -> u8 {
        12
    }

    // ── construction ──────────────────────────────────────────────────

    /// Build a validated date.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidMonth`] if `month` is not in the year, and
    /// [`CalendarError::InvalidDay`] if `day` is not in the month.
    fn try_new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max = Self::months_in_year_of(year);
        if month == 0 || month > max {
            return Err(CalendarError::InvalidMonth { month, max });
        }
        let max = Self::days_in_month_of(year, month);
        if day == 0 || day > max {
            return Err(CalendarError::InvalidDay {
                calendar: Self::NAME,
                year,
                month,
                day,
                max,
            });
        }
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    /// The date of the civil day containing `day_count`.
    fn from_day_count(day_count: DayCount) -> Self {
        let (year, month, day) = Self::day_count_to_ymd(day_count);
        Self::from_ymd_unchecked(year, month, day)
    }

    /// Today's date according to the system clock (UTC).
    fn today() -> Self {
        Self::from_day_count(DayCount::now())
    }

    /// The date of a UTC instant.
    fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_day_count(DayCount::from_utc(datetime))
    }

    /// The date of a proleptic Gregorian civil date and time.
    fn from_naive(datetime: NaiveDateTime) -> Self {
        Self::from_day_count(DayCount::from_naive(datetime))
    }

    // ── conversion ────────────────────────────────────────────────────

    /// Day count at the midnight opening this date.
    fn to_day_count(&self) -> DayCount {
        Self::ymd_to_day_count(self.year(), self.month(), self.day())
    }

    /// Convert to another calendar.
    ///
    /// ```text
    /// self → DayCount → T
    /// ```
    fn to<T: CalendarDate>(&self) -> T {
        T::from_day_count(self.to_day_count())
    }

    /// Reinitialise from a date in any calendar.
    fn set<O: CalendarDate>(&mut self, other: &O) {
        *self = other.to::<Self>();
        debug!(from = O::NAME, to = Self::NAME, ?other, date = ?self, "calendar date set");
    }

    /// Step forward one day, in place.
    fn next_day(&mut self) {
        let mut day_count = self.to_day_count();
        day_count.advance_one_day();
        *self = Self::from_day_count(day_count);
    }

    // ── names ─────────────────────────────────────────────────────────

    /// Name of `month` (1-based).
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidMonth`] when `month` has no name.
    fn month_name_of(month: u8) -> Result<&'static str, CalendarError> {
        usize::from(month)
            .checked_sub(1)
            .and_then(|i| Self::MONTH_NAMES.get(i).copied())
            .ok_or(CalendarError::InvalidMonth {
                month,
                max: Self::MONTH_NAMES.len() as u8,
            })
    }

    /// Name of the weekday with the given index (0 = Sunday).
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidWeekday`] when `index > 6`.
    fn weekday_name_of(index: u8) -> Result<&'static str, CalendarError> {
        Self::WEEKDAY_NAMES
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidWeekday { index })
    }

    /// Name of this date's month.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidMonth`] when the month is not part of this
    /// date's year, e.g. Veadar in a common Hebrew year.
    fn month_name(&self) -> Result<&'static str, CalendarError> {
        let month = self.month();
        let max = self.months_in_year();
        if month == 0 || month > max {
            return Err(CalendarError::InvalidMonth { month, max });
        }
        Self::month_name_of(month)
    }

    /// Day of the week, 0 = Sunday.
    fn weekday_index(&self) -> u8 {
        self.to_day_count().weekday_index()
    }

    /// Name of this date's weekday.
    fn weekday_name(&self) -> &'static str {
        Self::WEEKDAY_NAMES[usize::from(self.weekday_index())]
    }

    // ── metadata ──────────────────────────────────────────────────────

    fn days_in_month(&self) -> u8 {
        Self::days_in_month_of(self.year(), self.month())
    }

    fn months_in_year(&self) -> u8 {
        Self::months_in_year_of(self.year())
    }

    fn days_in_week(&self) -> u8 {
        DAYS_IN_WEEK
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tabular Islamic (Hijri) calendar.
//!
//! Arithmetic, not observational: odd months have 30 days, even months 29,
//! and month 12 gains a day in 11 leap years of every 30-year cycle.

use super::div_ceil;
use crate::day_count::DayCount;

/// 1 Muharram 1 AH, JD 1 948 439.5 (16 July 622 Julian).
pub const EPOCH: DayCount = DayCount::new(1_948_439.5);

const EPOCH_INDEX: i64 = 1_948_439;

/// Days in one 30-year cycle.
const DAYS_PER_CYCLE: i64 = 10_631;

/// Leap years are 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of each cycle.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

/// Month length ignoring the leap day: 30 for odd months, 29 for even.
#[inline]
pub fn days_in_month_common(month: u8) -> u8 {
    if month % 2 == 0 {
        29
    } else {
        30
    }
}

/// Length of `month` (1-based) in `year`. Out-of-range months have no days.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        12 if is_leap_year(year) => 30,
        1..=12 => days_in_month_common(month),
        _ => 0,
    }
}

pub(crate) fn to_index(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    // ceil(29.5 * (m - 1)) days in the months before this one.
    let months_before = div_ceil(59 * (m - 1), 2);
    EPOCH_INDEX - 1
        + i64::from(day)
        + months_before
        + (y - 1) * 354
        + (3 + 11 * y).div_euclid(30)
}

pub(crate) fn from_index(index: i64) -> (i32, u8, u8) {
    let year = ((30 * (index - EPOCH_INDEX) + 10_646).div_euclid(DAYS_PER_CYCLE)) as i32;
    let since_first_month_end = index - (29 + to_index(year, 1, 1));
    let month = (div_ceil(2 * since_first_month_end, 59) + 1).min(12) as u8;
    let day = (index - to_index(year, month, 1) + 1) as u8;
    (year, month, day)
}

/// Day count at the midnight opening `year-month-day`.
#[inline]
pub fn to_day_count(year: i32, month: u8, day: u8) -> DayCount {
    DayCount::from_day_index(to_index(year, month, day))
}

/// Islamic `(year, month, day)` of the civil day containing `jd`.
#[inline]
pub fn from_day_count(jd: DayCount) -> (i32, u8, u8) {
    from_index(jd.day_index())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Persian (Jalali) calendar.
//!
//! Months 1–6 have 31 days, months 7–11 have 30, and Esfand (12) has 29 or
//! 30.  Day counts come from the 2820-year arithmetic cycle; leap status is
//! *defined* by that forward conversion, as the length of the year, rather
//! than by a divisibility rule of its own.
//!
//! There is no year zero: year `-1` is followed by year `1`.

use super::div_ceil;
use crate::day_count::DayCount;
use tracing::trace;

/// 1 Farvardin 1 AP, JD 1 948 320.5 (19 March 622 Julian).
pub const EPOCH: DayCount = DayCount::new(1_948_320.5);

const EPOCH_INDEX: i64 = 1_948_320;

const YEARS_PER_CYCLE: i64 = 2_820;
const DAYS_PER_CYCLE: i64 = 1_029_983;

/// Day of the year on which Mehr (month 7) begins.
const FIRST_HALF_DAYS: i64 = 186;

/// The year following `year`, skipping the missing year zero.
#[inline]
fn next_year(year: i32) -> i32 {
    if year == -1 {
        1
    } else {
        year + 1
    }
}

/// `true` iff the year from 1 Farvardin `year` to 1 Farvardin of the next
/// year is longer than 365 days.
pub fn is_leap_year(year: i32) -> bool {
    let length = to_index(next_year(year), 1, 1) - to_index(year, 1, 1);
    trace!(year, length, "persian year length");
    length > 365
}

/// Length of `month` (1-based) in `year`. Out-of-range months have no days.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// All twelve month lengths of `year`.
pub fn days_per_month_in_year(year: i32) -> [u8; 12] {
    let mut days = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];
    if is_leap_year(year) {
        days[11] = 30;
    }
    days
}

pub(crate) fn to_index(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year);
    let m = i64::from(month);
    let epoch_base = year - if year >= 0 { 474 } else { 473 };
    let epoch_year = 474 + epoch_base.rem_euclid(YEARS_PER_CYCLE);
    let months_before = if m <= 7 {
        (m - 1) * 31
    } else {
        (m - 1) * 30 + 6
    };
    i64::from(day)
        + months_before
        + (epoch_year * 682 - 110).div_euclid(2816)
        + (epoch_year - 1) * 365
        + epoch_base.div_euclid(YEARS_PER_CYCLE) * DAYS_PER_CYCLE
        + EPOCH_INDEX
        - 1
}

pub(crate) fn from_index(index: i64) -> (i32, u8, u8) {
    let depoch = index - to_index(475, 1, 1);
    let cycle = depoch.div_euclid(DAYS_PER_CYCLE);
    let cycle_day = depoch.rem_euclid(DAYS_PER_CYCLE);
    let year_in_cycle = if cycle_day == DAYS_PER_CYCLE - 1 {
        YEARS_PER_CYCLE
    } else {
        let aux1 = cycle_day / 366;
        let aux2 = cycle_day % 366;
        (2134 * aux1 + 2816 * aux2 + 2815) / 1_028_522 + aux1 + 1
    };
    let mut year = year_in_cycle + YEARS_PER_CYCLE * cycle + 474;
    if year <= 0 {
        year -= 1;
    }
    let year = year as i32;

    let year_day = index - to_index(year, 1, 1) + 1;
    let month = if year_day <= FIRST_HALF_DAYS {
        div_ceil(year_day, 31)
    } else {
        div_ceil(year_day - 6, 30)
    };
    let month = month as u8;
    let day = (index - to_index(year, month, 1) + 1) as u8;
    (year, month, day)
}

/// Day count at the midnight opening `year-month-day`.
#[inline]
pub fn to_day_count(year: i32, month: u8, day: u8) -> DayCount {
    DayCount::from_day_index(to_index(year, month, day))
}

/// Persian `(year, month, day)` of the civil day containing `jd`.
#[inline]
pub fn from_day_count(jd: DayCount) -> (i32, u8, u8) {
    from_index(jd.day_index())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew (lunisolar) calendar.
//!
//! Months are numbered from Nisan:
//!
//! | # | Month | # | Month |
//! |---|-------|---|-------|
//! | 1 | Nisan | 8 | Heshvan |
//! | 2 | Iyyar | 9 | Kislev |
//! | 3 | Sivan | 10 | Teveth |
//! | 4 | Tammuz | 11 | Shevat |
//! | 5 | Av | 12 | Adar |
//! | 6 | Elul | 13 | Veadar (leap years only) |
//! | 7 | Tishri | | |
//!
//! The year number changes on 1 Tishri, so a year runs 7, 8, …, 12 (13),
//! 1, …, 6.
//!
//! ## New year
//!
//! The start of each year is the *molad* of Tishri (mean conjunction,
//! advancing 29 d 12 h 793 parts per month, 1080 parts per hour) pushed
//! forward by the postponement rules:
//!
//! 1. a molad at or after noon moves to the next day;
//! 2. the new year never falls on Sunday, Wednesday or Friday;
//! 3. a common year may not reach 356 days;
//! 4. a year following a leap year may not shrink to 382 days.
//!
//! The resulting year is 353, 354 or 355 days long (383–385 in leap years);
//! see [`YearKind`].
//!
//! ## Inverse
//!
//! There is no closed form from a day count back to a year.  The year is
//! estimated from the mean year length and then located among exactly three
//! candidates, `estimate - 1 ..= estimate + 1`.

use crate::day_count::DayCount;
use tracing::trace;

/// 1 Tishri AM 1, JD 347 997.5.
pub const EPOCH: DayCount = DayCount::new(347_997.5);

const EPOCH_INDEX: i64 = 347_997;

/// Origin of the mean-year estimate used to bracket the inverse search.
const ESTIMATE_ORIGIN: i64 = 347_995;

/// One day expressed in parts (24 × 1080).
const PARTS_PER_DAY: i64 = 25_920;

/// A lunation beyond its 29 whole days: 12 h 793 p.
const LUNATION_EXTRA_PARTS: i64 = 13_753;

/// Molad of Tishri AM 1 counted from noon of the preceding day, so that the
/// noon rule falls out of the floor division.
const MOLAD_BASE_PARTS: i64 = 12_084;

/// Whether `year` carries the intercalary month Veadar.
///
/// Years 3, 6, 8, 11, 14, 17 and 19 of each 19-year cycle are leap years.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// 13 in leap years, 12 otherwise.
#[inline]
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Days from the epoch to the molad-derived new year, with the noon rule and
/// the Sunday/Wednesday/Friday rule applied.
fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = MOLAD_BASE_PARTS + LUNATION_EXTRA_PARTS * months;
    let day = months * 29 + parts.div_euclid(PARTS_PER_DAY);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day + 1
    } else {
        day
    }
}

/// Extra delay keeping the year lengths legal.
fn length_postponement(year: i64) -> i64 {
    let last = elapsed_days(year - 1);
    let present = elapsed_days(year);
    let next = elapsed_days(year + 1);
    if next - present == 356 {
        2
    } else if present - last == 382 {
        1
    } else {
        0
    }
}

/// Day number of 1 Tishri of `year`.
fn new_year(year: i64) -> i64 {
    EPOCH_INDEX + elapsed_days(year) + length_postponement(year)
}

// ═══════════════════════════════════════════════════════════════════════════
// Year layout
// ═══════════════════════════════════════════════════════════════════════════

/// Length class of a Hebrew year.
///
/// Together with leap status this selects one of six month-length patterns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum YearKind {
    /// 353 or 383 days: Heshvan and Kislev both have 29 days.
    Deficient,
    /// 354 or 384 days: Heshvan 29, Kislev 30.
    Regular,
    /// 355 or 385 days: Heshvan and Kislev both have 30 days.
    Complete,
}

/// One Hebrew year: where it starts, how long it is and how its months are
/// laid out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HebrewYear {
    year: i32,
    start: i64,
    length: i64,
}

impl HebrewYear {
    /// Compute the layout of `year`.
    pub fn new(year: i32) -> Self {
        let start = new_year(i64::from(year));
        let length = new_year(i64::from(year) + 1) - start;
        Self {
            year,
            start,
            length,
        }
    }

    /// The year number.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Day count of 1 Tishri.
    #[inline]
    pub fn start(&self) -> DayCount {
        DayCount::from_day_index(self.start)
    }

    /// Number of days in the year.
    #[inline]
    pub fn length(&self) -> u16 {
        self.length as u16
    }

    #[inline]
    pub fn is_leap(&self) -> bool {
        is_leap_year(self.year)
    }

    #[inline]
    pub fn months(&self) -> u8 {
        months_in_year(self.year)
    }

    pub fn kind(&self) -> YearKind {
        match self.length % 10 {
            3 => YearKind::Deficient,
            5 => YearKind::Complete,
            _ => YearKind::Regular,
        }
    }

    /// Length of `month`; `0` for a month the year does not have.
    pub fn month_length(&self, month: u8) -> u8 {
        match month {
            13 if !self.is_leap() => 0,
            2 | 4 | 6 | 10 | 13 => 29,
            12 if !self.is_leap() => 29,
            8 if self.kind() != YearKind::Complete => 29,
            9 if self.kind() == YearKind::Deficient => 29,
            1..=12 => 30,
            _ => 0,
        }
    }

    /// Month lengths indexed by month number minus one.
    pub fn month_lengths(&self) -> Vec<u8> {
        (1..=self.months()).map(|m| self.month_length(m)).collect()
    }

    /// Months in the order they occur, starting from Tishri.
    fn civil_months(&self) -> impl Iterator<Item = u8> {
        (7..=self.months()).chain(1..7)
    }

    fn days_before(&self, month: u8) -> i64 {
        self.civil_months()
            .take_while(|&m| m != month)
            .map(|m| i64::from(self.month_length(m)))
            .sum()
    }
}

/// Length of `month` (1-based, Nisan first) in `year`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    HebrewYear::new(year).month_length(month)
}

pub(crate) fn to_index(year: i32, month: u8, day: u8) -> i64 {
    let layout = HebrewYear::new(year);
    layout.start + layout.days_before(month) + i64::from(day) - 1
}

/// Locate the year containing day number `index`.
///
/// The estimate divides by the exact mean year (235 lunations over 19
/// years), so it is never more than one year away from the answer and three
/// candidates are enough.  `index` must lie within the
/// [`DayCount::day_index`] range for the products to stay in `i64`.
fn year_containing(index: i64) -> i64 {
    let estimate = ((index - ESTIMATE_ORIGIN) * 98_496).div_euclid(35_975_351) + 1;
    // `estimate - 1` always starts on or before `index`, so `find` cannot
    // come back empty; the fallback only satisfies the type.
    let year = (estimate..=estimate + 1)
        .rev()
        .find(|&y| new_year(y) <= index)
        .unwrap_or(estimate - 1);
    trace!(index, estimate, year, "hebrew year located");
    debug_assert!(new_year(year) <= index && index < new_year(year + 1));
    year
}

pub(crate) fn from_index(index: i64) -> (i32, u8, u8) {
    let layout = HebrewYear::new(year_containing(index) as i32);
    let mut offset = index - layout.start;
    let mut month = 7;
    for m in layout.civil_months() {
        month = m;
        let length = i64::from(layout.month_length(m));
        if offset < length {
            break;
        }
        offset -= length;
    }
    (layout.year, month, (offset + 1) as u8)
}

/// Day count at the midnight opening `year-month-day`.
#[inline]
pub fn to_day_count(year: i32, month: u8, day: u8) -> DayCount {
    DayCount::from_day_index(to_index(year, month, day))
}

/// Hebrew `(year, month, day)` of the civil day containing `jd`.
#[inline]
pub fn from_day_count(jd: DayCount) -> (i32, u8, u8) {
    from_index(jd.day_index())
}

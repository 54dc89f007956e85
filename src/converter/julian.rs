// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian (old-style) calendar.
//!
//! Every fourth year is a leap year, without the Gregorian century rule.
//! Years follow historical numbering: there is no year zero, so 1 BCE is
//! year `-1` and is followed directly by year `1`.

use crate::day_count::DayCount;

/// 1 January 1 CE (Julian), JD 1 721 423.5.
pub const EPOCH: DayCount = DayCount::new(1_721_423.5);

/// Every fourth year, counted on the astronomical axis (1 BCE is leap).
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    astronomical(year).rem_euclid(4) == 0
}

/// Length of `month` (1-based). Out-of-range months have no days.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Map a historical year onto the astronomical axis (1 BCE → 0).
#[inline]
fn astronomical(year: i32) -> i64 {
    let year = i64::from(year);
    if year < 1 {
        year + 1
    } else {
        year
    }
}

pub(crate) fn to_index(year: i32, month: u8, day: u8) -> i64 {
    let mut y = astronomical(year);
    let mut m = i64::from(month);
    // March-based year: January and February count as months 13 and 14.
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    (1461 * (y + 4716)).div_euclid(4) + (153 * (m + 1)).div_euclid(5) + i64::from(day) - 1525
}

pub(crate) fn from_index(index: i64) -> (i32, u8, u8) {
    let b = index + 1525;
    let c = (20 * b - 2442).div_euclid(7305);
    let d = (1461 * c).div_euclid(4);
    let e = ((b - d) * 10_000).div_euclid(306_001);

    let day = b - d - (306_001 * e).div_euclid(10_000);
    let month = if e < 14 { e - 1 } else { e - 13 };
    let mut year = if month > 2 { c - 4716 } else { c - 4715 };
    if year < 1 {
        year -= 1;
    }
    (year as i32, month as u8, day as u8)
}

/// Day count at the midnight opening `year-month-day`.
#[inline]
pub fn to_day_count(year: i32, month: u8, day: u8) -> DayCount {
    DayCount::from_day_index(to_index(year, month, day))
}

/// Julian `(year, month, day)` of the civil day containing `jd`.
#[inline]
pub fn from_day_count(jd: DayCount) -> (i32, u8, u8) {
    from_index(jd.day_index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dates() {
        assert_eq!(to_day_count(1, 1, 1), EPOCH);
        // 1 January 2000 (Julian) = 14 January 2000 (Gregorian).
        assert_eq!(to_day_count(2000, 1, 1).value(), 2_451_557.5);
        // 4 October 1582 (Julian) was followed by 15 October 1582 (Gregorian).
        assert_eq!(to_day_count(1582, 10, 4).value(), 2_299_159.5);
        // Julian Day origin: 1 January 4713 BCE at noon.
        assert_eq!(from_day_count(DayCount::new(0.0)), (-4713, 1, 1));
    }

    #[test]
    fn test_no_year_zero() {
        let first = to_index(1, 1, 1);
        assert_eq!(from_index(first - 1), (-1, 12, 31));
        assert_eq!(to_index(-1, 12, 31), first - 1);
        assert!(is_leap_year(-1));
        assert!(is_leap_year(4));
        assert!(!is_leap_year(1));
    }

    #[test]
    fn test_century_years_are_leap() {
        assert!(is_leap_year(1900));
        assert!(is_leap_year(1700));
        assert_eq!(from_index(to_index(1900, 2, 29)), (1900, 2, 29));
        assert_eq!(from_index(to_index(1900, 2, 29) + 1), (1900, 3, 1));
    }

    #[test]
    fn test_every_day_of_a_span_roundtrips() {
        let start = to_index(-10, 1, 1);
        for index in start..start + 4 * 1461 {
            let (y, m, d) = from_index(index);
            assert_ne!(y, 0);
            assert!(d >= 1 && d <= days_in_month(y, m));
            assert_eq!(to_index(y, m, d), index);
        }
    }
}

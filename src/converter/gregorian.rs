// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar.
//!
//! Years use astronomical numbering: 1 BCE is year `0`, 2 BCE is `-1`.

use crate::day_count::DayCount;

/// 1 January 1 CE (Gregorian), JD 1 721 425.5.
pub const EPOCH: DayCount = DayCount::new(1_721_425.5);

const EPOCH_INDEX: i64 = 1_721_425;

const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_4_YEARS: i64 = 1_461;

/// Divisible by 4, except centuries not divisible by 400.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
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

pub(crate) fn to_index(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - 1;
    let m = i64::from(month);
    let leap_adjust = if month <= 2 {
        0
    } else if is_leap_year(year) {
        -1
    } else {
        -2
    };
    EPOCH_INDEX - 1
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        + (367 * m - 362).div_euclid(12)
        + leap_adjust
        + i64::from(day)
}

pub(crate) fn from_index(index: i64) -> (i32, u8, u8) {
    let depoch = index - EPOCH_INDEX;
    let quadricent = depoch.div_euclid(DAYS_PER_400_YEARS);
    let dqc = depoch.rem_euclid(DAYS_PER_400_YEARS);
    let cent = dqc / DAYS_PER_100_YEARS;
    let dcent = dqc % DAYS_PER_100_YEARS;
    let quad = dcent / DAYS_PER_4_YEARS;
    let dquad = dcent % DAYS_PER_4_YEARS;
    let yindex = dquad / 365;

    let mut year = quadricent * 400 + cent * 100 + quad * 4 + yindex;
    // The last day of a leap cycle belongs to the closing year.
    if cent != 4 && yindex != 4 {
        year += 1;
    }
    let year = year as i32;

    let year_day = index - to_index(year, 1, 1);
    let leap_adjust = if index < to_index(year, 3, 1) {
        0
    } else if is_leap_year(year) {
        1
    } else {
        2
    };
    let month = (((year_day + leap_adjust) * 12 + 373) / 367) as u8;
    let day = (index - to_index(year, month, 1) + 1) as u8;
    (year, month, day)
}

/// Day count at the midnight opening `year-month-day`.
#[inline]
pub fn to_day_count(year: i32, month: u8, day: u8) -> DayCount {
    DayCount::from_day_index(to_index(year, month, day))
}

/// Gregorian `(year, month, day)` of the civil day containing `jd`.
#[inline]
pub fn from_day_count(jd: DayCount) -> (i32, u8, u8) {
    from_index(jd.day_index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dates() {
        assert_eq!(to_day_count(2000, 1, 1).value(), 2_451_544.5);
        assert_eq!(to_day_count(1970, 1, 1), DayCount::UNIX_EPOCH);
        assert_eq!(to_day_count(1, 1, 1), EPOCH);
        assert_eq!(to_day_count(1987, 3, 10).value(), 2_446_864.5);
        assert_eq!(from_day_count(DayCount::new(2_459_465.5)), (2021, 9, 8));
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn test_year_boundaries() {
        let dec31 = to_index(1999, 12, 31);
        assert_eq!(from_index(dec31 + 1), (2000, 1, 1));
        assert_eq!(from_index(to_index(2000, 2, 29)), (2000, 2, 29));
        assert_eq!(from_index(to_index(2000, 2, 29) + 1), (2000, 3, 1));
        assert_eq!(from_index(to_index(1900, 2, 28) + 1), (1900, 3, 1));
        assert_eq!(from_index(to_index(2000, 12, 31)), (2000, 12, 31));
    }

    #[test]
    fn test_proleptic_years_before_epoch() {
        assert_eq!(from_index(EPOCH_INDEX - 1), (0, 12, 31));
        assert_eq!(from_index(to_index(-44, 3, 15)), (-44, 3, 15));
    }

    #[test]
    fn test_every_day_of_a_cycle_roundtrips() {
        let start = to_index(1600, 1, 1);
        for index in start..start + DAYS_PER_400_YEARS + 10 {
            let (y, m, d) = from_index(index);
            assert!((1..=12).contains(&m));
            assert!(d >= 1 && d <= days_in_month(y, m));
            assert_eq!(to_index(y, m, d), index);
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date types, one per calendar.
//!
//! | Type | Calendar | Epoch (JD) |
//! |------|----------|------------|
//! | [`Gregorian`] | proleptic Gregorian | 1 721 425.5 |
//! | [`Julian`] | Julian (old style) | 1 721 423.5 |
//! | [`Islamic`] | tabular Hijri | 1 948 439.5 |
//! | [`Persian`] | Jalali, arithmetic | 1 948 320.5 |
//! | [`Hebrew`] | Hebrew lunisolar | 347 997.5 |
//!
//! Each type only stores `(year, month, day)`.  The algorithms live in
//! [`converter`](crate::converter); these types wire them into
//! [`CalendarDate`].  Equality compares the triple; dates of different
//! calendars are compared by converting one of them first.

use std::cmp::Ordering;
use std::fmt;

use crate::calendar::CalendarDate;
use crate::converter::hebrew::HebrewYear;
use crate::converter::{gregorian, hebrew, islamic, julian, persian};
use crate::day_count::DayCount;

const WESTERN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WESTERN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ISLAMIC_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi`al-Awwal",
    "Rabi`ath-Thani",
    "Jumada l-Ula",
    "Jumada t-Tania",
    "Rajab",
    "Sha`ban",
    "Ramadan",
    "Shawwal",
    "Dhu l-Qa`da",
    "Dhu l-Hijja",
];

const ISLAMIC_WEEKDAYS: [&str; 7] = [
    "al-'ahad",
    "al-'ithnayn",
    "ath-thalatha'",
    "al-'arb`a'",
    "al-khamis",
    "al-jum`a",
    "as-sabt",
];

const PERSIAN_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const PERSIAN_WEEKDAYS: [&str; 7] = [
    "Yekshanbeh",
    "Doshanbeh",
    "Seshanbeh",
    "Chaharshanbeh",
    "Panjshanbeh",
    "Jomeh",
    "Shanbeh",
];

const HEBREW_MONTHS: [&str; 13] = [
    "Nisan", "Iyyar", "Sivan", "Tammuz", "Av", "Elul", "Tishri", "Heshvan", "Kislev", "Teveth",
    "Shevat", "Adar", "Veadar",
];

const HEBREW_WEEKDAYS: [&str; 7] = [
    "Yom Rishon",
    "Yom Sheni",
    "Yom Shelishi",
    "Yom Revi'i",
    "Yom Hamishi",
    "Yom Shishi",
    "Shabbat",
];

/// Declares a `(year, month, day)` date struct with its constructor,
/// leap-year query and `Display`.
macro_rules! date_type {
    ($(#[$meta:meta])* $name:ident, $module:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            year: i32,
            month: u8,
            day: u8,
        }

        impl $name {
            /// Build without validation; see [`CalendarDate::try_new`].
            #[inline]
            pub const fn new(year: i32, month: u8, day: u8) -> Self {
                Self { year, month, day }
            }

            /// Whether this date's year is a leap year.
            #[inline]
            pub fn is_leap_year(&self) -> bool {
                $module::is_leap_year(self.year)
            }
        }

        /// `9 Esfand, 1402`; the alternate form `{:#}` prefixes the calendar
        /// name, as in `Persian Calendar: 9 Esfand, 1402`.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if f.alternate() {
                    write!(f, "{}: ", Self::NAME)?;
                }
                match self.month_name() {
                    Ok(month) => write!(f, "{} {}, {}", self.day, month, self.year),
                    Err(_) => write!(f, "{} {}, {}", self.day, self.month, self.year),
                }
            }
        }
    };
}

// ═══════════════════════════════════════════════════════════════════════════
// Gregorian
// ═══════════════════════════════════════════════════════════════════════════

date_type!(
    /// A proleptic Gregorian date (astronomical year numbering).
    #[derive(PartialOrd, Ord)]
    Gregorian,
    gregorian
);

impl CalendarDate for Gregorian {
    const NAME: &'static str = "Gregorian Calendar";
    const EPOCH: DayCount = gregorian::EPOCH;
    const MONTH_NAMES: &'static [&'static str] = &WESTERN_MONTHS;
    const WEEKDAY_NAMES: [&'static str; 7] = WESTERN_WEEKDAYS;

    #[inline]
    fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self::new(year, month, day)
    }

    #[inline]
    fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    fn day(&self) -> u8 {
        self.day
    }

    fn ymd_to_day_count(year: i32, month: u8, day: u8) -> DayCount {
        gregorian::to_day_count(year, month, day)
    }

    fn day_count_to_ymd(day_count: DayCount) -> (i32, u8, u8) {
        gregorian::from_day_count(day_count)
    }

    fn days_in_month_of(year: i32, month: u8) -> u8 {
        gregorian::days_in_month(year, month)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Julian
// ═══════════════════════════════════════════════════════════════════════════

date_type!(
    /// A Julian (old-style) date. There is no year zero.
    #[derive(PartialOrd, Ord)]
    Julian,
    julian
);

impl CalendarDate for Julian {
    const NAME: &'static str = "Julian Calendar";
    const EPOCH: DayCount = julian::EPOCH;
    const MONTH_NAMES: &'static [&'static str] = &WESTERN_MONTHS;
    const WEEKDAY_NAMES: [&'static str; 7] = WESTERN_WEEKDAYS;

    #[inline]
    fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self::new(year, month, day)
    }

    #[inline]
    fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    fn day(&self) -> u8 {
        self.day
    }

    fn ymd_to_day_count(year: i32, month: u8, day: u8) -> DayCount {
        julian::to_day_count(year, month, day)
    }

    fn day_count_to_ymd(day_count: DayCount) -> (i32, u8, u8) {
        julian::from_day_count(day_count)
    }

    fn days_in_month_of(year: i32, month: u8) -> u8 {
        julian::days_in_month(year, month)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Islamic
// ═══════════════════════════════════════════════════════════════════════════

date_type!(
    /// A date in the tabular Islamic (Hijri) calendar.
    #[derive(PartialOrd, Ord)]
    Islamic,
    islamic
);

impl CalendarDate for Islamic {
    const NAME: &'static str = "Islamic Calendar";
    const EPOCH: DayCount = islamic::EPOCH;
    const MONTH_NAMES: &'static [&'static str] = &ISLAMIC_MONTHS;
    const WEEKDAY_NAMES: [&'static str; 7] = ISLAMIC_WEEKDAYS;

    #[inline]
    fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self::new(year, month, day)
    }

    #[inline]
    fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    fn day(&self) -> u8 {
        self.day
    }

    fn ymd_to_day_count(year: i32, month: u8, day: u8) -> DayCount {
        islamic::to_day_count(year, month, day)
    }

    fn day_count_to_ymd(day_count: DayCount) -> (i32, u8, u8) {
        islamic::from_day_count(day_count)
    }

    fn days_in_month_of(year: i32, month: u8) -> u8 {
        islamic::days_in_month(year, month)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Persian
// ═══════════════════════════════════════════════════════════════════════════

date_type!(
    /// A Persian (Jalali) date. There is no year zero.
    #[derive(PartialOrd, Ord)]
    Persian,
    persian
);

impl Persian {
    /// Month lengths of this date's year.
    pub fn days_per_month_in_year(&self) -> [u8; 12] {
        persian::days_per_month_in_year(self.year)
    }
}

impl CalendarDate for Persian {
    const NAME: &'static str = "Persian Calendar";
    const EPOCH: DayCount = persian::EPOCH;
    const MONTH_NAMES: &'static [&'static str] = &PERSIAN_MONTHS;
    const WEEKDAY_NAMES: [&'static str; 7] = PERSIAN_WEEKDAYS;

    #[inline]
    fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self::new(year, month, day)
    }

    #[inline]
    fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    fn day(&self) -> u8 {
        self.day
    }

    fn ymd_to_day_count(year: i32, month: u8, day: u8) -> DayCount {
        persian::to_day_count(year, month, day)
    }

    fn day_count_to_ymd(day_count: DayCount) -> (i32, u8, u8) {
        persian::from_day_count(day_count)
    }

    fn days_in_month_of(year: i32, month: u8) -> u8 {
        persian::days_in_month(year, month)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Hebrew
// ═══════════════════════════════════════════════════════════════════════════

date_type!(
    /// A Hebrew date. Months are numbered from Nisan; the year begins on
    /// 1 Tishri (month 7).
    Hebrew,
    hebrew
);

impl Hebrew {
    /// Layout (start, length, month table) of this date's year.
    pub fn year_layout(&self) -> HebrewYear {
        HebrewYear::new(self.year)
    }

    /// Position of the month within the civil year, Tishri = 0.
    fn civil_month_position(&self) -> u8 {
        if self.month >= 7 {
            self.month - 7
        } else {
            self.month + 6
        }
    }
}

impl PartialOrd for Hebrew {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hebrew {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.civil_month_position(), self.day).cmp(&(
            other.year,
            other.civil_month_position(),
            other.day,
        ))
    }
}

impl CalendarDate for Hebrew {
    const NAME: &'static str = "Hebrew Calendar";
    const EPOCH: DayCount = hebrew::EPOCH;
    const MONTH_NAMES: &'static [&'static str] = &HEBREW_MONTHS;
    const WEEKDAY_NAMES: [&'static str; 7] = HEBREW_WEEKDAYS;

    #[inline]
    fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self::new(year, month, day)
    }

    #[inline]
    fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    fn day(&self) -> u8 {
        self.day
    }

    fn ymd_to_day_count(year: i32, month: u8, day: u8) -> DayCount {
        hebrew::to_day_count(year, month, day)
    }

    fn day_count_to_ymd(day_count: DayCount) -> (i32, u8, u8) {
        hebrew::from_day_count(day_count)
    }

    fn days_in_month_of(year: i32, month: u8) -> u8 {
        hebrew::days_in_month(year, month)
    }

    fn months_in_year_of(year: i32) -> u8 {
        hebrew::months_in_year(year)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for field lookups and validated construction.

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a 1-based month number is outside the calendar's range.
    #[error("month {month} is out of range 1..={max}")]
    InvalidMonth {
        /// The rejected month number.
        month: u8,
        /// Number of months in the year the lookup was made for.
        max: u8,
    },

    /// Returned when a weekday index is outside `0..=6`.
    #[error("weekday index {index} is out of range 0..=6")]
    InvalidWeekday {
        /// The rejected index.
        index: u8,
    },

    /// Returned when a day does not exist in the given month.
    #[error("day {day} is out of range 1..={max} for {calendar} {year}-{month}")]
    InvalidDay {
        /// Calendar the date was built in.
        calendar: &'static str,
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// The rejected day.
        day: u8,
        /// Length of the month.
        max: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_invalid_month() {
        let e = CalendarError::InvalidMonth { month: 0, max: 12 };
        assert_eq!(e.to_string(), "month 0 is out of range 1..=12");
    }

    #[test]
    fn test_error_invalid_weekday() {
        let e = CalendarError::InvalidWeekday { index: 7 };
        assert_eq!(e.to_string(), "weekday index 7 is out of range 0..=6");
    }

    #[test]
    fn test_error_invalid_day() {
        let e = CalendarError::InvalidDay {
            calendar: "Persian Calendar",
            year: 1402,
            month: 12,
            day: 30,
            max: 29,
        };
        assert_eq!(
            e.to_string(),
            "day 30 is out of range 1..=29 for Persian Calendar 1402-12"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Continuous day count on the Julian Day axis.
//!
//! [`DayCount`] is the pivot every calendar converts through.  It stores a
//! single [`Days`] quantity measured from the Julian Day origin (noon,
//! 1 January 4713 BCE, proleptic Julian).  Civil days start at the `.5`
//! mark, so `2 451 544.5` is the midnight that opens 2000-01-01.
//!
//! Every `f64` is a legal day count: nothing here can fail.  Calendar
//! algorithms see the day through [`DayCount::day_index`], which is clamped
//! to [`DayCount::MIN_DAY_INDEX`]`..=`[`DayCount::MAX_DAY_INDEX`] so that
//! every calendar's year still fits in an `i32`.

use chrono::{DateTime, NaiveDateTime, Utc};
use qtty::Days;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seconds in one civil day.
const SECONDS_PER_DAY: f64 = 86_400.0;

// ═══════════════════════════════════════════════════════════════════════════
// DayCount
// ═══════════════════════════════════════════════════════════════════════════

/// A point on the Julian Day axis.
///
/// `Copy` and layout-identical to `Days` (a single `f64`).  Values are
/// immutable apart from [`advance_one_day`](Self::advance_one_day) and the
/// compound-assignment operators.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct DayCount {
    quantity: Days,
}

impl DayCount {
    /// 1970-01-01T00:00:00 UTC (JD 2 440 587.5).
    pub const UNIX_EPOCH: Self = Self::new(2_440_587.5);

    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Lowest civil-day number handed to the calendar algorithms, about
    /// 1.37 billion years before the Julian Day origin.
    pub const MIN_DAY_INDEX: i64 = -500_000_000_000;

    /// Highest civil-day number handed to the calendar algorithms.
    pub const MAX_DAY_INDEX: i64 = 500_000_000_000;

    // ── constructors ──────────────────────────────────────────────────

    /// Wrap a raw Julian Day value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The current instant, read from the system clock.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Build from a proleptic Gregorian civil date and wall-clock time.
    ///
    /// The whole days land on the civil-midnight `.5` mark and the time of
    /// day is added as a fraction, so 1987-03-10T00:01 becomes
    /// `2 446 864.5 + 1/1440`.
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        let utc = datetime.and_utc();
        let seconds = utc.timestamp() as f64 + utc.timestamp_subsec_nanos() as f64 / 1e9;
        Self::UNIX_EPOCH + Days::new(seconds / SECONDS_PER_DAY)
    }

    /// Build from a `chrono::DateTime<Utc>`, using its UTC wall clock.
    #[inline]
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_naive(datetime.naive_utc())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Integer number of the civil day containing this instant,
    /// `floor(value - 0.5)`.
    ///
    /// All calendar algorithms work on this integer so that conversions are
    /// exact.  The result saturates at [`MIN_DAY_INDEX`](Self::MIN_DAY_INDEX)
    /// and [`MAX_DAY_INDEX`](Self::MAX_DAY_INDEX); `NaN` maps to day `0`.
    #[inline]
    pub fn day_index(&self) -> i64 {
        let index = (self.value() - 0.5).floor();
        if index.is_nan() {
            return 0;
        }
        index.clamp(Self::MIN_DAY_INDEX as f64, Self::MAX_DAY_INDEX as f64) as i64
    }

    /// The civil midnight opening day number `index`.
    #[inline]
    pub fn from_day_index(index: i64) -> Self {
        Self::new(index as f64 + 0.5)
    }

    /// Day of the week, `0` = Sunday through `6` = Saturday.
    ///
    /// Computed as `floor(value + 1.5) mod 7`, on the same saturated day
    /// number the calendars use.
    #[inline]
    pub fn weekday_index(&self) -> u8 {
        (self.day_index() + 2).rem_euclid(7) as u8
    }

    /// Truncate to the civil midnight that opens this day.
    ///
    /// Idempotent: `d.at_midnight().at_midnight() == d.at_midnight()`.
    #[inline]
    pub fn at_midnight(&self) -> Self {
        Self::from_day_index(self.day_index())
    }

    /// Move forward by exactly one day, in place.
    #[inline]
    pub fn advance_one_day(&mut self) {
        self.quantity += Days::new(1.0);
    }

    // ── chrono interop ────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds = (*self - Self::UNIX_EPOCH).value() * SECONDS_PER_DAY;
        if !seconds.is_finite() {
            return None;
        }
        let secs = seconds.floor();
        let nanos = ((seconds - secs) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs as i64, nanos)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for DayCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.value())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for DayCount {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DayCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for DayCount {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for DayCount {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for DayCount {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for DayCount {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for DayCount {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl From<Days> for DayCount {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<DayCount> for Days {
    #[inline]
    fn from(day_count: DayCount) -> Self {
        day_count.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

//! Time primitives
//!
//! Every span is measured in whole milliseconds, the same resolution a
//! browser clock exposes. Unit conversions floor toward negative infinity except
//! [`Elapsed::as_years`], which is fractional over a 365.25-day year.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
pub const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

/// Days in an average Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Days in an average month
pub const DAYS_PER_MONTH: f64 = 30.44;
pub const MS_PER_YEAR: f64 = DAYS_PER_YEAR * MS_PER_DAY as f64;

/// A signed span of time in milliseconds
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Elapsed(pub i64);

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed(0);

    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        Elapsed(millis)
    }

    #[inline]
    pub fn from_days(days: i64) -> Self {
        Elapsed(days.saturating_mul(MS_PER_DAY))
    }

    #[inline]
    pub fn from_weeks(weeks: i64) -> Self {
        Elapsed(weeks.saturating_mul(MS_PER_WEEK))
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_seconds(self) -> i64 {
        self.0.div_euclid(MS_PER_SECOND)
    }

    #[inline]
    pub fn as_minutes(self) -> i64 {
        self.as_seconds().div_euclid(60)
    }

    #[inline]
    pub fn as_hours(self) -> i64 {
        self.as_minutes().div_euclid(60)
    }

    #[inline]
    pub fn as_days(self) -> i64 {
        self.as_hours().div_euclid(24)
    }

    #[inline]
    pub fn as_weeks(self) -> i64 {
        self.as_days().div_euclid(7)
    }

    /// Fractional years over a 365.25-day year
    #[inline]
    pub fn as_years(self) -> f64 {
        self.0 as f64 / MS_PER_YEAR
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for Elapsed {
    type Output = Elapsed;

    #[inline]
    fn add(self, rhs: Elapsed) -> Self::Output {
        Elapsed(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Elapsed {
    type Output = Elapsed;

    #[inline]
    fn sub(self, rhs: Elapsed) -> Self::Output {
        Elapsed(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Debug for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Elapsed({}d {}ms)", self.as_days(), self.0.rem_euclid(MS_PER_DAY))
    }
}

/// Convert a day count to fractional years
#[inline]
pub fn days_to_years(days: i64) -> f64 {
    days as f64 / DAYS_PER_YEAR
}

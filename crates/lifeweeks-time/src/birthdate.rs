//! Birthdate parsing and validation
//!
//! A birthdate is valid when it parses, lies strictly before "now", and
//! implies an age of at most [`MAX_AGE_YEARS`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use lifeweeks_core::{Elapsed, LifeError, LifeResult, MAX_AGE_YEARS};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Clock;

/// A parsed birthdate, pinned to UTC
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthdate(DateTime<Utc>);

impl Birthdate {
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Birthdate(at)
    }

    /// Parse a birthdate.
    ///
    /// A bare `YYYY-MM-DD` date is midnight UTC. Timestamps with an offset
    /// are converted to UTC; timestamps without one are taken as UTC.
    pub fn parse(input: &str) -> LifeResult<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(LifeError::InvalidBirthdate("empty input".into()));
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| LifeError::InvalidBirthdate(s.to_string()))?;
            return Ok(Birthdate(Utc.from_utc_datetime(&midnight)));
        }

        if let Ok(at) = DateTime::parse_from_rfc3339(s) {
            return Ok(Birthdate(at.with_timezone(&Utc)));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Birthdate(Utc.from_utc_datetime(&naive)));
            }
        }

        Err(LifeError::InvalidBirthdate(s.to_string()))
    }

    #[inline]
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Calendar year of birth
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Signed time elapsed from birth until `now`
    #[inline]
    pub fn elapsed_until(&self, now: DateTime<Utc>) -> Elapsed {
        elapsed_between(self.0, now)
    }

    /// Fractional age in 365.25-day years
    #[inline]
    pub fn age_at(&self, now: DateTime<Utc>) -> f64 {
        self.elapsed_until(now).as_years()
    }

    /// Check the birthdate against `now`
    pub fn validate_at(&self, now: DateTime<Utc>) -> LifeResult<()> {
        if self.0 >= now {
            return Err(LifeError::BirthdateInFuture);
        }

        let years = self.age_at(now);
        if !(0.0..=MAX_AGE_YEARS).contains(&years) {
            return Err(LifeError::AgeOutOfRange { years });
        }

        Ok(())
    }
}

impl FromStr for Birthdate {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Birthdate::parse(s)
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.num_seconds_from_midnight() == 0 && self.0.nanosecond() == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%d"))
        } else {
            write!(f, "{}", self.0.to_rfc3339())
        }
    }
}

impl fmt::Debug for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Birthdate({})", self)
    }
}

impl Serialize for Birthdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthdate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Birthdate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Signed elapsed milliseconds between two instants
#[inline]
pub fn elapsed_between(from: DateTime<Utc>, to: DateTime<Utc>) -> Elapsed {
    Elapsed::from_millis(to.timestamp_millis().saturating_sub(from.timestamp_millis()))
}

/// Parse a birthdate and validate it against the clock
pub fn parse_and_validate(input: &str, clock: &dyn Clock) -> LifeResult<Birthdate> {
    let birthdate = Birthdate::parse(input)?;
    birthdate.validate_at(clock.now())?;
    Ok(birthdate)
}

/// Boolean form of [`parse_and_validate`]
pub fn is_valid_birthdate(input: &str, clock: &dyn Clock) -> bool {
    match parse_and_validate(input, clock) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(input, %err, "rejected birthdate");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_plain_date_is_utc_midnight() {
        let b = Birthdate::parse("1990-06-15").unwrap();
        assert_eq!(b.datetime(), at(1990, 6, 15));
        assert_eq!(b.year(), 1990);
        assert_eq!(b.to_string(), "1990-06-15");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let b = Birthdate::parse("1990-06-15T02:00:00+02:00").unwrap();
        assert_eq!(b.datetime(), at(1990, 6, 15));
    }

    #[test]
    fn test_parse_naive_timestamp() {
        let b = Birthdate::parse("1990-06-15T08:30").unwrap();
        assert_eq!(b.datetime(), Utc.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Birthdate::parse("not a date"),
            Err(LifeError::InvalidBirthdate(_))
        ));
        assert!(matches!(
            Birthdate::parse("   "),
            Err(LifeError::InvalidBirthdate(_))
        ));
        assert!(matches!(
            Birthdate::parse("2023-02-30"),
            Err(LifeError::InvalidBirthdate(_))
        ));
    }

    #[test]
    fn test_validate_requires_strict_past() {
        let now = at(2024, 1, 1);
        let b = Birthdate::from_datetime(now);
        assert_eq!(b.validate_at(now), Err(LifeError::BirthdateInFuture));

        let tomorrow = Birthdate::from_datetime(at(2024, 1, 2));
        assert_eq!(tomorrow.validate_at(now), Err(LifeError::BirthdateInFuture));
    }

    #[test]
    fn test_validate_age_bound() {
        let now = at(2024, 1, 1);
        assert!(Birthdate::from_datetime(at(1905, 1, 1)).validate_at(now).is_ok());
        assert!(matches!(
            Birthdate::from_datetime(at(1900, 1, 1)).validate_at(now),
            Err(LifeError::AgeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_is_valid_birthdate_uses_clock() {
        let clock = FixedClock::new(at(2024, 1, 1));
        assert!(is_valid_birthdate("1990-01-01", &clock));
        assert!(!is_valid_birthdate("2030-01-01", &clock));
        assert!(!is_valid_birthdate("", &clock));

        clock.set(at(2035, 1, 1));
        assert!(is_valid_birthdate("2030-01-01", &clock));
    }
}

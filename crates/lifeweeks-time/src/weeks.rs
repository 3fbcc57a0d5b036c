//! Week-number arithmetic relative to a birthdate
//!
//! Week 0 starts at the instant of birth. Instants before birth map to
//! negative week numbers (floor toward negative infinity).

use chrono::{DateTime, Utc};
use lifeweeks_core::MS_PER_WEEK;

use crate::{elapsed_between, Birthdate};

/// Zero-based week of life containing `target`
pub fn week_number(birth: &Birthdate, target: DateTime<Utc>) -> i64 {
    elapsed_between(birth.datetime(), target)
        .as_millis()
        .div_euclid(MS_PER_WEEK)
}

/// First instant of the given week of life.
///
/// Returns `None` when the result does not fit in a timestamp.
pub fn date_from_week_number(birth: &Birthdate, week: i64) -> Option<DateTime<Utc>> {
    let offset = week.checked_mul(MS_PER_WEEK)?;
    let millis = birth.datetime().timestamp_millis().checked_add(offset)?;
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn birth() -> Birthdate {
        Birthdate::parse("2000-01-01").unwrap()
    }

    #[test]
    fn test_week_zero_and_boundaries() {
        let b = birth();
        let start = b.datetime();

        assert_eq!(week_number(&b, start), 0);
        assert_eq!(week_number(&b, start + Duration::days(6)), 0);
        assert_eq!(week_number(&b, start + Duration::days(7)), 1);
        assert_eq!(week_number(&b, start + Duration::days(7) - Duration::milliseconds(1)), 0);
    }

    #[test]
    fn test_before_birth_is_negative() {
        let b = birth();
        assert_eq!(week_number(&b, b.datetime() - Duration::milliseconds(1)), -1);
        assert_eq!(week_number(&b, b.datetime() - Duration::days(7)), -1);
        assert_eq!(week_number(&b, b.datetime() - Duration::days(8)), -2);
    }

    #[test]
    fn test_date_from_week_number() {
        let b = birth();
        assert_eq!(
            date_from_week_number(&b, 52),
            Some(Utc.with_ymd_and_hms(2000, 12, 30, 0, 0, 0).unwrap())
        );
        assert_eq!(date_from_week_number(&b, i64::MAX), None);
    }

    proptest! {
        #[test]
        fn prop_week_start_maps_back(week in -10_000i64..10_000) {
            let b = birth();
            let start = date_from_week_number(&b, week).unwrap();
            prop_assert_eq!(week_number(&b, start), week);
        }
    }
}

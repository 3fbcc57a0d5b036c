//! Core life statistics

use chrono::{DateTime, Utc};
use lifeweeks_core::{
    LifeError, LifeResult, DAYS_PER_MONTH, MAX_LIFE_EXPECTANCY_YEARS, MIN_LIFE_EXPECTANCY_YEARS,
    WEEKS_PER_YEAR,
};
use lifeweeks_time::Birthdate;
use serde::Serialize;

/// Time lived measured in every unit, plus progress toward the horizon
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LifeStats {
    pub weeks_lived: u64,
    pub total_weeks: u64,
    pub days_lived: u64,
    /// Uncapped; exceeds 100 past the expected lifespan
    pub percent_lived: f64,
    pub years_lived: f64,
    pub months_lived: u64,
    pub hours_lived: u64,
    pub minutes_lived: u64,
    pub seconds_lived: u64,
}

impl LifeStats {
    /// Weeks left before the horizon, zero once it is passed
    pub fn weeks_remaining(&self) -> u64 {
        self.total_weeks.saturating_sub(self.weeks_lived)
    }
}

/// Reject a life expectancy outside the supported range
pub fn check_life_expectancy(years: u32) -> LifeResult<()> {
    if (MIN_LIFE_EXPECTANCY_YEARS..=MAX_LIFE_EXPECTANCY_YEARS).contains(&years) {
        Ok(())
    } else {
        Err(LifeError::InvalidLifeExpectancy(years))
    }
}

/// Compute life statistics for `birth` as of `now`.
///
/// Units are derived by successive floor division starting from whole
/// seconds, so `weeks_lived == floor(elapsed_ms / MS_PER_WEEK)`.
pub fn life_stats(
    birth: &Birthdate,
    now: DateTime<Utc>,
    life_expectancy_years: u32,
) -> LifeResult<LifeStats> {
    check_life_expectancy(life_expectancy_years)?;

    let elapsed = birth.elapsed_until(now);
    if elapsed.is_negative() {
        return Err(LifeError::BirthdateInFuture);
    }

    let seconds_lived = elapsed.as_seconds() as u64;
    let minutes_lived = seconds_lived / 60;
    let hours_lived = minutes_lived / 60;
    let days_lived = hours_lived / 24;
    let weeks_lived = days_lived / 7;
    let months_lived = (days_lived as f64 / DAYS_PER_MONTH).floor() as u64;
    let years_lived = lifeweeks_core::days_to_years(days_lived as i64);

    let total_weeks = u64::from(life_expectancy_years) * u64::from(WEEKS_PER_YEAR);
    let percent_lived = weeks_lived as f64 / total_weeks as f64 * 100.0;

    Ok(LifeStats {
        weeks_lived,
        total_weeks,
        days_lived,
        percent_lived,
        years_lived,
        months_lived,
        hours_lived,
        minutes_lived,
        seconds_lived,
    })
}

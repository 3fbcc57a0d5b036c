//! 10,000-hour mastery projection

use lifeweeks_core::{
    LifeError, LifeResult, LATE_STARTER_AGE, MASTERY_COMMITMENTS, MASTERY_HOURS, WEEKS_PER_YEAR,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MasteryStats {
    pub hours_per_week: f64,
    pub years_to_mastery: f64,
    pub age_at_mastery: f64,
}

/// Project when `MASTERY_HOURS` of practice is reached from `current_age`
pub fn mastery_stats(current_age: f64, hours_per_week: f64) -> LifeResult<MasteryStats> {
    if !hours_per_week.is_finite() || hours_per_week <= 0.0 {
        return Err(LifeError::InvalidHoursPerWeek(hours_per_week));
    }

    let hours_per_year = hours_per_week * f64::from(WEEKS_PER_YEAR);
    let years_to_mastery = MASTERY_HOURS / hours_per_year;

    Ok(MasteryStats {
        hours_per_week,
        years_to_mastery,
        age_at_mastery: current_age + years_to_mastery,
    })
}

/// Mastery age for someone who only starts at [`LATE_STARTER_AGE`]
pub fn late_starter_age_at_mastery(hours_per_week: f64) -> LifeResult<f64> {
    mastery_stats(LATE_STARTER_AGE, hours_per_week).map(|m| m.age_at_mastery)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MasteryRow {
    pub label: &'static str,
    #[serde(flatten)]
    pub stats: MasteryStats,
}

/// Projection for every preset weekly commitment
pub fn mastery_table(current_age: f64) -> Vec<MasteryRow> {
    MASTERY_COMMITMENTS
        .iter()
        .filter_map(|c| {
            mastery_stats(current_age, c.hours_per_week)
                .ok()
                .map(|stats| MasteryRow { label: c.label, stats })
        })
        .collect()
}

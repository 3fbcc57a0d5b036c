//! Natural world comparisons

use lifeweeks_core::{days_to_years, LUNAR_CYCLE_DAYS, SEASONS_PER_YEAR, SEQUOIA_LIFESPAN_YEARS};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NaturalStats {
    pub lunar_cycles: u64,
    pub seasons: u64,
    /// Share of a giant sequoia's lifespan already lived
    pub sequoia_lifespan_percent: f64,
}

pub fn natural_stats(days_lived: u64) -> NaturalStats {
    let years = days_to_years(days_lived as i64);

    NaturalStats {
        lunar_cycles: (days_lived as f64 / LUNAR_CYCLE_DAYS).round() as u64,
        seasons: (years * SEASONS_PER_YEAR).round() as u64,
        sequoia_lifespan_percent: years / SEQUOIA_LIFESPAN_YEARS * 100.0,
    }
}

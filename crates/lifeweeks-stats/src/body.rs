//! Body statistics

use lifeweeks_core::{
    days_to_years, BREATHS_PER_DAY, CELL_REPLACEMENT_YEARS, HEARTBEATS_PER_DAY,
    SLEEP_HOURS_PER_DAY,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BodyStats {
    pub heartbeats: u64,
    pub breaths: u64,
    pub sleep_hours: u64,
    /// Full cell-replacement cycles completed
    pub cell_replacements: u64,
}

pub fn body_stats(days_lived: u64) -> BodyStats {
    let days = days_lived as f64;

    BodyStats {
        heartbeats: (days * HEARTBEATS_PER_DAY).round() as u64,
        breaths: (days * BREATHS_PER_DAY).round() as u64,
        sleep_hours: (days * SLEEP_HOURS_PER_DAY).round() as u64,
        cell_replacements: (days_to_years(days_lived as i64) / CELL_REPLACEMENT_YEARS).floor()
            as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_in_days() {
        let one = body_stats(1);
        let thousand = body_stats(1_000);

        assert_eq!(one.heartbeats, 100_000);
        assert_eq!(one.breaths, 20_000);
        assert_eq!(one.sleep_hours, 8);
        assert_eq!(thousand.heartbeats, 1_000 * one.heartbeats);
        assert_eq!(thousand.breaths, 1_000 * one.breaths);
    }

    #[test]
    fn test_cell_replacements() {
        // 7 years of 365.25 days is 2556.75 days
        assert_eq!(body_stats(2_556).cell_replacements, 0);
        assert_eq!(body_stats(2_557).cell_replacements, 1);
        assert_eq!(body_stats(36_525).cell_replacements, 14);
    }
}

//! Societal context: population and humanity's births and deaths

use lifeweeks_core::{
    days_to_years, BIRTHS_PER_YEAR, CURRENT_WORLD_POPULATION, DEATHS_PER_YEAR,
    LIFETIME_PEOPLE_MET, PEOPLE_MET_LIFETIME_YEARS, POPULATION_BY_YEAR,
};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocietalStats {
    pub population_at_birth: u64,
    pub current_population: u64,
    pub people_met: u64,
    pub births_worldwide: u64,
    pub deaths_worldwide: u64,
}

/// World population in billions for the latest table year not after `year`.
///
/// Years before the table start report the first entry.
pub fn population_billions_at(year: i32) -> f64 {
    let (_, first) = POPULATION_BY_YEAR[0];
    POPULATION_BY_YEAR
        .iter()
        .take_while(|(y, _)| *y <= year)
        .last()
        .map_or(first, |(_, billions)| *billions)
}

pub fn societal_stats(birth_year: i32, days_lived: u64) -> SocietalStats {
    let years = days_to_years(days_lived as i64);

    SocietalStats {
        population_at_birth: (population_billions_at(birth_year) * 1e9).round() as u64,
        current_population: CURRENT_WORLD_POPULATION,
        people_met: (years / PEOPLE_MET_LIFETIME_YEARS * LIFETIME_PEOPLE_MET).round() as u64,
        births_worldwide: (years * BIRTHS_PER_YEAR).round() as u64,
        deaths_worldwide: (years * DEATHS_PER_YEAR).round() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_step_lookup() {
        assert_eq!(population_billions_at(1950), 2.5);
        assert_eq!(population_billions_at(1969), 3.0);
        assert_eq!(population_billions_at(1970), 3.7);
        assert_eq!(population_billions_at(2024), 7.8);
        assert_eq!(population_billions_at(2030), 8.0);
    }

    #[test]
    fn test_population_before_table() {
        assert_eq!(population_billions_at(1920), 2.5);
    }

    #[test]
    fn test_societal_counts() {
        let stats = societal_stats(1990, 36_525);

        assert_eq!(stats.population_at_birth, 5_300_000_000);
        assert_eq!(stats.current_population, 8_000_000_000);
        assert_eq!(stats.people_met, 100_000);
        assert_eq!(stats.births_worldwide, 14_000_000_000);
        assert_eq!(stats.deaths_worldwide, 6_000_000_000);
    }
}

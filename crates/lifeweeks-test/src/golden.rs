//! Golden scenarios - hand-checked results at a fixed instant

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lifeweeks_stats::{AllStats, StatsConfig, StatsEngine};
use lifeweeks_time::FixedClock;

/// One birthdate evaluated at one instant
#[derive(Clone, Copy, Debug)]
pub struct GoldenScenario {
    pub name: &'static str,
    pub birthdate: &'static str,
    /// RFC 3339 instant the clock is frozen at
    pub now: &'static str,
    pub life_expectancy_years: u32,
    pub days_lived: u64,
    pub weeks_lived: u64,
    pub total_weeks: u64,
}

pub const GOLDEN_SCENARIOS: &[GoldenScenario] = &[
    GoldenScenario {
        name: "millennium_baby",
        birthdate: "2000-01-01",
        now: "2024-06-15T00:00:00Z",
        life_expectancy_years: 80,
        days_lived: 8_932,
        weeks_lived: 1_276,
        total_weeks: 4_160,
    },
    GoldenScenario {
        name: "yesterday",
        birthdate: "2024-06-14",
        now: "2024-06-15T00:00:00Z",
        life_expectancy_years: 80,
        days_lived: 1,
        weeks_lived: 0,
        total_weeks: 4_160,
    },
    GoldenScenario {
        name: "exactly_one_week",
        birthdate: "2024-06-08",
        now: "2024-06-15T00:00:00Z",
        life_expectancy_years: 80,
        days_lived: 7,
        weeks_lived: 1,
        total_weeks: 4_160,
    },
    GoldenScenario {
        name: "one_second_short_of_a_week",
        birthdate: "2024-06-08T12:00:00Z",
        now: "2024-06-15T11:59:59Z",
        life_expectancy_years: 80,
        days_lived: 6,
        weeks_lived: 0,
        total_weeks: 4_160,
    },
    GoldenScenario {
        name: "leap_day",
        birthdate: "2000-02-29",
        now: "2024-02-29T00:00:00Z",
        life_expectancy_years: 80,
        days_lived: 8_766,
        weeks_lived: 1_252,
        total_weeks: 4_160,
    },
    GoldenScenario {
        name: "past_the_horizon",
        birthdate: "1930-01-01",
        now: "2024-06-15T00:00:00Z",
        life_expectancy_years: 80,
        days_lived: 34_499,
        weeks_lived: 4_928,
        total_weeks: 4_160,
    },
    GoldenScenario {
        name: "short_horizon",
        birthdate: "1990-05-01",
        now: "2024-06-15T00:00:00Z",
        life_expectancy_years: 50,
        days_lived: 12_464,
        weeks_lived: 1_780,
        total_weeks: 2_600,
    },
];

/// A field that disagreed with its golden value
#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Clone, Debug)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub stats: Option<AllStats>,
    pub error: Option<String>,
    pub mismatches: Vec<Mismatch>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.mismatches.is_empty()
    }
}

impl GoldenScenario {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.now)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Engine on a clock frozen at this scenario's instant
    pub fn engine(&self) -> Option<StatsEngine> {
        let clock = FixedClock::new(self.instant()?);
        let config = StatsConfig {
            life_expectancy_years: self.life_expectancy_years,
        };
        Some(StatsEngine::with_clock(config, Arc::new(clock)))
    }

    pub fn run(&self) -> ScenarioOutcome {
        let mut outcome = ScenarioOutcome {
            name: self.name,
            stats: None,
            error: None,
            mismatches: Vec::new(),
        };

        let Some(engine) = self.engine() else {
            outcome.error = Some(format!("bad instant '{}'", self.now));
            return outcome;
        };
        let stats = match engine
            .parse_birthdate(self.birthdate)
            .and_then(|birth| engine.compute(&birth))
        {
            Ok(stats) => stats,
            Err(err) => {
                outcome.error = Some(err.to_string());
                return outcome;
            }
        };

        let mut check = |field: &'static str, expected: u64, actual: u64| {
            if expected != actual {
                outcome.mismatches.push(Mismatch {
                    field,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        };
        check("days_lived", self.days_lived, stats.life.days_lived);
        check("weeks_lived", self.weeks_lived, stats.life.weeks_lived);
        check("total_weeks", self.total_weeks, stats.life.total_weeks);

        outcome.stats = Some(stats);
        outcome
    }
}

/// Run every golden scenario
pub fn run_golden() -> Vec<ScenarioOutcome> {
    GOLDEN_SCENARIOS.iter().map(GoldenScenario::run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instants_parse() {
        for scenario in GOLDEN_SCENARIOS {
            assert!(scenario.instant().is_some(), "{}", scenario.name);
        }
    }

    #[test]
    fn test_wrong_expectation_reports_mismatch() {
        let scenario = GoldenScenario {
            weeks_lived: 1,
            ..GOLDEN_SCENARIOS[0]
        };
        let outcome = scenario.run();
        assert!(!outcome.passed());
        assert_eq!(
            outcome.mismatches,
            vec![Mismatch {
                field: "weeks_lived",
                expected: "1".to_string(),
                actual: "1276".to_string(),
            }]
        );
    }

    #[test]
    fn test_future_birthdate_is_an_error() {
        let scenario = GoldenScenario {
            birthdate: "2030-01-01",
            ..GOLDEN_SCENARIOS[0]
        };
        let outcome = scenario.run();
        assert_eq!(outcome.error.as_deref(), Some("Birthdate must be in the past"));
    }
}

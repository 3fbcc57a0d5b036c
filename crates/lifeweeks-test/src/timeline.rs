//! Timeline Simulator - walks a fixed clock forward through a life
//!
//! At every step the simulator recomputes the statistics and the grid and
//! checks that:
//! - weeks and days lived never decrease
//! - weeks lived is days lived divided by seven
//! - grid counts cover every week, with one current week until the horizon

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use lifeweeks_core::{LifeResult, MS_PER_DAY};
use lifeweeks_grid::WeekGrid;
use lifeweeks_stats::{StatsConfig, StatsEngine};
use lifeweeks_time::{Birthdate, Clock, FixedClock};

/// Simulation configuration
#[derive(Clone, Debug)]
pub struct TimelineConfig {
    /// Clock advance per step
    pub step: Duration,
    pub steps: usize,
    pub life_expectancy_years: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            step: Duration::from_secs(86_400),
            steps: 1_000,
            life_expectancy_years: 80,
        }
    }
}

impl TimelineConfig {
    /// Daily steps across a little over two years
    pub fn daily() -> Self {
        Self::default()
    }

    /// Irregular steps that land mid-day and mid-week
    pub fn jittery() -> Self {
        TimelineConfig {
            step: Duration::from_secs(86_400 * 3 + 3_600 * 7 + 13),
            steps: 2_000,
            ..Default::default()
        }
    }

    /// Whole-year steps through and past a short horizon
    pub fn lifetime() -> Self {
        TimelineConfig {
            step: Duration::from_secs(86_400 * 365),
            steps: 30,
            life_expectancy_years: 20,
        }
    }
}

/// Statistics observed at one step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSample {
    pub at: DateTime<Utc>,
    pub weeks_lived: u64,
    pub days_lived: u64,
    pub percent_lived: f64,
}

#[derive(Clone, Debug, Default)]
pub struct TimelineReport {
    pub samples: Vec<TimelineSample>,
    pub violations: Vec<String>,
}

impl TimelineReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn last(&self) -> Option<&TimelineSample> {
        self.samples.last()
    }
}

pub struct TimelineSimulator {
    config: TimelineConfig,
    clock: FixedClock,
    engine: StatsEngine,
    birth: Birthdate,
}

impl TimelineSimulator {
    /// Start the clock one millisecond after `birth`
    pub fn new(birth: Birthdate, config: TimelineConfig) -> Self {
        let clock = FixedClock::new(birth.datetime());
        clock.advance(Duration::from_millis(1));

        let engine = StatsEngine::with_clock(
            StatsConfig {
                life_expectancy_years: config.life_expectancy_years,
            },
            Arc::new(clock.clone()),
        );

        TimelineSimulator {
            config,
            clock,
            engine,
            birth,
        }
    }

    pub fn clock(&self) -> &FixedClock {
        &self.clock
    }

    fn sample(&self) -> LifeResult<(TimelineSample, WeekGrid)> {
        let stats = self.engine.compute(&self.birth)?;
        let grid = WeekGrid::new(stats.life.weeks_lived, stats.life.total_weeks);
        let sample = TimelineSample {
            at: stats.computed_at,
            weeks_lived: stats.life.weeks_lived,
            days_lived: stats.life.days_lived,
            percent_lived: stats.life.percent_lived,
        };
        Ok((sample, grid))
    }

    fn check(
        &self,
        prev: Option<&TimelineSample>,
        sample: &TimelineSample,
        grid: &WeekGrid,
    ) -> Vec<String> {
        let mut violations = Vec::new();
        let at = sample.at;

        if let Some(prev) = prev {
            if sample.weeks_lived < prev.weeks_lived {
                violations.push(format!(
                    "{at}: weeks went back {} -> {}",
                    prev.weeks_lived, sample.weeks_lived
                ));
            }
            if sample.days_lived < prev.days_lived {
                violations.push(format!(
                    "{at}: days went back {} -> {}",
                    prev.days_lived, sample.days_lived
                ));
            }
            let max_days = self.config.step.as_millis() as u64 / MS_PER_DAY as u64 + 1;
            if sample.days_lived.saturating_sub(prev.days_lived) > max_days {
                violations.push(format!("{at}: days jumped by more than {max_days}"));
            }
        }

        if sample.weeks_lived != sample.days_lived / 7 {
            violations.push(format!(
                "{at}: {} weeks disagrees with {} days",
                sample.weeks_lived, sample.days_lived
            ));
        }

        let counts = grid.counts();
        if counts.past + counts.current + counts.future != grid.total_weeks() {
            violations.push(format!("{at}: grid counts {counts:?} do not cover the grid"));
        }
        let expect_current = u64::from(sample.weeks_lived < grid.total_weeks());
        if counts.current != expect_current {
            violations.push(format!("{at}: {} current weeks", counts.current));
        }

        let expected_percent = sample.weeks_lived as f64 / grid.total_weeks() as f64 * 100.0;
        if (sample.percent_lived - expected_percent).abs() > 1e-9 {
            violations.push(format!(
                "{at}: percent {} != {expected_percent}",
                sample.percent_lived
            ));
        }

        violations
    }

    pub fn run(&mut self) -> TimelineReport {
        let mut report = TimelineReport::default();

        for _ in 0..self.config.steps {
            match self.sample() {
                Ok((sample, grid)) => {
                    let violations = self.check(report.samples.last(), &sample, &grid);
                    report.violations.extend(violations);
                    report.samples.push(sample);
                }
                Err(err) => {
                    report.violations.push(format!("{}: {err}", self.clock.now()));
                    break;
                }
            }
            self.clock.advance(self.config.step);
        }

        report
    }
}

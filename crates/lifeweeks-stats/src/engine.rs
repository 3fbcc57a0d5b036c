//! Stats Engine - samples the clock once and runs every calculator

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lifeweeks_core::{LifeResult, LIFE_EXPECTANCY_YEARS};
use lifeweeks_time::{Birthdate, Clock, SystemClock};
use serde::Serialize;

use crate::{
    body_stats, check_life_expectancy, cosmic_stats, life_stats, mastery_stats, mastery_table,
    natural_stats, societal_stats, weekly_time_budget, BodyStats, CosmicStats, LifeStats,
    MasteryRow, MasteryStats, NaturalStats, SocietalStats, WeeklyTimeBudget,
};

/// Stats Engine configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsConfig {
    /// Horizon of the week grid, in years
    pub life_expectancy_years: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            life_expectancy_years: LIFE_EXPECTANCY_YEARS,
        }
    }
}

impl StatsConfig {
    pub fn with_life_expectancy(life_expectancy_years: u32) -> LifeResult<Self> {
        let config = StatsConfig {
            life_expectancy_years,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LifeResult<()> {
        check_life_expectancy(self.life_expectancy_years)
    }
}

/// Every statistic for one birthdate at one instant
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AllStats {
    pub birthdate: Birthdate,
    pub computed_at: DateTime<Utc>,
    pub life: LifeStats,
    pub cosmic: CosmicStats,
    pub body: BodyStats,
    pub societal: SocietalStats,
    pub natural: NaturalStats,
    pub weekly_time: WeeklyTimeBudget,
}

/// Compute every statistic for `birth` at `now` without validation
pub fn all_stats_at(
    birth: &Birthdate,
    now: DateTime<Utc>,
    life_expectancy_years: u32,
) -> LifeResult<AllStats> {
    let life = life_stats(birth, now, life_expectancy_years)?;
    let days = life.days_lived;

    Ok(AllStats {
        birthdate: *birth,
        computed_at: now,
        life,
        cosmic: cosmic_stats(days),
        body: body_stats(days),
        societal: societal_stats(birth.year(), days),
        natural: natural_stats(days),
        weekly_time: weekly_time_budget(),
    })
}

/// Stats Engine - validates birthdates and assembles [`AllStats`]
pub struct StatsEngine {
    clock: Arc<dyn Clock>,
    config: StatsConfig,
}

impl StatsEngine {
    /// Create an engine on the system clock with default configuration
    pub fn new() -> Self {
        Self::with_clock(StatsConfig::default(), Arc::new(SystemClock))
    }

    pub fn with_config(config: StatsConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: StatsConfig, clock: Arc<dyn Clock>) -> Self {
        StatsEngine { clock, config }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Parse and validate a birthdate against the engine clock
    pub fn parse_birthdate(&self, input: &str) -> LifeResult<Birthdate> {
        lifeweeks_time::parse_and_validate(input, self.clock.as_ref())
    }

    /// Compute every statistic using the configured life expectancy
    pub fn compute(&self, birth: &Birthdate) -> LifeResult<AllStats> {
        self.compute_with(birth, self.config.life_expectancy_years)
    }

    /// Compute every statistic with an overriding life expectancy
    pub fn compute_with(&self, birth: &Birthdate, life_expectancy_years: u32) -> LifeResult<AllStats> {
        let now = self.clock.now();
        birth.validate_at(now)?;

        let stats = all_stats_at(birth, now, life_expectancy_years)?;
        tracing::debug!(
            birthdate = %birth,
            weeks_lived = stats.life.weeks_lived,
            total_weeks = stats.life.total_weeks,
            percent_lived = stats.life.percent_lived,
            "computed life stats"
        );
        Ok(stats)
    }

    /// Current fractional age
    pub fn age_of(&self, birth: &Birthdate) -> f64 {
        birth.age_at(self.clock.now())
    }

    /// Mastery projection from the current age
    pub fn mastery(&self, birth: &Birthdate, hours_per_week: f64) -> LifeResult<MasteryStats> {
        birth.validate_at(self.clock.now())?;
        mastery_stats(self.age_of(birth), hours_per_week)
    }

    /// Mastery projection for every preset commitment
    pub fn mastery_presets(&self, birth: &Birthdate) -> LifeResult<Vec<MasteryRow>> {
        birth.validate_at(self.clock.now())?;
        Ok(mastery_table(self.age_of(birth)))
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Two-step birthdate wizard
//!
//! The session starts on [`Step::EnterBirthdate`]. A valid submission stores
//! the birthdate with its statistics and moves to [`Step::Results`]; `reset`
//! goes back to the start.

use std::sync::Arc;

use lifeweeks_core::LifeError;
use lifeweeks_stats::{AllStats, StatsEngine};
use lifeweeks_time::Birthdate;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    EnterBirthdate,
    Results,
}

/// Rejected submissions, worded for the person typing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Please enter a birthdate")]
    Empty,

    #[error("Please enter a valid birthdate")]
    Invalid(#[source] LifeError),
}

/// Wizard state for one person
pub struct Session {
    engine: Arc<StatsEngine>,
    step: Step,
    birthdate: Option<Birthdate>,
    stats: Option<AllStats>,
}

impl Session {
    pub fn new(engine: Arc<StatsEngine>) -> Self {
        Session {
            engine,
            step: Step::EnterBirthdate,
            birthdate: None,
            stats: None,
        }
    }

    /// Start from a prefilled birthdate; an invalid one is dropped
    pub fn with_birthdate(engine: Arc<StatsEngine>, input: &str) -> Self {
        let mut session = Self::new(engine);
        session.set_birthdate(input);
        session
    }

    #[inline]
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn birthdate(&self) -> Option<&Birthdate> {
        self.birthdate.as_ref()
    }

    pub fn stats(&self) -> Option<&AllStats> {
        self.stats.as_ref()
    }

    pub fn engine(&self) -> &Arc<StatsEngine> {
        &self.engine
    }

    /// True once a valid birthdate has been accepted
    pub fn is_valid(&self) -> bool {
        self.birthdate.is_some()
    }

    /// Validate `input`, compute its statistics and move to the results step
    pub fn submit(&mut self, input: &str) -> Result<&AllStats, SubmitError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SubmitError::Empty);
        }

        let birth = self
            .engine
            .parse_birthdate(input)
            .map_err(SubmitError::Invalid)?;
        let stats = self.engine.compute(&birth).map_err(SubmitError::Invalid)?;

        tracing::info!(birthdate = %birth, weeks_lived = stats.life.weeks_lived, "birthdate accepted");
        self.birthdate = Some(birth);
        self.step = Step::Results;
        Ok(self.stats.insert(stats))
    }

    /// Like `submit`, but invalid input leaves the session untouched
    pub fn set_birthdate(&mut self, input: &str) -> bool {
        match self.submit(input) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(input, error = %err, "ignoring birthdate");
                false
            }
        }
    }

    /// Recompute statistics for the stored birthdate at the current instant
    pub fn refresh(&mut self) -> Option<&AllStats> {
        let birth = self.birthdate?;
        match self.engine.compute(&birth) {
            Ok(stats) => Some(self.stats.insert(stats)),
            Err(err) => {
                tracing::warn!(birthdate = %birth, error = %err, "refresh failed");
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.step = Step::EnterBirthdate;
        self.birthdate = None;
        self.stats = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lifeweeks_stats::StatsConfig;
    use lifeweeks_time::FixedClock;

    fn engine() -> Arc<StatsEngine> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
        Arc::new(StatsEngine::with_clock(StatsConfig::default(), Arc::new(clock)))
    }

    #[test]
    fn test_starts_on_entry_step() {
        let session = Session::new(engine());
        assert_eq!(session.step(), Step::EnterBirthdate);
        assert!(session.stats().is_none());
        assert!(!session.is_valid());
    }

    #[test]
    fn test_empty_input() {
        let mut session = Session::new(engine());
        let err = session.submit("   ").unwrap_err();
        assert_eq!(err, SubmitError::Empty);
        assert_eq!(err.to_string(), "Please enter a birthdate");
    }

    #[test]
    fn test_invalid_input() {
        let mut session = Session::new(engine());
        for input in ["not a date", "2030-01-01", "1850-01-01"] {
            let err = session.submit(input).unwrap_err();
            assert!(matches!(err, SubmitError::Invalid(_)), "{input}");
            assert_eq!(err.to_string(), "Please enter a valid birthdate");
        }
        assert_eq!(session.step(), Step::EnterBirthdate);
    }

    #[test]
    fn test_submit_then_reset() {
        let mut session = Session::new(engine());
        let weeks = session.submit("2000-01-01").unwrap().life.weeks_lived;
        assert_eq!(weeks, 1276);
        assert_eq!(session.step(), Step::Results);
        assert_eq!(session.birthdate().unwrap().year(), 2000);

        session.reset();
        assert_eq!(session.step(), Step::EnterBirthdate);
        assert!(session.birthdate().is_none());
        assert!(session.stats().is_none());
    }

    #[test]
    fn test_set_birthdate_ignores_invalid() {
        let mut session = Session::new(engine());
        assert!(session.set_birthdate("1990-05-01"));
        assert!(!session.set_birthdate("garbage"));
        assert_eq!(session.birthdate().unwrap().year(), 1990);
        assert_eq!(session.step(), Step::Results);
    }

    #[test]
    fn test_initial_birthdate() {
        let session = Session::with_birthdate(engine(), "1985-03-10");
        assert_eq!(session.step(), Step::Results);
        assert!(session.stats().is_some());

        let session = Session::with_birthdate(engine(), "3000-01-01");
        assert_eq!(session.step(), Step::EnterBirthdate);
        assert!(session.birthdate().is_none());
    }

    #[test]
    fn test_refresh_follows_clock() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
        let engine = Arc::new(StatsEngine::with_clock(
            StatsConfig::default(),
            Arc::new(clock.clone()),
        ));
        let mut session = Session::new(engine);
        let before = session.submit("2000-01-01").unwrap().life.weeks_lived;

        clock.advance(std::time::Duration::from_secs(14 * 86_400));
        let after = session.refresh().unwrap().life.weeks_lived;
        assert_eq!(after, before + 2);
    }
}

//! Birthdate Fuzzer - random input against the validation rules
//!
//! Each generated input has a known category. The fuzzer checks that the
//! engine classifies it the same way and that the wizard session agrees
//! with `is_valid_birthdate`.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use lifeweeks_core::LifeError;
use lifeweeks_runtime::Session;
use lifeweeks_stats::{StatsConfig, StatsEngine};
use lifeweeks_time::{is_valid_birthdate, FixedClock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzConfig {
    pub cases: usize,
    /// Instant the clock is frozen at
    pub now: DateTime<Utc>,
    pub seed: u64,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        FuzzConfig {
            cases: 1_000,
            now: Utc
                .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
            seed: 42,
        }
    }
}

impl FuzzConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzConfig {
            cases: 200,
            ..Default::default()
        }
    }

    /// Heavy fuzzing for thorough testing
    pub fn heavy() -> Self {
        FuzzConfig {
            cases: 20_000,
            ..Default::default()
        }
    }
}

/// What a generated input should be judged as
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Valid,
    Future,
    TooOld,
    /// Well-formed but not a calendar date
    Impossible,
    /// Random characters; only consistency is checked
    Garbage,
}

impl InputKind {
    fn accepts(self, result: &Result<(), LifeError>) -> bool {
        match (self, result) {
            (InputKind::Valid, Ok(())) => true,
            (InputKind::Future, Err(LifeError::BirthdateInFuture)) => true,
            (InputKind::TooOld, Err(LifeError::AgeOutOfRange { .. })) => true,
            (InputKind::Impossible, Err(LifeError::InvalidBirthdate(_))) => true,
            (InputKind::Garbage, _) => true,
            _ => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FuzzCase {
    pub input: String,
    pub kind: InputKind,
}

#[derive(Clone, Debug, Default)]
pub struct FuzzReport {
    pub cases: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub violations: Vec<String>,
}

impl FuzzReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

const GARBAGE_CHARS: &[u8] = b"0123456789-:T+Z ./abcxyz";

pub struct BirthdateFuzzer {
    config: FuzzConfig,
    engine: Arc<StatsEngine>,
    clock: FixedClock,
    rng: StdRng,
}

impl BirthdateFuzzer {
    pub fn new(config: FuzzConfig) -> Self {
        let clock = FixedClock::new(config.now);
        let engine = Arc::new(StatsEngine::with_clock(
            StatsConfig::default(),
            Arc::new(clock.clone()),
        ));
        let rng = StdRng::seed_from_u64(config.seed);

        BirthdateFuzzer {
            config,
            engine,
            clock,
            rng,
        }
    }

    fn date_days_from_now(&self, days: i64) -> String {
        (self.config.now + Duration::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    /// Generate one input of a random category
    pub fn generate(&mut self) -> FuzzCase {
        let kind = match self.rng.gen_range(0..5) {
            0 => InputKind::Valid,
            1 => InputKind::Future,
            2 => InputKind::TooOld,
            3 => InputKind::Impossible,
            _ => InputKind::Garbage,
        };

        let input = match kind {
            InputKind::Valid => {
                let days = self.rng.gen_range(1..119 * 365);
                self.date_days_from_now(-days)
            }
            InputKind::Future => {
                let days = self.rng.gen_range(1..3_650);
                self.date_days_from_now(days)
            }
            InputKind::TooOld => {
                let days = self.rng.gen_range(121 * 366..200 * 365);
                self.date_days_from_now(-days)
            }
            InputKind::Impossible => {
                let year = self.rng.gen_range(1950..2020);
                match self.rng.gen_range(0..3) {
                    0 => format!("{year}-13-01"),
                    1 => format!("{year}-02-30"),
                    _ => format!("{year}-04-31"),
                }
            }
            InputKind::Garbage => {
                let len = self.rng.gen_range(0..20);
                (0..len)
                    .map(|_| GARBAGE_CHARS[self.rng.gen_range(0..GARBAGE_CHARS.len())] as char)
                    .collect()
            }
        };

        FuzzCase { input, kind }
    }

    fn check(&self, case: &FuzzCase, report: &mut FuzzReport) {
        let result = self.engine.parse_birthdate(&case.input).map(|_| ());
        if !case.kind.accepts(&result) {
            report
                .violations
                .push(format!("{:?} input '{}' judged {:?}", case.kind, case.input, result));
        }

        let quick = is_valid_birthdate(&case.input, &self.clock);
        let mut session = Session::new(Arc::clone(&self.engine));
        let submitted = session.submit(&case.input).is_ok();
        if quick != submitted {
            report.violations.push(format!(
                "input '{}': is_valid_birthdate={quick} but session accepted={submitted}",
                case.input
            ));
        }

        if result.is_ok() {
            report.accepted += 1;
        } else {
            report.rejected += 1;
        }
    }

    pub fn run(&mut self) -> FuzzReport {
        let mut report = FuzzReport::default();
        for _ in 0..self.config.cases {
            let case = self.generate();
            self.check(&case, &mut report);
            report.cases += 1;
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_inputs() {
        let mut a = BirthdateFuzzer::new(FuzzConfig::light());
        let mut b = BirthdateFuzzer::new(FuzzConfig::light());
        for _ in 0..50 {
            assert_eq!(a.generate().input, b.generate().input);
        }
    }

    #[test]
    fn test_kind_acceptance() {
        assert!(InputKind::Valid.accepts(&Ok(())));
        assert!(!InputKind::Valid.accepts(&Err(LifeError::BirthdateInFuture)));
        assert!(InputKind::Garbage.accepts(&Err(LifeError::InvalidBirthdate("x".into()))));
    }
}

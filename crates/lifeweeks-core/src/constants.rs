//! Statistical constants
//!
//! Every derived statistic is a linear function of time lived scaled by one
//! of these rates.

// Life expectancy

pub const LIFE_EXPECTANCY_YEARS: u32 = 80;
pub const WEEKS_PER_YEAR: u32 = 52;
pub const LIFE_EXPECTANCY_WEEKS: u32 = LIFE_EXPECTANCY_YEARS * WEEKS_PER_YEAR;

/// Oldest plausible age accepted for a birthdate
pub const MAX_AGE_YEARS: f64 = 120.0;

/// Accepted life expectancy range for configuration
pub const MIN_LIFE_EXPECTANCY_YEARS: u32 = 1;
pub const MAX_LIFE_EXPECTANCY_YEARS: u32 = 150;

// Cosmic

/// ~107,000 km/hour around the Sun
pub const EARTH_ORBITAL_SPEED_KM_PER_DAY: f64 = 2_571_000.0;
/// Solar system speed through the Milky Way
pub const SOLAR_SYSTEM_SPEED_KM_PER_HOUR: f64 = 828_000.0;
pub const UNIVERSE_AGE_YEARS: f64 = 13_800_000_000.0;
pub const OBSERVABLE_UNIVERSE_DIAMETER_LY: f64 = 93_000_000_000.0;

// Natural world

pub const LUNAR_CYCLE_DAYS: f64 = 29.53;
pub const SEASONS_PER_YEAR: f64 = 4.0;
pub const SEQUOIA_LIFESPAN_YEARS: f64 = 3_000.0;

// Body

pub const HEARTBEATS_PER_DAY: f64 = 100_000.0;
pub const BREATHS_PER_DAY: f64 = 20_000.0;
pub const SLEEP_HOURS_PER_DAY: f64 = 8.0;
/// Most cells are replaced every 7-10 years; the lower bound is used
pub const CELL_REPLACEMENT_YEARS: f64 = 7.0;

// Population

pub const CURRENT_WORLD_POPULATION: u64 = 8_000_000_000;
pub const BIRTHS_PER_YEAR: f64 = 140_000_000.0;
pub const DEATHS_PER_YEAR: f64 = 60_000_000.0;
pub const LIFETIME_PEOPLE_MET: f64 = 80_000.0;
/// Lifetime over which [`LIFETIME_PEOPLE_MET`] is spread
pub const PEOPLE_MET_LIFETIME_YEARS: f64 = 80.0;

/// World population in billions by year, ascending
pub const POPULATION_BY_YEAR: [(i32, f64); 9] = [
    (1950, 2.5),
    (1960, 3.0),
    (1970, 3.7),
    (1980, 4.4),
    (1990, 5.3),
    (2000, 6.1),
    (2010, 6.9),
    (2020, 7.8),
    (2025, 8.0),
];

// Weekly time

pub const HOURS_PER_WEEK: u32 = 24 * 7;
pub const WORK_HOURS_PER_WEEK: u32 = 40;
pub const COMPOUND_YEARS: u32 = 3;

// Mastery

pub const MASTERY_HOURS: f64 = 10_000.0;
/// Starting age used for the "someone starting later" comparison
pub const LATE_STARTER_AGE: f64 = 30.0;

/// A weekly practice commitment toward mastery
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasteryCommitment {
    pub hours_per_week: f64,
    pub label: &'static str,
}

pub const MASTERY_COMMITMENTS: [MasteryCommitment; 5] = [
    MasteryCommitment { hours_per_week: 1.0, label: "1 hour/week" },
    MasteryCommitment { hours_per_week: 5.0, label: "5 hours/week" },
    MasteryCommitment { hours_per_week: 10.0, label: "10 hours/week" },
    MasteryCommitment { hours_per_week: 20.0, label: "20 hours/week" },
    MasteryCommitment { hours_per_week: 40.0, label: "40 hours/week (full-time)" },
];

// Income

/// Yearly income every stream in the breakdown approximates
pub const INCOME_TARGET_PER_YEAR: u64 = 100_000;

/// How often an income stream pays out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncomeCadence {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl IncomeCadence {
    /// Payout periods in one year
    pub fn periods_per_year(self) -> u64 {
        match self {
            IncomeCadence::Daily => 365,
            IncomeCadence::Weekly => WEEKS_PER_YEAR as u64,
            IncomeCadence::Monthly => 12,
            IncomeCadence::Quarterly => 4,
        }
    }
}

/// One way of reaching the yearly income target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncomeStream {
    pub description: &'static str,
    /// Price in whole dollars per unit
    pub unit_price: u64,
    /// Units sold (customers, clients, sales or hours) per period
    pub units_per_period: u64,
    pub cadence: IncomeCadence,
}

impl IncomeStream {
    pub fn annual_revenue(&self) -> u64 {
        self.unit_price * self.units_per_period * self.cadence.periods_per_year()
    }
}

pub const INCOME_STREAMS: [IncomeStream; 5] = [
    IncomeStream {
        description: "215 customers at $39/month",
        unit_price: 39,
        units_per_period: 215,
        cadence: IncomeCadence::Monthly,
    },
    IncomeStream {
        description: "40 clients/quarter at $625 each",
        unit_price: 625,
        units_per_period: 40,
        cadence: IncomeCadence::Quarterly,
    },
    IncomeStream {
        description: "10 sales/day at $27 each",
        unit_price: 27,
        units_per_period: 10,
        cadence: IncomeCadence::Daily,
    },
    IncomeStream {
        description: "10 hours/week at $195/hour",
        unit_price: 195,
        units_per_period: 10,
        cadence: IncomeCadence::Weekly,
    },
    IncomeStream {
        description: "2 sales/day at $135 each",
        unit_price: 135,
        units_per_period: 2,
        cadence: IncomeCadence::Daily,
    },
];

//! Weekly time budget and the income breakdown

use lifeweeks_core::{
    IncomeStream, COMPOUND_YEARS, HOURS_PER_WEEK, INCOME_STREAMS, INCOME_TARGET_PER_YEAR,
    SLEEP_HOURS_PER_DAY, WEEKS_PER_YEAR, WORK_HOURS_PER_WEEK,
};
use serde::Serialize;

/// Hours in a week after sleep and a standard work week
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WeeklyTimeBudget {
    pub total_hours: u32,
    pub sleep_hours: u32,
    pub work_hours: u32,
    pub remaining_hours: u32,
    pub yearly_remaining: u32,
    pub three_year_remaining: u32,
}

pub fn weekly_time_budget() -> WeeklyTimeBudget {
    let total_hours = HOURS_PER_WEEK;
    let sleep_hours = SLEEP_HOURS_PER_DAY as u32 * 7;
    let work_hours = WORK_HOURS_PER_WEEK;
    let remaining_hours = total_hours - sleep_hours - work_hours;
    let yearly_remaining = remaining_hours * WEEKS_PER_YEAR;

    WeeklyTimeBudget {
        total_hours,
        sleep_hours,
        work_hours,
        remaining_hours,
        yearly_remaining,
        three_year_remaining: yearly_remaining * COMPOUND_YEARS,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IncomeLine {
    pub description: &'static str,
    pub annual_revenue: u64,
}

impl From<&IncomeStream> for IncomeLine {
    fn from(stream: &IncomeStream) -> Self {
        IncomeLine {
            description: stream.description,
            annual_revenue: stream.annual_revenue(),
        }
    }
}

/// Several independent ways to reach the yearly target
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IncomeBreakdown {
    pub target_per_year: u64,
    pub streams: Vec<IncomeLine>,
}

pub fn income_breakdown() -> IncomeBreakdown {
    IncomeBreakdown {
        target_per_year: INCOME_TARGET_PER_YEAR,
        streams: INCOME_STREAMS.iter().map(IncomeLine::from).collect(),
    }
}

//! Life in Weeks Stats - derived statistics over time lived
//!
//! Every calculator is a pure function of days (or years) lived scaled by a
//! constant from `lifeweeks-core`:
//! - Life: weeks, days and percent of expected lifespan
//! - Cosmic: distance traveled through space, share of the universe's age
//! - Body: heartbeats, breaths, sleep
//! - Societal: population context, births and deaths since birth
//! - Natural: lunar cycles, seasons, sequoia lifespan
//! - Budget: weekly waking hours and the income breakdown
//! - Mastery: the 10,000-hour projection
//!
//! [`StatsEngine`] samples the clock once and runs all of them.

pub mod body;
pub mod budget;
pub mod cosmic;
pub mod engine;
pub mod life;
pub mod mastery;
pub mod natural;
pub mod societal;

pub use body::*;
pub use budget::*;
pub use cosmic::*;
pub use engine::*;
pub use life::*;
pub use mastery::*;
pub use natural::*;
pub use societal::*;

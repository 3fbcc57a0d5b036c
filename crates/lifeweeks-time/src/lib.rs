//! Life in Weeks Time - clocks and calendar arithmetic
//!
//! This crate implements:
//! - A `Clock` seam so every computation samples "now" exactly once
//! - Birthdate parsing and validation
//! - Week-number conversions relative to a birthdate

pub mod birthdate;
pub mod clock;
pub mod weeks;

pub use birthdate::*;
pub use clock::*;
pub use weeks::*;

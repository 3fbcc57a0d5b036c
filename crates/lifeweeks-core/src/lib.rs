//! Life in Weeks Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the workspace:
//! - Time units (Elapsed, millisecond constants)
//! - Statistical constants (life expectancy, cosmic, body, population)
//! - Language and feature flags
//! - Error types

pub mod constants;
pub mod error;
pub mod features;
pub mod language;
pub mod time;

pub use constants::*;
pub use error::*;
pub use features::*;
pub use language::*;
pub use time::*;

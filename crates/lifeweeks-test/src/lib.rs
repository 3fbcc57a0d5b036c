//! Life in Weeks Test Harness
//!
//! This crate provides:
//! - Golden scenarios pinned to a fixed clock
//! - Timeline simulation that walks a clock forward and checks invariants
//! - Birthdate input fuzzing against the validation rules

pub mod fuzz;
pub mod golden;
pub mod timeline;

pub use fuzz::*;
pub use golden::*;
pub use timeline::*;

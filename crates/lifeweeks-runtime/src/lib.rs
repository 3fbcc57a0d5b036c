//! Life in Weeks Runtime - everything between the engine and a person
//!
//! - Layered configuration (defaults, JSON file, environment, flags)
//! - Tracing setup
//! - The two-step birthdate wizard
//! - The plain-text report
//! - The HTTP API

pub mod config;
pub mod report;
pub mod server;
pub mod session;
pub mod telemetry;

pub use self::config::*;
pub use report::*;
pub use server::*;
pub use session::*;
pub use telemetry::*;

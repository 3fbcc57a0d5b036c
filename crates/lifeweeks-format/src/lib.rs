//! Life in Weeks Format - presentation of statistics
//!
//! Numbers follow each language's grouping and decimal conventions. Unit
//! words ("hours", "km", "years") are English in every language.

pub mod date;
pub mod number;
pub mod span;

pub use date::*;
pub use number::*;
pub use span::*;

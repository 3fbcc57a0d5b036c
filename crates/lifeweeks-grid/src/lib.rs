//! Life in Weeks Grid - one cell per week of an expected lifespan
//!
//! The grid is a STATE, not a picture: each cell knows whether it is a week
//! already lived, the current week, or a week still ahead. Renderers turn
//! that state into text.

pub mod cell;
pub mod grid;
pub mod render;

pub use cell::*;
pub use grid::*;
pub use render::*;

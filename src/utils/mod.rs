//! Utility helpers: angle conversions and logging.

pub mod logging;
pub mod math;

pub use math::*;

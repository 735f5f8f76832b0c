use log::{Level, log_enabled, warn};
use std::time::Instant;

use crate::core::types::BoundsViolation;

/// Scoped timer that traces how long a simulation section ran.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("⏱️ start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("⏱️ end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Emits one warning per parameter outside the UI operating range.
pub fn warn_on_bounds_violations(violations: &[BoundsViolation]) {
    for violation in violations {
        warn!("Parameter outside operating bounds: {violation}");
    }
}

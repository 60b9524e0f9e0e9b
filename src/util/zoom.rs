//! Map zoom stepping.
//!
//! Each step is rounded to two decimals so repeated taps land on exact
//! readouts (`110%`, not `110.00000000000001%`).

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::config::ZoomConfig;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One step larger, capped at `config.max`.
pub fn zoom_in(current: f64, config: &ZoomConfig) -> f64 {
    round2(current + config.step).min(config.max)
}

/// One step smaller, floored at `config.min`.
pub fn zoom_out(current: f64, config: &ZoomConfig) -> f64 {
    round2(current - config.step).max(config.min)
}

/// Zoom factor as a whole percentage.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(zoom: f64) -> u32 {
    (zoom * 100.0).round().max(0.0) as u32
}

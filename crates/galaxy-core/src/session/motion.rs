//! Whole-cloud sway animation.

use std::f64::consts::{PI, TAU};

/// Angular frequency of the sway, in radians of sine argument per second.
pub const SWAY_FREQUENCY: f64 = 0.1;

/// Seconds for one full back-and-forth sway.
pub const SWAY_PERIOD: f64 = TAU / SWAY_FREQUENCY;

/// Rotation about the vertical axis at `elapsed_seconds`.
///
/// Depends only on absolute elapsed time, so the motion is identical at
/// any frame rate. The result lies in `[-pi, pi]`.
pub fn rotation_at(elapsed_seconds: f64) -> f32 {
    ((elapsed_seconds * SWAY_FREQUENCY).sin() * PI) as f32
}

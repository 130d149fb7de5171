use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::errors::GalaxyError;

/// How the `randomness` field participates in per-axis displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RandomnessMode {
    /// Displacement is `uniform^randomness_power` with a random sign; `randomness` is ignored.
    #[default]
    Unscaled,
    /// Displacement is additionally multiplied by `randomness * radius`.
    Scaled,
}

/// The user-editable galaxy parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Number of points.
    pub count: u32,
    /// Point render size, consumed by the renderer only.
    pub size: f32,
    /// Maximum radial extent.
    pub radius: f32,
    /// Number of spiral arms.
    pub branches: u32,
    /// Radians of twist per unit radius.
    pub spin: f32,
    pub randomness: f32,
    /// Exponent on the displacement draw; higher values cluster points tighter to the arm.
    pub randomness_power: f32,
    /// Color at radius 0.
    pub inner_color: Color,
    /// Color at the outer radius.
    pub outer_color: Color,
    pub randomness_mode: RandomnessMode,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.01,
            radius: 5.0,
            branches: 5,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inner_color: Color::from_rgb(0xff, 0x60, 0x30),
            outer_color: Color::from_rgb(0x1b, 0x39, 0x84),
            randomness_mode: RandomnessMode::Unscaled,
        }
    }
}

impl ParameterSet {
    /// Check the invariants the generator relies on.
    ///
    /// `count` is unsigned, so only `branches`, `radius`, `randomness_power`,
    /// and the finiteness of the float fields can be violated.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if self.branches < 1 {
            return Err(GalaxyError::InvalidParameter(format!(
                "branches = {} must be at least 1",
                self.branches
            )));
        }
        let floats = [
            ("size", self.size),
            ("radius", self.radius),
            ("spin", self.spin),
            ("randomness", self.randomness),
            ("randomness_power", self.randomness_power),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GalaxyError::InvalidParameter(format!(
                "{name} = {value} is not finite"
            )));
        }
        if self.radius < 0.0 {
            return Err(GalaxyError::InvalidParameter(format!(
                "radius = {} must not be negative",
                self.radius
            )));
        }
        // Below 1 the falloff no longer concentrates points on the arms
        if self.randomness_power < 1.0 {
            return Err(GalaxyError::InvalidParameter(format!(
                "randomness_power = {} must be at least 1",
                self.randomness_power
            )));
        }
        Ok(())
    }
}

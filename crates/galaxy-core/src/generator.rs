//! Spiral-galaxy point-cloud generation.
//!
//! Each point picks a random distance along one of `branches` evenly spaced
//! arms, is twisted by `spin` radians per unit of distance, and is pushed off
//! the arm by a power-law displacement on every axis. Its color blends from
//! `inner_color` at the center to `outer_color` at `radius`.

use std::f32::consts::TAU;

use galaxy_common::{GalaxyError, ParameterSet, RandomnessMode};

use crate::random::UniformSource;

/// Generated point positions and colors, index-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
}

impl PointCloud {
    fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
        }
    }

    fn push(&mut self, position: [f32; 3], color: [f32; 3]) {
        self.positions.push(position);
        self.colors.push(color);
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Float RGB in `[0, 1]`, sRGB-encoded like the input colors.
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate `(position, color)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&[f32; 3], &[f32; 3])> {
        self.positions.iter().zip(self.colors.iter())
    }
}

/// Angle of the arm that point `index` belongs to.
///
/// Arms are assigned round-robin by index, never by sampling, so the
/// result depends only on `index` and `branches`.
pub fn branch_angle(index: u32, branches: u32) -> f32 {
    let branches = branches.max(1);
    (index % branches) as f32 / branches as f32 * TAU
}

/// Generate a galaxy from `params`, drawing samples from `source`.
///
/// Samples are consumed in a fixed order per point: distance, then a
/// (magnitude, sign) pair for each of X, Y and Z.
///
/// With `radius = 0` the color blend factor is defined as 0, so every
/// point takes `inner_color`.
pub fn generate<S: UniformSource + ?Sized>(
    params: &ParameterSet,
    source: &mut S,
) -> Result<PointCloud, GalaxyError> {
    params.validate()?;

    let mut cloud = PointCloud::with_capacity(params.count as usize);

    for i in 0..params.count {
        let random_radius = source.uniform() * params.radius;
        let branch = branch_angle(i, params.branches);
        let spin_angle = random_radius * params.spin;

        let scale = match params.randomness_mode {
            RandomnessMode::Unscaled => 1.0,
            RandomnessMode::Scaled => params.randomness * random_radius,
        };
        let random_x = displacement(source, params.randomness_power) * scale;
        let random_y = displacement(source, params.randomness_power) * scale;
        let random_z = displacement(source, params.randomness_power) * scale;

        let t = if params.radius > 0.0 {
            random_radius / params.radius
        } else {
            0.0
        };
        let color = params.inner_color.lerp_rgb(&params.outer_color, t);

        let angle = branch + spin_angle;
        let position = [
            angle.cos() * random_radius + random_x,
            random_y,
            angle.sin() * random_radius + random_z,
        ];

        cloud.push(position, color);
    }

    Ok(cloud)
}

/// `uniform^power` with a random sign.
fn displacement<S: UniformSource + ?Sized>(source: &mut S, power: f32) -> f32 {
    let magnitude = source.uniform().powf(power);
    magnitude * source.signed_unit()
}

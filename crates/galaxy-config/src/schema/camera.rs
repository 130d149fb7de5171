//! Camera and orbit-controls configuration.

use serde::{Deserialize, Serialize};

/// Perspective camera with orbit controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial eye position.
    pub position: [f32; 3],
    /// Orbit target.
    pub target: [f32; 3],
    /// Smooth out orbit motion after the pointer is released.
    pub damping: bool,
    /// Fraction of the remaining motion applied per frame (0-1).
    pub damping_factor: f32,
    /// Radians of orbit per pixel of drag.
    pub rotate_speed: f32,
    /// Distance scale per wheel line.
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            position: [3.0, 3.0, 3.0],
            target: [0.0, 0.0, 0.0],
            damping: true,
            damping_factor: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
        }
    }
}

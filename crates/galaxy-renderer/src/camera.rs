//! Perspective camera orbiting a target, driven by pointer drag and wheel.

use galaxy_config::schema::CameraConfig;

use crate::matrix::{self, Mat4, Vec3};

/// Elevation is kept just short of the poles so `look_at` stays defined.
const MAX_ELEVATION: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Orbit-controls camera.
///
/// The eye sits on a sphere around `target`, described by an azimuth
/// (`yaw`, about +Y) and an elevation (`pitch`, above the XZ plane). Input is
/// accumulated as pending deltas; [`OrbitCamera::update`] applies them,
/// either all at once or eased out over several frames when damping is on.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    fov_y: f32,
    near: f32,
    far: f32,
    aspect: f32,
    damping: bool,
    damping_factor: f32,
    rotate_speed: f32,
    zoom_speed: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let offset = matrix::sub(config.position, config.target);
        let distance = matrix::length(offset).max(config.near);
        let yaw = offset[0].atan2(offset[2]);
        let pitch = (offset[1] / distance)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);

        Self {
            target: config.target,
            distance,
            yaw,
            pitch,
            fov_y: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            aspect,
            damping: config.damping,
            damping_factor: config.damping_factor,
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
        }
    }

    /// Queue an orbit for a pointer drag of `dx`, `dy` physical pixels.
    ///
    /// Dragging right swings the camera left around the target; dragging
    /// down raises it.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.pending_yaw -= dx * self.rotate_speed;
        self.pending_pitch += dy * self.rotate_speed;
    }

    /// Queue a zoom of `lines` wheel lines. Positive values move closer.
    pub fn zoom(&mut self, lines: f32) {
        self.pending_zoom += lines;
    }

    /// Apply pending input. Call once per frame before reading matrices.
    pub fn update(&mut self) {
        let fraction = if self.damping {
            self.damping_factor
        } else {
            1.0
        };

        self.yaw += self.pending_yaw * fraction;
        self.pitch = (self.pitch + self.pending_pitch * fraction)
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);
        let scale = (1.0 - self.zoom_speed).powf(self.pending_zoom * fraction);
        self.distance = (self.distance * scale).clamp(self.near, self.far);

        let keep = 1.0 - fraction;
        self.pending_yaw *= keep;
        self.pending_pitch *= keep;
        self.pending_zoom *= keep;
        if self.pending_yaw.abs() < 1e-6 {
            self.pending_yaw = 0.0;
        }
        if self.pending_pitch.abs() < 1e-6 {
            self.pending_pitch = 0.0;
        }
        if self.pending_zoom.abs() < 1e-6 {
            self.pending_zoom = 0.0;
        }
    }

    /// True while damped motion is still settling.
    pub fn is_moving(&self) -> bool {
        self.pending_yaw != 0.0 || self.pending_pitch != 0.0 || self.pending_zoom != 0.0
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        [
            self.target[0] + horizontal * self.yaw.sin(),
            self.target[1] + self.distance * self.pitch.sin(),
            self.target[2] + horizontal * self.yaw.cos(),
        ]
    }

    pub fn view(&self) -> Mat4 {
        matrix::look_at(self.eye(), self.target, [0.0, 1.0, 0.0])
    }

    pub fn projection(&self) -> Mat4 {
        matrix::perspective(self.fov_y, self.aspect, self.near, self.far)
    }
}

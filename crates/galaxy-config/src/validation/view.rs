//! Window, camera, and renderer validation.

use crate::schema::GalaxyConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &GalaxyConfig) {
    validate_range(errors, "window.width", config.window.width, 100, 16384);
    validate_range(errors, "window.height", config.window.height, 100, 16384);
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &GalaxyConfig) {
    let camera = &config.camera;

    validate_range_f64(
        errors,
        "camera.fov_degrees",
        camera.fov_degrees as f64,
        10.0,
        170.0,
    );
    validate_range_f64(errors, "camera.near", camera.near as f64, 0.001, 10.0);
    if !camera.far.is_finite() || camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
    validate_range_f64(
        errors,
        "camera.damping_factor",
        camera.damping_factor as f64,
        0.001,
        1.0,
    );
    validate_range_f64(
        errors,
        "camera.rotate_speed",
        camera.rotate_speed as f64,
        0.0,
        1.0,
    );
    validate_range_f64(errors, "camera.zoom_speed", camera.zoom_speed as f64, 0.0, 1.0);

    let eye = camera.position;
    let target = camera.target;
    let distance_sq: f32 = (0..3).map(|i| (eye[i] - target[i]).powi(2)).sum();
    if !distance_sq.is_finite() || distance_sq <= 0.0 {
        errors.push("camera.position must differ from camera.target".into());
    }
}

pub(crate) fn validate_renderer(errors: &mut Vec<String>, config: &GalaxyConfig) {
    validate_range_f64(
        errors,
        "renderer.max_pixel_ratio",
        config.renderer.max_pixel_ratio,
        0.5,
        4.0,
    );
}

use galaxy_common::Color;

use crate::points::srgb_to_linear;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Convert the configured background to a clear value for `format`.
pub fn clear_color_for(color: Color, format: wgpu::TextureFormat) -> wgpu::Color {
    let [r, g, b] = color.to_rgb_f32();
    let channel = |c: f32| {
        if format.is_srgb() {
            srgb_to_linear(c) as f64
        } else {
            c as f64
        }
    };
    wgpu::Color {
        r: channel(r),
        g: channel(g),
        b: channel(b),
        a: color.a as f64 / 255.0,
    }
}

/// Device pixel ratio used for sizing, capped at `max_pixel_ratio`.
pub fn effective_pixel_ratio(scale_factor: f64, max_pixel_ratio: f64) -> f32 {
    scale_factor.clamp(0.0, max_pixel_ratio.max(0.0)) as f32
}

//! Hue rotation for keyboard-driven color picking.

use galaxy_common::Color;

/// Rotate the hue of `color` by `degrees`, keeping saturation and value.
pub fn rotate_hue(color: Color, degrees: f32) -> Color {
    let [r, g, b] = color.to_rgb_f32();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta <= f32::EPSILON {
        return color;
    }

    let hue = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let saturation = delta / max;

    let rotated = Color::from_rgb_f32(hsv_to_rgb((hue + degrees).rem_euclid(360.0), saturation, max));
    Color { a: color.a, ..rotated }
}

fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    [r + m, g + m, b + m]
}

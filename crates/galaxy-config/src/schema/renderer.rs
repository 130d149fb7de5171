//! Renderer configuration types.

use galaxy_common::Color;
use serde::{Deserialize, Serialize};

/// Surface and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    pub clear_color: Color,
    /// Upper bound on the device pixel ratio used for point sizing (valid range: 0.5-4.0).
    pub max_pixel_ratio: f64,
    pub vsync: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::from_rgb(0, 0, 0),
            max_pixel_ratio: 2.0,
            vsync: true,
        }
    }
}

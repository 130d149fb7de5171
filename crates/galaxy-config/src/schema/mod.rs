//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the default galaxy values.

mod camera;
mod generator;
mod renderer;
mod system;
mod window;

pub use camera::*;
pub use generator::*;
pub use renderer::*;
pub use system::*;
pub use window::*;

pub use galaxy_common::{Color, ParameterSet, RandomnessMode};

use serde::{Deserialize, Serialize};

/// Root configuration for the galaxy viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GalaxyConfig {
    pub galaxy: ParameterSet,
    pub generator: GeneratorConfig,
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub renderer: RendererConfig,
    pub logging: LoggingConfig,
}

//! Random sampling configuration.

use serde::{Deserialize, Serialize};

/// Generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed RNG seed. Every regeneration reuses the same sequence when set;
    /// `None` draws a fresh sample each time.
    pub seed: Option<u64>,
}

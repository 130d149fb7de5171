use std::time::Instant;

use galaxy_common::{GalaxyError, ParameterSet};
use tracing::{debug, info};

use crate::backend::RenderBackend;
use crate::generator::generate;
use crate::random::{RandomSource, UniformSource};

use super::motion::rotation_at;

/// Whether a point cloud is currently attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Active,
}

/// Owns the current parameters, the live point cloud, and the backend it lives on.
pub struct SceneSession<B: RenderBackend, S: UniformSource = RandomSource> {
    backend: B,
    source: S,
    params: ParameterSet,
    live: Option<B::Handle>,
    rotation_y: f32,
    regenerations: u64,
}

impl<B: RenderBackend, S: UniformSource> SceneSession<B, S> {
    /// Create an EMPTY session. Nothing is generated until [`Self::regenerate`].
    pub fn new(backend: B, source: S, params: ParameterSet) -> Self {
        Self {
            backend,
            source,
            params,
            live: None,
            rotation_y: 0.0,
            regenerations: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.live.is_some() {
            SessionState::Active
        } else {
            SessionState::Empty
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Replace the parameters without regenerating. Returns whether they changed.
    pub fn set_params(&mut self, params: ParameterSet) -> bool {
        if self.params == params {
            return false;
        }
        self.params = params;
        true
    }

    /// Adopt `params` and regenerate if they differ from the current set.
    ///
    /// Returns whether a regeneration happened. Invalid parameters are
    /// rejected before they are stored, leaving the current set and cloud.
    pub fn apply_params(&mut self, params: ParameterSet) -> Result<bool, GalaxyError> {
        params.validate()?;
        if !self.set_params(params) {
            return Ok(false);
        }
        self.regenerate()?;
        Ok(true)
    }

    /// Swap the random source, returning the previous one.
    pub fn replace_source(&mut self, source: S) -> S {
        std::mem::replace(&mut self.source, source)
    }

    /// Release the current cloud (if any), then generate and attach a new one.
    ///
    /// Parameters are validated before anything is released, so an invalid
    /// set leaves the current cloud on screen. If the backend fails to
    /// upload, the session is left EMPTY.
    pub fn regenerate(&mut self) -> Result<(), GalaxyError> {
        self.params.validate()?;

        let started = Instant::now();
        self.clear();

        let cloud = generate(&self.params, &mut self.source)?;
        let handle = self.backend.upload(&cloud, self.params.size)?;
        self.backend.attach(&handle);
        self.backend.set_rotation_y(&handle, self.rotation_y);
        self.live = Some(handle);
        self.regenerations += 1;

        debug!(
            points = cloud.len(),
            branches = self.params.branches,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "galaxy regenerated"
        );
        Ok(())
    }

    /// Detach and release the live cloud, returning to EMPTY.
    pub fn clear(&mut self) {
        if let Some(handle) = self.live.take() {
            self.backend.detach(&handle);
            self.backend.release(handle);
        }
    }

    /// Advance the sway animation to `elapsed_seconds` and return the new rotation.
    pub fn tick(&mut self, elapsed_seconds: f64) -> f32 {
        self.rotation_y = rotation_at(elapsed_seconds);
        if let Some(handle) = self.live.as_ref() {
            self.backend.set_rotation_y(handle, self.rotation_y);
        }
        self.rotation_y
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Number of successful regenerations so far.
    pub fn regeneration_count(&self) -> u64 {
        self.regenerations
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: RenderBackend, S: UniformSource> Drop for SceneSession<B, S> {
    fn drop(&mut self) {
        if self.live.is_some() {
            info!("releasing galaxy on session shutdown");
            self.clear();
        }
    }
}
